use crate::math::Point2;

use super::Curve;

/// A cubic Bezier curve defined by start, two control points, and end.
///
/// `B(t) = (1-t)^3 * P0 + 3t(1-t)^2 * P1 + 3t^2(1-t) * P2 + t^3 * P3`
#[derive(Debug, Clone)]
pub struct CubicBezier {
    start: Point2,
    control1: Point2,
    control2: Point2,
    end: Point2,
}

impl CubicBezier {
    /// Creates a new cubic Bezier curve.
    #[must_use]
    pub fn new(start: Point2, control1: Point2, control2: Point2, end: Point2) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    /// Returns the start point of the curve.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the first control point of the curve.
    #[must_use]
    pub fn control1(&self) -> &Point2 {
        &self.control1
    }

    /// Returns the second control point of the curve.
    #[must_use]
    pub fn control2(&self) -> &Point2 {
        &self.control2
    }

    /// Returns the end point of the curve.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }
}

impl Curve for CubicBezier {
    fn point_at(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * t * u * u;
        let b2 = 3.0 * t * t * u;
        let b3 = t * t * t;
        Point2::new(
            b0 * self.start.x + b1 * self.control1.x + b2 * self.control2.x + b3 * self.end.x,
            b0 * self.start.y + b1 * self.control1.y + b2 * self.control2.y + b3 * self.end.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_are_exact() {
        let curve = CubicBezier::new(
            Point2::new(100.0, 100.0),
            Point2::new(200.0, 150.0),
            Point2::new(300.0, 50.0),
            Point2::new(400.0, 100.0),
        );
        assert_eq!(curve.point_at(0.0), Point2::new(100.0, 100.0));
        assert_eq!(curve.point_at(1.0), Point2::new(400.0, 100.0));
    }

    #[test]
    fn midpoint_mixes_controls() {
        // B(0.5) = (P0 + 3*P1 + 3*P2 + P3) / 8
        let curve = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 8.0),
            Point2::new(8.0, 8.0),
            Point2::new(8.0, 0.0),
        );
        let p = curve.point_at(0.5);
        assert_relative_eq!(p.x, 4.0, epsilon = TOLERANCE);
        assert_relative_eq!(p.y, 6.0, epsilon = TOLERANCE);
    }

    #[test]
    fn degenerate_controls_collapse_to_line() {
        // Controls on the chord leave the curve on the chord.
        let curve = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 3.0),
        );
        let p = curve.point_at(0.5);
        assert!((p.x - p.y).abs() < TOLERANCE, "p=({}, {})", p.x, p.y);
    }
}
