use crate::math::Point2;

use super::Curve;

/// A quadratic Bezier curve defined by start, control, and end points.
///
/// `B(t) = (1-t)^2 * P0 + 2t(1-t) * P1 + t^2 * P2`
#[derive(Debug, Clone)]
pub struct QuadraticBezier {
    start: Point2,
    control: Point2,
    end: Point2,
}

impl QuadraticBezier {
    /// Creates a new quadratic Bezier curve.
    #[must_use]
    pub fn new(start: Point2, control: Point2, end: Point2) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Returns the start point of the curve.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the control point of the curve.
    #[must_use]
    pub fn control(&self) -> &Point2 {
        &self.control
    }

    /// Returns the end point of the curve.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }
}

impl Curve for QuadraticBezier {
    fn point_at(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let b0 = u * u;
        let b1 = 2.0 * t * u;
        let b2 = t * t;
        Point2::new(
            b0 * self.start.x + b1 * self.control.x + b2 * self.end.x,
            b0 * self.start.y + b1 * self.control.y + b2 * self.end.y,
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
        // At t=0 and t=1 all but one basis term vanish.
        let curve = QuadraticBezier::new(
            Point2::new(100.0, 100.0),
            Point2::new(200.0, 150.0),
            Point2::new(400.0, 100.0),
        );
        assert_eq!(curve.point_at(0.0), Point2::new(100.0, 100.0));
        assert_eq!(curve.point_at(1.0), Point2::new(400.0, 100.0));
    }

    #[test]
    fn midpoint_mixes_control() {
        // B(0.5) = (P0 + 2*P1 + P2) / 4
        let curve = QuadraticBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 4.0),
            Point2::new(4.0, 0.0),
        );
        let p = curve.point_at(0.5);
        assert_relative_eq!(p.x, 2.0, epsilon = TOLERANCE);
        assert_relative_eq!(p.y, 2.0, epsilon = TOLERANCE);
    }
}
