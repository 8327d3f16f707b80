use crate::math::Point2;

use super::Curve;

/// A straight line segment between two points.
///
/// The parametric form is `P(t) = start + (end - start) * t`.
#[derive(Debug, Clone)]
pub struct Line {
    start: Point2,
    end: Point2,
}

impl Line {
    /// Creates a new line segment from `start` to `end`.
    ///
    /// A zero-length segment is allowed; every parameter then maps to the
    /// same point.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }
}

impl Curve for Line {
    fn point_at(&self, t: f64) -> Point2 {
        self.start + (self.end - self.start) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn endpoints_are_exact() {
        let line = Line::new(Point2::new(100.0, 100.0), Point2::new(400.0, 100.0));
        assert_eq!(line.point_at(0.0), Point2::new(100.0, 100.0));
        assert_eq!(line.point_at(1.0), Point2::new(400.0, 100.0));
    }

    #[test]
    fn midpoint() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, -4.0));
        let p = line.point_at(0.5);
        assert!((p.x - 5.0).abs() < TOLERANCE, "x={}", p.x);
        assert!((p.y + 2.0).abs() < TOLERANCE, "y={}", p.y);
    }

    #[test]
    fn zero_length_segment() {
        let line = Line::new(Point2::new(3.0, 3.0), Point2::new(3.0, 3.0));
        assert_eq!(line.point_at(0.7), Point2::new(3.0, 3.0));
    }
}
