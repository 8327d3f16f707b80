use crate::error::{PathError, Result};
use crate::math::angle::{normalize, NormalizedArc};
use crate::math::{Point2, TOLERANCE};

use super::Curve;

/// A circular arc around a center point.
///
/// Raw start and end angles (radians, unbounded) plus a direction flag are
/// normalized into a canonical `(start_angle, sweep, clockwise)` triple once
/// at construction; every query afterwards is a single cos/sin evaluation.
#[derive(Debug, Clone)]
pub struct Arc {
    center: Point2,
    radius: f64,
    normalized: NormalizedArc,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `start_angle` - Start angle in radians, any real value
    /// * `end_angle` - End angle in radians, any real value
    /// * `clockwise` - Whether the arc is traversed clockwise
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn new(
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(PathError::InvalidRadius { radius }.into());
        }

        Ok(Self {
            center,
            radius,
            normalized: normalize(start_angle, end_angle, clockwise),
        })
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the normalized angular range of the arc.
    #[must_use]
    pub fn normalized(&self) -> &NormalizedArc {
        &self.normalized
    }
}

impl Curve for Arc {
    fn point_at(&self, t: f64) -> Point2 {
        let angle = self.normalized.angle_at(t);
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}
