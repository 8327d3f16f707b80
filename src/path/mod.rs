mod arc;
mod cubic;
mod line;
mod quadratic;

pub use arc::Arc;
pub use cubic::CubicBezier;
pub use line::Line;
pub use quadratic::QuadraticBezier;

use std::fmt;
use std::str::FromStr;

use crate::error::PathError;
use crate::math::Point2;

/// Trait for parametric path primitives over `t` in `[0, 1]`.
///
/// `t = 0` is the path start and `t = 1` the path end. Implementations are
/// pure: evaluation never fails and has no side effects. Range checking of
/// `t` is the caller's concern.
pub trait Curve {
    /// Evaluates the path at parameter `t`, returning the 2D point.
    fn point_at(&self, t: f64) -> Point2;
}

/// The closed set of supported curve kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Line,
    QuadraticBezier,
    CubicBezier,
    Arc,
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Line => "LINE",
            Self::QuadraticBezier => "TWO_ORDER_BEZIER",
            Self::CubicBezier => "THREE_ORDER_BEZIER",
            Self::Arc => "ARC",
        };
        f.write_str(name)
    }
}

impl FromStr for CurveKind {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LINE" => Ok(Self::Line),
            "TWO_ORDER_BEZIER" => Ok(Self::QuadraticBezier),
            "THREE_ORDER_BEZIER" => Ok(Self::CubicBezier),
            "ARC" => Ok(Self::Arc),
            other => Err(PathError::UnknownCurveKind(other.to_owned())),
        }
    }
}

/// A fully specified path: one curve kind plus its defining parameters.
///
/// Construction happens through the individual curve constructors
/// ([`Line::new`], [`QuadraticBezier::new`], [`CubicBezier::new`],
/// [`Arc::new`]); any arc normalization is already done by the time a
/// `PathSpec` exists.
#[derive(Debug, Clone)]
pub enum PathSpec {
    Line(Line),
    Quadratic(QuadraticBezier),
    Cubic(CubicBezier),
    Arc(Arc),
}

impl PathSpec {
    /// Returns the curve kind of this path.
    #[must_use]
    pub fn kind(&self) -> CurveKind {
        match self {
            Self::Line(_) => CurveKind::Line,
            Self::Quadratic(_) => CurveKind::QuadraticBezier,
            Self::Cubic(_) => CurveKind::CubicBezier,
            Self::Arc(_) => CurveKind::Arc,
        }
    }
}

impl Curve for PathSpec {
    fn point_at(&self, t: f64) -> Point2 {
        match self {
            Self::Line(c) => c.point_at(t),
            Self::Quadratic(c) => c.point_at(t),
            Self::Cubic(c) => c.point_at(t),
            Self::Arc(c) => c.point_at(t),
        }
    }
}

impl From<Line> for PathSpec {
    fn from(c: Line) -> Self {
        Self::Line(c)
    }
}

impl From<QuadraticBezier> for PathSpec {
    fn from(c: QuadraticBezier) -> Self {
        Self::Quadratic(c)
    }
}

impl From<CubicBezier> for PathSpec {
    fn from(c: CubicBezier) -> Self {
        Self::Cubic(c)
    }
}

impl From<Arc> for PathSpec {
    fn from(c: Arc) -> Self {
        Self::Arc(c)
    }
}
