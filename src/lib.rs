pub mod error;
pub mod evaluator;
pub mod math;
pub mod path;

pub use error::{Result, UnitPathError};
pub use evaluator::{EvaluatorConfig, PathEvaluator};
pub use path::{Arc, CubicBezier, Curve, CurveKind, Line, PathSpec, QuadraticBezier};
