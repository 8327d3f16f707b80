use thiserror::Error;

/// Top-level error type for the unit-path evaluation engine.
#[derive(Debug, Error)]
pub enum UnitPathError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Errors related to evaluator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("decimal places must be -1 (no rounding) or a non-negative integer, got {value}")]
    InvalidDecimalPlaces { value: i32 },

    #[error("default sample count must be a positive integer, got {value}")]
    InvalidDefaultSampleCount { value: usize },
}

/// Errors related to path construction.
#[derive(Debug, Error)]
pub enum PathError {
    #[error(
        "unknown curve kind '{0}', expected 'LINE', 'TWO_ORDER_BEZIER', \
         'THREE_ORDER_BEZIER', or 'ARC'"
    )]
    UnknownCurveKind(String),

    #[error("arc radius must be positive, got {radius}")]
    InvalidRadius { radius: f64 },
}

/// Errors related to point queries against a configured path.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("no path configured; set a path before querying points")]
    NoPathConfigured,

    #[error("parameter t = {value} is out of range [0, 1]")]
    ParameterOutOfRange { value: f64 },

    #[error("sample count must be a positive integer, got {value}")]
    InvalidSampleCount { value: usize },
}

/// Convenience type alias for results using [`UnitPathError`].
pub type Result<T> = std::result::Result<T, UnitPathError>;
