use crate::error::{ConfigError, QueryError, Result};
use crate::math::{round, Point2};
use crate::path::{Curve, PathSpec};

/// Output policy for a [`PathEvaluator`].
#[derive(Debug, Clone, Copy)]
pub struct EvaluatorConfig {
    /// Fractional digits kept on returned coordinates; `-1` keeps them all.
    pub decimal_places: i32,
    /// Number of points produced by [`PathEvaluator::sample`].
    pub default_sample_count: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            decimal_places: -1,
            default_sample_count: 50,
        }
    }
}

impl EvaluatorConfig {
    /// Checks the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if `decimal_places < -1` or `default_sample_count`
    /// is zero.
    pub fn validate(&self) -> Result<()> {
        if self.decimal_places < -1 {
            return Err(ConfigError::InvalidDecimalPlaces {
                value: self.decimal_places,
            }
            .into());
        }
        if self.default_sample_count == 0 {
            return Err(ConfigError::InvalidDefaultSampleCount {
                value: self.default_sample_count,
            }
            .into());
        }
        Ok(())
    }
}

/// Evaluates points along a configured path primitive.
///
/// The evaluator holds at most one [`PathSpec`] at a time; setting a path
/// replaces the previous one wholesale. Queries are read-only and pure, so
/// repeated calls with the same parameter return the same point.
///
/// ```
/// use unit_path::{Line, PathEvaluator, math::Point2};
///
/// let mut evaluator = PathEvaluator::new();
/// evaluator.set_path(Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)).into());
/// let mid = evaluator.point_at(0.5)?;
/// assert!((mid.x - 5.0).abs() < 1e-12);
/// # Ok::<(), unit_path::UnitPathError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathEvaluator {
    config: EvaluatorConfig,
    path: Option<PathSpec>,
}

impl PathEvaluator {
    /// Creates an evaluator with the default configuration
    /// (no rounding, 50-point samples) and no path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: EvaluatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, path: None })
    }

    /// Replaces the whole configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid; the previous
    /// configuration is kept in that case.
    pub fn set_config(&mut self, config: EvaluatorConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Sets the number of fractional digits kept on returned coordinates.
    /// `-1` disables rounding.
    ///
    /// # Errors
    ///
    /// Returns an error if `decimal_places < -1`.
    pub fn set_decimal_places(&mut self, decimal_places: i32) -> Result<()> {
        if decimal_places < -1 {
            return Err(ConfigError::InvalidDecimalPlaces {
                value: decimal_places,
            }
            .into());
        }
        self.config.decimal_places = decimal_places;
        Ok(())
    }

    /// Sets the number of points produced by [`sample`](Self::sample).
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn set_default_sample_count(&mut self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(ConfigError::InvalidDefaultSampleCount { value: count }.into());
        }
        self.config.default_sample_count = count;
        Ok(())
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Configures the path to evaluate, replacing any previous path.
    ///
    /// Returns `&mut Self` so a query can be chained onto the call.
    pub fn set_path(&mut self, spec: PathSpec) -> &mut Self {
        self.path = Some(spec);
        self
    }

    /// Returns the currently configured path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&PathSpec> {
        self.path.as_ref()
    }

    /// Evaluates the configured path at parameter `t` in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is configured or `t` is out of range.
    pub fn point_at(&self, t: f64) -> Result<Point2> {
        let Some(path) = &self.path else {
            return Err(QueryError::NoPathConfigured.into());
        };

        if !(0.0..=1.0).contains(&t) {
            return Err(QueryError::ParameterOutOfRange { value: t }.into());
        }

        Ok(self.finish(path.point_at(t)))
    }

    /// Samples `default_sample_count` evenly spaced points over the path.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is configured.
    pub fn sample(&self) -> Result<Vec<Point2>> {
        self.sample_n(self.config.default_sample_count)
    }

    /// Samples exactly `count` evenly spaced points over the path, with
    /// `t = i / (count - 1)`, so both endpoints are always included.
    ///
    /// A single-point sample sits at the path start (`t = 0`).
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or no path is configured.
    pub fn sample_n(&self, count: usize) -> Result<Vec<Point2>> {
        if count == 0 {
            return Err(QueryError::InvalidSampleCount { value: count }.into());
        }
        if self.path.is_none() {
            return Err(QueryError::NoPathConfigured.into());
        }

        if count == 1 {
            return Ok(vec![self.point_at(0.0)?]);
        }

        let last = count - 1;
        let mut points = Vec::with_capacity(count);
        #[allow(clippy::cast_precision_loss)]
        for i in 0..count {
            points.push(self.point_at(i as f64 / last as f64)?);
        }
        Ok(points)
    }

    fn finish(&self, p: Point2) -> Point2 {
        if self.config.decimal_places < 0 {
            return p;
        }
        Point2::new(
            round::round_to(p.x, self.config.decimal_places),
            round::round_to(p.y, self.config.decimal_places),
        )
    }
}
