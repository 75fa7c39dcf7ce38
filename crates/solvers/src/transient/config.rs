use thiserror::Error;

use super::Method;

/// Configuration for a fixed-step transient integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    method: Method,
    dt: f64,
    steps: usize,
    start_time: f64,
}

/// Errors that can occur when validating a transient config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("dt must be finite, got {0}")]
    NonFiniteStep(f64),

    #[error("dt must be nonzero")]
    ZeroStep,

    #[error("start_time must be finite, got {0}")]
    NonFiniteStart(f64),
}

pub(crate) fn validate_dt(dt: f64) -> Result<(), ConfigError> {
    if !dt.is_finite() {
        return Err(ConfigError::NonFiniteStep(dt));
    }
    if dt == 0.0 {
        return Err(ConfigError::ZeroStep);
    }
    Ok(())
}

impl Config {
    /// Creates a config starting at time zero.
    ///
    /// Negative `dt` integrates backward in time.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is zero or not finite.
    pub fn new(method: Method, dt: f64, steps: usize) -> Result<Self, ConfigError> {
        validate_dt(dt)?;
        Ok(Self {
            method,
            dt,
            steps,
            start_time: 0.0,
        })
    }

    /// Returns a copy of this config starting at `start_time`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start_time` is not finite.
    pub fn with_start_time(self, start_time: f64) -> Result<Self, ConfigError> {
        if !start_time.is_finite() {
            return Err(ConfigError::NonFiniteStart(start_time));
        }
        Ok(Self { start_time, ..self })
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[must_use]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }
}
