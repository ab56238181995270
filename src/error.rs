// src/error.rs
use std::fmt;

/// Custom error types for the langevin-sim library
#[derive(Debug, Clone)]
pub enum SimError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Time grid too short: `floor(total_time / dt)` leaves no step to take
    DegenerateTimeSpan { dt: f64, total_time: f64 },

    /// Numerical instability detected in the simulated ensemble
    NumericalInstability { method: String, reason: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            SimError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            SimError::DegenerateTimeSpan { dt, total_time } => {
                write!(
                    f,
                    "Degenerate time span: dt = {} against total_time = {} yields fewer than 2 time steps",
                    dt, total_time
                )
            }
            SimError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Result type alias for langevin-sim operations
pub type SimResult<T> = Result<T, SimError>;

/// Validation utilities
pub mod validation {
    use super::{SimError, SimResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SimResult<()> {
        if value <= 0.0 {
            Err(SimError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SimResult<()> {
        if !value.is_finite() {
            Err(SimError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate sample path count
    pub fn validate_paths(num_sample_paths: usize) -> SimResult<()> {
        if num_sample_paths == 0 {
            Err(SimError::InvalidConfiguration {
                field: "num_sample_paths".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if num_sample_paths > 1_000_000_000 {
            Err(SimError::InvalidConfiguration {
                field: "num_sample_paths".to_string(),
                reason: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
