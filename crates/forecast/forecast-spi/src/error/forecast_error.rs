//! Forecast error types

use linalg::LinalgError;
use thiserror::Error;

/// Errors that can occur while constructing, fitting or querying a model
///
/// These are contract violations only. A fit that runs into a singular or
/// rank-deficient system is not an error; it is reported through
/// [`crate::FitScore::Degenerate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the model
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter or argument value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Input rejected by the linear-algebra kernel
    #[error("Invalid input: {0}")]
    Linalg(#[from] LinalgError),

    /// Model tag not recognized by the construction interface
    #[error("Unknown model type: {0}")]
    UnknownModel(String),

    /// Raw series text has no lines
    #[error("Input is empty")]
    EmptyInput,

    /// A line of raw series text could not be parsed
    #[error("Malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },
}

impl ForecastError {
    /// Shorthand for [`ForecastError::InvalidParameter`]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ForecastError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
