//! Forecast Service Provider Interface
//!
//! Defines the contract every forecasting model satisfies, the fit outcome
//! types, and the shared goodness-of-fit and time-axis helpers.

pub mod contract;
pub mod error;
pub mod model;
pub mod util;

// Re-export all public items at crate root for convenience
pub use contract::ForecastModel;
pub use error::{ForecastError, Result};
pub use model::{FitScore, FitStatus, ModelFamily};
pub use util::{coefficient_of_determination, implicit_time_index, validate_history};
