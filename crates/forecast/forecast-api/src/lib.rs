//! Forecast Consumer API
//!
//! Model construction and configuration for the forecasting stack.
//!
//! This crate provides:
//! - [`ModelSpec`]: a serde-configurable model choice with a compact string form
//! - [`ForecastConfig`]: model choice plus forecast horizon
//! - [`create_model`]: construction from a model tag and positional hyperparameters
//! - Re-exports from SPI and core for convenience

pub mod config;

pub use config::{ForecastConfig, ModelSpec};

// Re-export from core
pub use forecast_core::{
    data, models, parse_series, project, projection, Arima, ArimaBase, AutoRegression,
    AutoRegressiveMovingAverage, ConstantRegression, PolynomialRegression, Projection,
    ProjectionPoint, SimpleLinearRegression,
};

// Re-export contract types from SPI
pub use forecast_spi::{
    coefficient_of_determination, implicit_time_index, FitScore, FitStatus, ForecastError,
    ForecastModel, ModelFamily, Result,
};

/// Build an unfitted model from a tag such as `"arima"` and its hyperparameters.
///
/// # Errors
///
/// [`ForecastError::UnknownModel`] for an unrecognized tag, and
/// [`ForecastError::InvalidParameter`] for missing or invalid hyperparameters.
pub fn create_model(tag: &str, params: &[usize]) -> Result<Box<dyn ForecastModel>> {
    ModelSpec::from_tag(tag, params)?.build()
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{create_model, ForecastConfig, ModelSpec};
    pub use forecast_core::{
        parse_series, project, Arima, AutoRegression, AutoRegressiveMovingAverage,
        ConstantRegression, PolynomialRegression, Projection, ProjectionPoint,
        SimpleLinearRegression,
    };
    pub use forecast_spi::{
        FitScore, FitStatus, ForecastError, ForecastModel, ModelFamily, Result,
    };
}
