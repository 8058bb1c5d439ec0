//! Forecast Core
//!
//! Core implementations of the forecasting models, plus projection of a
//! fitted model over its history and horizon, and parsing of raw series
//! text.

pub mod data;
pub mod models;
pub mod projection;

// Re-export SPI types for implementations
pub use forecast_spi::{
    coefficient_of_determination, implicit_time_index, FitScore, FitStatus, ForecastError,
    ForecastModel, ModelFamily, Result,
};

// Re-export main types
pub use data::parse_series;
pub use models::{
    Arima, ArimaBase, AutoRegression, AutoRegressiveMovingAverage, ConstantRegression,
    PolynomialRegression, SimpleLinearRegression,
};
pub use projection::{project, Projection, ProjectionPoint};
