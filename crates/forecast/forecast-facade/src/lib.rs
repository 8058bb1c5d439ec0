//! Forecast Facade
//!
//! High-level API for time-series forecasting. Re-exports all public types
//! from the forecast stack, and the linear-algebra kernel underneath it,
//! for convenient usage.
//!
//! ```rust
//! use forecast_facade::prelude::*;
//!
//! let history = [245.0, 247.0, 256.0, 257.0, 257.0, 258.0, 255.0, 253.0];
//! let mut model = ModelSpec::Arima { p: 2, d: 1, q: 0 }.build().unwrap();
//! model.fit(&history).unwrap();
//! let forecast = model.forecast(3).unwrap();
//! assert_eq!(forecast.len(), 3);
//! ```

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{data, models, projection};

// Re-export the kernel
pub use linalg;

// Re-export SPI contract
pub use forecast_spi::{
    validate_history, FitScore, FitStatus, ForecastError, ForecastModel, ModelFamily,
};
