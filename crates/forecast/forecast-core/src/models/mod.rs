//! Forecasting model implementations
//!
//! Direct models (constant, linear, polynomial) are closed-form curves in
//! time. The autoregressive family (AR, ARMA, ARIMA) recurses forward from
//! the end of the fit window.

pub mod arima;
pub mod arma;
pub mod autoregressive;
pub mod constant;
pub mod linear;
pub mod polynomial;
mod regression;

pub use arima::{Arima, ArimaBase};
pub use arma::AutoRegressiveMovingAverage;
pub use autoregressive::AutoRegression;
pub use constant::ConstantRegression;
pub use linear::SimpleLinearRegression;
pub use polynomial::PolynomialRegression;
