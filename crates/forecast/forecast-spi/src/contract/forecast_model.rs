//! Trait for forecasting models

use std::fmt;

use crate::error::{ForecastError, Result};
use crate::model::{FitScore, FitStatus, ModelFamily};

/// Trait implemented by every forecasting model
///
/// History is ordered oldest to newest and implicitly indexed
/// `-(n-1) ..= 0`, so offset 0 is the most recent observation and positive
/// offsets lie in the future.
pub trait ForecastModel: fmt::Display + Send + Sync {
    /// Human-readable description including hyperparameters
    fn name(&self) -> String;

    /// Smallest history length `fit` accepts
    fn minimum_samples(&self) -> usize;

    fn family(&self) -> ModelFamily;

    fn status(&self) -> FitStatus;

    /// Fit the model to `history`
    ///
    /// Fitted state is committed before the numerical outcome is checked, so
    /// a [`FitScore::Degenerate`] result still leaves the model fitted.
    fn fit(&mut self, history: &[f64]) -> Result<FitScore>;

    /// Value at time offset `x`, NaN where the model is undefined
    fn evaluate(&self, x: f64) -> f64;

    fn is_fitted(&self) -> bool {
        self.status() != FitStatus::Unfitted
    }

    fn is_autoregressive(&self) -> bool {
        self.family() == ModelFamily::Autoregressive
    }

    /// [`ForecastModel::evaluate`] with non-finite results mapped to `None`
    fn estimate(&self, x: f64) -> Option<f64> {
        let value = self.evaluate(x);
        value.is_finite().then_some(value)
    }

    /// `[evaluate(1), ..., evaluate(horizon)]`
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        if horizon == 0 {
            return Err(ForecastError::invalid_parameter(
                "horizon",
                "must be greater than zero",
            ));
        }
        Ok((1..=horizon).map(|step| self.evaluate(step as f64)).collect())
    }
}
