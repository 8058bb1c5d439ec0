//! Constant regression: the sample mean at every offset

use std::fmt;

use forecast_spi::{validate_history, FitScore, FitStatus, ForecastModel, ModelFamily, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::regression::mean;

/// Baseline model predicting the mean of the fit window
///
/// Its R² is zero by convention: it is the reference the other models are
/// compared against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConstantRegression {
    average: f64,
    status: FitStatus,
}

impl ConstantRegression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn average(&self) -> f64 {
        self.average
    }
}

impl ForecastModel for ConstantRegression {
    fn name(&self) -> String {
        "constant regression".to_string()
    }

    fn minimum_samples(&self) -> usize {
        1
    }

    fn family(&self) -> ModelFamily {
        ModelFamily::Direct
    }

    fn status(&self) -> FitStatus {
        self.status
    }

    fn fit(&mut self, history: &[f64]) -> Result<FitScore> {
        validate_history(history, self.minimum_samples())?;
        self.average = mean(history);
        self.status = FitStatus::Fitted;

        let score = FitScore::RSquared(0.0);
        debug!(model = %self.name(), samples = history.len(), score = ?score, "fitted model");
        Ok(score)
    }

    fn evaluate(&self, _x: f64) -> f64 {
        if self.status == FitStatus::Unfitted {
            return f64::NAN;
        }
        self.average
    }
}

impl fmt::Display for ConstantRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ average={} }}", self.name(), self.average)
    }
}
