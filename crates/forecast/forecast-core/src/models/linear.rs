//! Simple linear regression over the implicit time index
//!
//! Fits `y = alpha + beta * t` by closed-form ordinary least squares, with
//! `t` running `-(n-1) ..= 0` so `alpha` is the fitted value at the most
//! recent observation.

use std::fmt;

use forecast_spi::{
    coefficient_of_determination, implicit_time_index, validate_history, FitScore, FitStatus,
    ForecastModel, ModelFamily, Result,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Straight-line trend model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimpleLinearRegression {
    /// Intercept at offset 0
    alpha: f64,
    /// Slope per time step
    beta: f64,
    status: FitStatus,
}

impl SimpleLinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intercept(&self) -> f64 {
        self.alpha
    }

    pub fn slope(&self) -> f64 {
        self.beta
    }
}

impl ForecastModel for SimpleLinearRegression {
    fn name(&self) -> String {
        "simple linear regression".to_string()
    }

    fn minimum_samples(&self) -> usize {
        2
    }

    fn family(&self) -> ModelFamily {
        ModelFamily::Direct
    }

    fn status(&self) -> FitStatus {
        self.status
    }

    fn fit(&mut self, history: &[f64]) -> Result<FitScore> {
        validate_history(history, self.minimum_samples())?;

        let t = implicit_time_index(history.len());
        let n = history.len() as f64;
        let sum_t: f64 = t.iter().sum();
        let sum_y: f64 = history.iter().sum();
        let sum_t2: f64 = t.iter().map(|x| x * x).sum();
        let sum_ty: f64 = t.iter().zip(history).map(|(x, y)| x * y).sum();

        // Distinct time points keep the denominator positive.
        self.beta = (n * sum_ty - sum_t * sum_y) / (n * sum_t2 - sum_t * sum_t);
        self.alpha = sum_y / n - self.beta * sum_t / n;
        self.status = FitStatus::Fitted;

        let fitted: Vec<f64> = t.iter().map(|&x| self.evaluate(x)).collect();
        let score = FitScore::from_r_squared(coefficient_of_determination(history, &fitted));
        debug!(model = %self.name(), samples = history.len(), score = ?score, "fitted model");
        Ok(score)
    }

    fn evaluate(&self, x: f64) -> f64 {
        if self.status == FitStatus::Unfitted {
            return f64::NAN;
        }
        self.alpha + self.beta * x
    }
}

impl fmt::Display for SimpleLinearRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ alpha={}, beta={} }}",
            self.name(),
            self.alpha,
            self.beta
        )
    }
}
