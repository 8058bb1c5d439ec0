//! Autoregressive AR(p) model
//!
//! Predicts each value as a linear combination of the `p` preceding values,
//! all measured as deviations from a center `mu`:
//!
//! ```text
//! y[t] - mu = phi[0] * (y[t-p] - mu) + ... + phi[p-1] * (y[t-1] - mu)
//! ```
//!
//! Coefficients are estimated by least squares over every lag window of the
//! history. Evaluation restarts from the stored seed window on every call,
//! so repeated queries are independent of each other.
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::AutoRegression;
//! use forecast_spi::ForecastModel;
//!
//! let data: Vec<f64> = (0..30).map(|i| 10.0 + (i as f64 * 0.7).sin()).collect();
//! let mut model = AutoRegression::new(2).unwrap();
//! model.fit(&data).unwrap();
//! assert_eq!(model.forecast(4).unwrap().len(), 4);
//! assert!(model.evaluate(-1.0).is_nan());
//! ```

use std::fmt;

use forecast_spi::{
    coefficient_of_determination, validate_history, FitScore, FitStatus, ForecastError,
    ForecastModel, ModelFamily, Result,
};
use linalg::format::format_bracketed_vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::regression::{
    check_state_len, lag_sum, lag_system, least_squares, mean, recursion_steps,
};

/// AR(p) model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "AutoRegressionState")]
pub struct AutoRegression {
    /// Order (p)
    p: usize,
    /// Center the lags are measured from
    mu: f64,
    /// Lag coefficients, oldest lag first
    phi: Vec<f64>,
    /// Last `p` observations of the fit window
    seed: Vec<f64>,
    status: FitStatus,
}

/// Serialized form of [`AutoRegression`], checked before it becomes a model
#[derive(Deserialize)]
struct AutoRegressionState {
    p: usize,
    mu: f64,
    phi: Vec<f64>,
    seed: Vec<f64>,
    status: FitStatus,
}

impl TryFrom<AutoRegressionState> for AutoRegression {
    type Error = ForecastError;

    fn try_from(state: AutoRegressionState) -> Result<Self> {
        let mut model = Self::new(state.p)?;
        if state.status != FitStatus::Unfitted {
            check_state_len("phi", &state.phi, state.p)?;
            check_state_len("seed", &state.seed, state.p)?;
        }
        model.mu = state.mu;
        model.phi = state.phi;
        model.seed = state.seed;
        model.status = state.status;
        Ok(model)
    }
}

impl AutoRegression {
    /// Create an unfitted AR(p) model
    ///
    /// # Errors
    ///
    /// `p` must be positive.
    pub fn new(p: usize) -> Result<Self> {
        if p == 0 {
            return Err(ForecastError::invalid_parameter("p", "AR order must be > 0"));
        }
        Ok(Self {
            p,
            mu: 0.0,
            phi: Vec::new(),
            seed: Vec::new(),
            status: FitStatus::Unfitted,
        })
    }

    pub fn order(&self) -> usize {
        self.p
    }

    pub fn mean(&self) -> f64 {
        self.mu
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.phi
    }

    pub fn seed(&self) -> &[f64] {
        &self.seed
    }

    /// Fit with a caller-supplied center instead of the sample mean
    pub fn fit_centered(&mut self, history: &[f64], center: f64) -> Result<FitScore> {
        validate_history(history, self.minimum_samples())?;
        if !center.is_finite() {
            return Err(ForecastError::invalid_parameter("center", "must be finite"));
        }

        let p = self.p;
        let (design, target) = lag_system(history, p, center);
        let solved = least_squares(&design, &target)?;
        let degenerate = solved.is_degenerate();

        self.mu = center;
        self.phi = solved.into_inner();
        self.seed = history[history.len() - p..].to_vec();

        if degenerate {
            self.status = FitStatus::Degenerate;
            warn!(model = %self.name(), samples = history.len(), "least-squares solve is degenerate");
            return Ok(FitScore::Degenerate);
        }

        // Fitted values feed later fitted values; the first p are warm-up.
        let mut fitted = history[..p].to_vec();
        for i in p..history.len() {
            let next = lag_sum(&self.phi, &fitted[i - p..i], self.mu) + self.mu;
            fitted.push(next);
        }

        let score = FitScore::from_r_squared(coefficient_of_determination(
            &history[p..],
            &fitted[p..],
        ));
        self.status = FitStatus::Fitted;
        debug!(model = %self.name(), samples = history.len(), score = ?score, "fitted model");
        Ok(score)
    }
}

impl ForecastModel for AutoRegression {
    fn name(&self) -> String {
        format!("autoregressive (AR) model with parameter p={}", self.p)
    }

    fn minimum_samples(&self) -> usize {
        2 * self.p + 1
    }

    fn family(&self) -> ModelFamily {
        ModelFamily::Autoregressive
    }

    fn status(&self) -> FitStatus {
        self.status
    }

    fn fit(&mut self, history: &[f64]) -> Result<FitScore> {
        self.fit_centered(history, mean(history))
    }

    fn evaluate(&self, x: f64) -> f64 {
        if self.status == FitStatus::Unfitted {
            return f64::NAN;
        }
        let Some(steps) = recursion_steps(x) else {
            return f64::NAN;
        };

        let mut window = self.seed.clone();
        for _ in 0..steps {
            let next = lag_sum(&self.phi, &window, self.mu) + self.mu;
            window.rotate_left(1);
            window[self.p - 1] = next;
        }
        window[self.p - 1]
    }
}

impl fmt::Display for AutoRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ mu={}, coefficients={}, initial values={} }}",
            self.name(),
            self.mu,
            format_bracketed_vector(&self.phi),
            format_bracketed_vector(&self.seed)
        )
    }
}
