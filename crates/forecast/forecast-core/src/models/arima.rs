//! ARIMA (AutoRegressive Integrated Moving Average) model
//!
//! The history is differenced `d` times and the differenced series is
//! modelled by an inner AR(p) model when `q = 0`, or an ARMA(p, q) model
//! otherwise. Forecasts of the differences are integrated back onto the
//! original scale using the last value recorded before each differencing
//! pass.
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::Arima;
//! use forecast_spi::ForecastModel;
//!
//! let data: Vec<f64> = (0..40).map(|i| i as f64 + (i as f64 * 0.9).sin()).collect();
//! let mut model = Arima::new(2, 1, 0).unwrap();
//! model.fit(&data).unwrap();
//! assert_eq!(model.evaluate(0.0), data[39]);
//! ```

use std::fmt;

use forecast_spi::{
    validate_history, FitScore, FitStatus, ForecastError, ForecastModel, ModelFamily, Result,
};
use linalg::format::format_bracketed_vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::arma::AutoRegressiveMovingAverage;
use super::autoregressive::AutoRegression;
use super::regression::{check_state_len, recursion_steps};

/// Model fitted to the differenced series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ArimaBase {
    Ar(AutoRegression),
    Arma(AutoRegressiveMovingAverage),
}

impl ArimaBase {
    pub fn as_model(&self) -> &dyn ForecastModel {
        match self {
            ArimaBase::Ar(model) => model,
            ArimaBase::Arma(model) => model,
        }
    }

    fn as_model_mut(&mut self) -> &mut dyn ForecastModel {
        match self {
            ArimaBase::Ar(model) => model,
            ArimaBase::Arma(model) => model,
        }
    }
}

/// ARIMA(p, d, q) model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ArimaState")]
pub struct Arima {
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
    base: ArimaBase,
    /// Last value of the series before each differencing pass, outermost first
    offsets: Vec<f64>,
    status: FitStatus,
}

/// Serialized form of [`Arima`]
#[derive(Deserialize)]
struct ArimaState {
    p: usize,
    d: usize,
    q: usize,
    base: ArimaBase,
    offsets: Vec<f64>,
    status: FitStatus,
}

impl TryFrom<ArimaState> for Arima {
    type Error = ForecastError;

    fn try_from(state: ArimaState) -> Result<Self> {
        let mut model = Self::new(state.p, state.d, state.q)?;
        let matches_orders = match &state.base {
            ArimaBase::Ar(base) => state.q == 0 && base.order() == state.p,
            ArimaBase::Arma(base) => base.ar_order() == state.p && base.ma_order() == state.q,
        };
        if !matches_orders {
            return Err(ForecastError::invalid_parameter(
                "base",
                format!(
                    "does not match orders ({}, {}, {})",
                    state.p, state.d, state.q
                ),
            ));
        }
        if state.status != FitStatus::Unfitted {
            check_state_len("offsets", &state.offsets, state.d)?;
        }
        model.base = state.base;
        model.offsets = state.offsets;
        model.status = state.status;
        Ok(model)
    }
}

impl Arima {
    /// Create an unfitted ARIMA(p, d, q) model
    ///
    /// # Errors
    ///
    /// `p` and `d` must be positive and `p >= q`.
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self> {
        if d == 0 {
            return Err(ForecastError::invalid_parameter(
                "d",
                "Differencing order must be > 0",
            ));
        }
        let base = if q == 0 {
            ArimaBase::Ar(AutoRegression::new(p)?)
        } else {
            ArimaBase::Arma(AutoRegressiveMovingAverage::new(p, q)?)
        };
        Ok(Self {
            p,
            d,
            q,
            base,
            offsets: Vec::new(),
            status: FitStatus::Unfitted,
        })
    }

    pub fn orders(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    pub fn base(&self) -> &ArimaBase {
        &self.base
    }

    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Apply first differencing once
    fn difference(series: &[f64]) -> Vec<f64> {
        series.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Cumulative sum seeded at `offset`; the first difference is the seed slot
    fn integrate(differences: &[f64], offset: f64) -> Vec<f64> {
        let mut level = offset;
        let mut out = Vec::with_capacity(differences.len());
        for (k, delta) in differences.iter().enumerate() {
            if k > 0 {
                level += delta;
            }
            out.push(level);
        }
        out
    }
}

impl ForecastModel for Arima {
    fn name(&self) -> String {
        format!(
            "autoregressive integrated moving average (ARIMA) model with d={} using [{}]",
            self.d,
            self.base.as_model().name()
        )
    }

    fn minimum_samples(&self) -> usize {
        self.base.as_model().minimum_samples() + self.d
    }

    fn family(&self) -> ModelFamily {
        ModelFamily::Autoregressive
    }

    fn status(&self) -> FitStatus {
        self.status
    }

    fn fit(&mut self, history: &[f64]) -> Result<FitScore> {
        validate_history(history, self.minimum_samples())?;

        let mut offsets = Vec::with_capacity(self.d);
        let mut series = history.to_vec();
        for _ in 0..self.d {
            offsets.push(series[series.len() - 1]);
            series = Self::difference(&series);
        }
        self.offsets = offsets;

        let score = self.base.as_model_mut().fit(&series)?;
        self.status = score.status();
        debug!(model = %self.name(), samples = history.len(), score = ?score, "fitted model");
        Ok(score)
    }

    fn evaluate(&self, x: f64) -> f64 {
        if self.status == FitStatus::Unfitted {
            return f64::NAN;
        }
        let Some(steps) = recursion_steps(x) else {
            return f64::NAN;
        };

        let base = self.base.as_model();
        let differences: Vec<f64> = (0..steps).map(|i| base.evaluate(i as f64)).collect();
        if differences.iter().any(|z| !z.is_finite()) {
            warn!(model = %self.name(), steps, "base forecast is not finite");
            return f64::NAN;
        }

        let mut level = differences;
        for &offset in self.offsets.iter().rev() {
            level = Self::integrate(&level, offset);
        }
        level.last().copied().unwrap_or(self.offsets[0])
    }
}

impl fmt::Display for Arima {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ d={}, delta offsets={}, base model={} }}",
            self.name(),
            self.d,
            format_bracketed_vector(&self.offsets),
            self.base.as_model()
        )
    }
}
