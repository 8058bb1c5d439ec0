//! Autoregressive moving average ARMA(p, q) model
//!
//! Extends AR(p) with `q` lagged residual terms. Fitting runs two
//! least-squares stages: a provisional AR(p) fit yields the residual
//! series, then AR lags and residual lags are solved jointly.
//!
//! Future residuals are taken as zero, so forecasts carry no innovation.
//!
//! R² pairs each scored observation `history[2p + i]` with its own fitted
//! value `fitted[p + i]`; the first `2p` observations are warm-up.

use std::fmt;

use forecast_spi::{
    coefficient_of_determination, validate_history, FitScore, FitStatus, ForecastError,
    ForecastModel, ModelFamily, Result,
};
use linalg::format::format_bracketed_vector;
use linalg::{mat_mul_vec, sub_vectors};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::regression::{
    check_state_len, lag_sum, lag_system, least_squares, mean, recursion_steps,
};

/// ARMA(p, q) model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ArmaState")]
pub struct AutoRegressiveMovingAverage {
    /// AR order (p)
    p: usize,
    /// MA order (q)
    q: usize,
    mu: f64,
    /// AR coefficients
    phi: Vec<f64>,
    /// MA coefficients
    psi: Vec<f64>,
    /// Last `p` observations of the fit window
    seed: Vec<f64>,
    /// Last `p` residuals of the provisional AR fit
    noise: Vec<f64>,
    status: FitStatus,
}

/// Serialized form of [`AutoRegressiveMovingAverage`]
#[derive(Deserialize)]
struct ArmaState {
    p: usize,
    q: usize,
    mu: f64,
    phi: Vec<f64>,
    psi: Vec<f64>,
    seed: Vec<f64>,
    noise: Vec<f64>,
    status: FitStatus,
}

impl TryFrom<ArmaState> for AutoRegressiveMovingAverage {
    type Error = ForecastError;

    fn try_from(state: ArmaState) -> Result<Self> {
        let mut model = Self::new(state.p, state.q)?;
        if state.status != FitStatus::Unfitted {
            check_state_len("phi", &state.phi, state.p)?;
            check_state_len("psi", &state.psi, state.q)?;
            check_state_len("seed", &state.seed, state.p)?;
            check_state_len("noise", &state.noise, state.p)?;
        }
        model.mu = state.mu;
        model.phi = state.phi;
        model.psi = state.psi;
        model.seed = state.seed;
        model.noise = state.noise;
        model.status = state.status;
        Ok(model)
    }
}

impl AutoRegressiveMovingAverage {
    /// Create an unfitted ARMA(p, q) model
    ///
    /// # Errors
    ///
    /// Both orders must be positive and `p >= q`.
    pub fn new(p: usize, q: usize) -> Result<Self> {
        if p == 0 {
            return Err(ForecastError::invalid_parameter("p", "AR order must be > 0"));
        }
        if q == 0 {
            return Err(ForecastError::invalid_parameter("q", "MA order must be > 0"));
        }
        if q > p {
            return Err(ForecastError::invalid_parameter(
                "q",
                format!("MA order must be <= AR order {}, got {}", p, q),
            ));
        }
        Ok(Self {
            p,
            q,
            mu: 0.0,
            phi: Vec::new(),
            psi: Vec::new(),
            seed: Vec::new(),
            noise: Vec::new(),
            status: FitStatus::Unfitted,
        })
    }

    pub fn ar_order(&self) -> usize {
        self.p
    }

    pub fn ma_order(&self) -> usize {
        self.q
    }

    pub fn mean(&self) -> f64 {
        self.mu
    }

    pub fn ar_coefficients(&self) -> &[f64] {
        &self.phi
    }

    pub fn ma_coefficients(&self) -> &[f64] {
        &self.psi
    }

    pub fn seed(&self) -> &[f64] {
        &self.seed
    }

    pub fn noise(&self) -> &[f64] {
        &self.noise
    }

    fn degenerate(&mut self, samples: usize) -> FitScore {
        self.status = FitStatus::Degenerate;
        warn!(model = %self.name(), samples, "least-squares solve is degenerate");
        FitScore::Degenerate
    }

    /// Fit with a caller-supplied center instead of the sample mean
    pub fn fit_centered(&mut self, history: &[f64], center: f64) -> Result<FitScore> {
        validate_history(history, self.minimum_samples())?;
        if !center.is_finite() {
            return Err(ForecastError::invalid_parameter("center", "must be finite"));
        }

        let (p, q) = (self.p, self.q);
        let n = history.len();
        self.mu = center;
        self.seed = history[n - p..].to_vec();

        // Stage 1: provisional AR(p) fit and its residuals
        let (design, target) = lag_system(history, p, center);
        let provisional = least_squares(&design, &target)?;
        if provisional.is_degenerate() {
            self.phi = provisional.into_inner();
            self.psi = vec![f64::NAN; q];
            self.noise = vec![f64::NAN; p];
            return Ok(self.degenerate(n));
        }
        let residuals = sub_vectors(&mat_mul_vec(&design, provisional.as_inner())?, &target)?;
        self.noise = residuals[n - 2 * p..].to_vec();

        // Stage 2: joint AR and residual lags
        let rows = n - p - q;
        let design: Vec<Vec<f64>> = (0..rows)
            .map(|r| {
                history[q + r..q + r + p]
                    .iter()
                    .map(|y| y - center)
                    .chain(residuals[r..r + q].iter().copied())
                    .collect()
            })
            .collect();
        let target: Vec<f64> = (0..rows)
            .map(|r| history[p + q + r] - residuals[q + r] - center)
            .collect();
        let joint = least_squares(&design, &target)?;
        let degenerate = joint.is_degenerate();
        let mut coefficients = joint.into_inner();
        self.psi = coefficients.split_off(p);
        self.phi = coefficients;

        if degenerate {
            return Ok(self.degenerate(n));
        }

        // Fitted values are aligned with history[p..]; the residual slot is
        // cleared once the recursion has passed it.
        let mut fitted = history[p..].to_vec();
        let mut noise = residuals;
        for i in p..n - p {
            let next = lag_sum(&self.phi, &fitted[i - p..i], self.mu)
                + self
                    .psi
                    .iter()
                    .zip(&noise[i - q..i])
                    .map(|(c, e)| c * e)
                    .sum::<f64>()
                + self.mu;
            fitted[i] = next;
            noise[i] = 0.0;
        }

        let score = FitScore::from_r_squared(coefficient_of_determination(
            &history[2 * p..],
            &fitted[p..],
        ));
        self.status = FitStatus::Fitted;
        debug!(model = %self.name(), samples = n, score = ?score, "fitted model");
        Ok(score)
    }
}

impl ForecastModel for AutoRegressiveMovingAverage {
    fn name(&self) -> String {
        format!(
            "autoregressive moving average (ARMA) model with parameters p={}, q={}",
            self.p, self.q
        )
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

        let (p, q) = (self.p, self.q);
        let mut window = self.seed.clone();
        let mut noise = self.noise.clone();
        for _ in 0..steps {
            let moving: f64 = self
                .psi
                .iter()
                .zip(&noise[p - q..])
                .map(|(c, e)| c * e)
                .sum();
            let next = lag_sum(&self.phi, &window, self.mu) + moving + self.mu;
            window.rotate_left(1);
            window[p - 1] = next;
            noise.rotate_left(1);
            noise[p - 1] = 0.0;
        }
        window[p - 1]
    }
}

impl fmt::Display for AutoRegressiveMovingAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ mu={}, coefficients phi={}, coefficients psi={}, initial values={}, initial noise={} }}",
            self.name(),
            self.mu,
            format_bracketed_vector(&self.phi),
            format_bracketed_vector(&self.psi),
            format_bracketed_vector(&self.seed),
            format_bracketed_vector(&self.noise)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 20] = [
        245.0, 247.0, 256.0, 257.0, 257.0, 258.0, 255.0, 253.0, 255.0, 251.0, 251.0, 256.0,
        256.0, 253.0, 249.0, 247.0, 246.0, 244.0, 242.0, 244.0,
    ];

    #[test]
    fn test_arma_creation() {
        assert!(AutoRegressiveMovingAverage::new(3, 1).is_ok());
        assert!(AutoRegressiveMovingAverage::new(2, 2).is_ok());
        assert!(AutoRegressiveMovingAverage::new(0, 1).is_err());
        assert!(AutoRegressiveMovingAverage::new(1, 0).is_err());

        let err = AutoRegressiveMovingAverage::new(1, 2).unwrap_err();
        match err {
            ForecastError::InvalidParameter { name, .. } => assert_eq!(name, "q"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_arma_minimum_samples() {
        let mut model = AutoRegressiveMovingAverage::new(3, 1).unwrap();
        assert_eq!(model.minimum_samples(), 7);
        assert!(model.fit(&DATA[..6]).is_err());
        assert!(model.fit(&DATA[..7]).is_ok());
    }

    #[test]
    fn test_arma_reference_value() {
        let mut model = AutoRegressiveMovingAverage::new(3, 1).unwrap();
        let score = model.fit(&DATA).unwrap();
        assert!(score.value().is_finite());
        assert!((model.evaluate(1.0) - 247.03).abs() < 0.01);
    }

    #[test]
    fn test_arma_stored_state_shapes() {
        let mut model = AutoRegressiveMovingAverage::new(3, 2).unwrap();
        model.fit(&DATA).unwrap();

        assert_eq!(model.ar_coefficients().len(), 3);
        assert_eq!(model.ma_coefficients().len(), 2);
        assert_eq!(model.seed(), &[244.0, 242.0, 244.0]);
        assert_eq!(model.noise().len(), 3);
    }

    #[test]
    fn test_arma_evaluate_zero_returns_last_observation() {
        let mut model = AutoRegressiveMovingAverage::new(2, 1).unwrap();
        model.fit(&DATA).unwrap();
        assert_eq!(model.evaluate(0.0), 244.0);
    }

    #[test]
    fn test_arma_undefined_offsets() {
        let model = AutoRegressiveMovingAverage::new(2, 1).unwrap();
        assert!(model.evaluate(2.0).is_nan());

        let mut model = model;
        model.fit(&DATA).unwrap();
        assert!(model.evaluate(-1.0).is_nan());
        assert!(model.evaluate(-10.0).is_nan());
    }

    #[test]
    fn test_arma_forecast_matches_evaluate() {
        let mut model = AutoRegressiveMovingAverage::new(3, 1).unwrap();
        model.fit(&DATA).unwrap();

        let forecast = model.forecast(6).unwrap();
        for (i, value) in forecast.iter().enumerate() {
            assert_eq!(*value, model.evaluate((i + 1) as f64));
        }
    }

    #[test]
    fn test_arma_constant_series_is_degenerate() {
        let mut model = AutoRegressiveMovingAverage::new(2, 1).unwrap();
        let score = model.fit(&[3.0; 12]).unwrap();

        assert!(score.is_degenerate());
        assert_eq!(model.status(), FitStatus::Degenerate);
        assert!(model.evaluate(1.0).is_nan());
    }

    #[test]
    fn test_arma_infinite_offset_is_undefined() {
        let mut model = AutoRegressiveMovingAverage::new(3, 1).unwrap();
        model.fit(&DATA).unwrap();
        assert!(model.evaluate(f64::INFINITY).is_nan());
    }

    #[test]
    fn test_arma_snapshot_round_trip() {
        let mut model = AutoRegressiveMovingAverage::new(3, 2).unwrap();
        model.fit(&DATA).unwrap();

        let json = serde_json::to_string(&model).unwrap();
        let restored: AutoRegressiveMovingAverage = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.noise(), model.noise());
        assert_eq!(restored.evaluate(4.0), model.evaluate(4.0));
    }

    #[test]
    fn test_arma_rejects_malformed_snapshot() {
        let wide_ma = r#"{"p":1,"q":2,"mu":0.0,"phi":[],"psi":[],"seed":[],"noise":[],"status":"Unfitted"}"#;
        assert!(serde_json::from_str::<AutoRegressiveMovingAverage>(wide_ma).is_err());

        let short_noise = r#"{"p":2,"q":1,"mu":0.0,"phi":[0.1,0.2],"psi":[0.3],"seed":[1.0,2.0],"noise":[0.5],"status":"Fitted"}"#;
        let err = serde_json::from_str::<AutoRegressiveMovingAverage>(short_noise).unwrap_err();
        assert!(err.to_string().contains("noise"));
    }

    #[test]
    fn test_arma_display() {
        let model = AutoRegressiveMovingAverage::new(2, 1).unwrap();
        assert_eq!(
            model.to_string(),
            "autoregressive moving average (ARMA) model with parameters p=2, q=1 \
             { mu=0, coefficients phi=[ ], coefficients psi=[ ], initial values=[ ], initial noise=[ ] }"
        );
    }
}
