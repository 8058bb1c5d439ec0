//! Polynomial regression of order k over the implicit time index
//!
//! Builds a Vandermonde design matrix (column `j` holds `t^j`) and solves
//! the normal equations with the kernel's Cholesky solver. The polynomial
//! is a direct curve in time, so it can be evaluated at any offset.

use std::fmt;

use forecast_spi::{
    coefficient_of_determination, implicit_time_index, validate_history, FitScore, FitStatus,
    ForecastError, ForecastModel, ModelFamily, Result,
};
use linalg::format::format_bracketed_vector;
use linalg::Matrix;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::regression::{check_state_len, least_squares};

/// Least-squares polynomial trend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PolynomialState")]
pub struct PolynomialRegression {
    /// Polynomial order (k)
    order: usize,
    /// Coefficients, constant term first
    coefficients: Vec<f64>,
    status: FitStatus,
}

#[derive(Deserialize)]
struct PolynomialState {
    order: usize,
    coefficients: Vec<f64>,
    status: FitStatus,
}

impl TryFrom<PolynomialState> for PolynomialRegression {
    type Error = ForecastError;

    fn try_from(state: PolynomialState) -> Result<Self> {
        let mut model = Self::new(state.order)?;
        if state.status != FitStatus::Unfitted {
            check_state_len("coefficients", &state.coefficients, state.order + 1)?;
        }
        model.coefficients = state.coefficients;
        model.status = state.status;
        Ok(model)
    }
}

impl PolynomialRegression {
    /// Create an unfitted polynomial model of order `order`
    ///
    /// # Errors
    ///
    /// `order` must be at least 1.
    pub fn new(order: usize) -> Result<Self> {
        if order == 0 {
            return Err(ForecastError::invalid_parameter(
                "order",
                "Polynomial order must be >= 1",
            ));
        }
        Ok(Self {
            order,
            coefficients: Vec::new(),
            status: FitStatus::Unfitted,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    fn vandermonde(t: &[f64], order: usize) -> Matrix {
        t.iter()
            .map(|&x| {
                let mut row = Vec::with_capacity(order + 1);
                let mut power = 1.0;
                for _ in 0..=order {
                    row.push(power);
                    power *= x;
                }
                row
            })
            .collect()
    }

    /// Horner evaluation without the fitted-state check
    fn polynomial(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * x + c)
    }
}

impl ForecastModel for PolynomialRegression {
    fn name(&self) -> String {
        format!("polynomial regression of order k={}", self.order)
    }

    fn minimum_samples(&self) -> usize {
        self.order + 1
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
        let design = Self::vandermonde(&t, self.order);
        let solved = least_squares(&design, history)?;
        let degenerate = solved.is_degenerate();
        self.coefficients = solved.into_inner();

        if degenerate {
            self.status = FitStatus::Degenerate;
            warn!(model = %self.name(), samples = history.len(), "least-squares solve is degenerate");
            return Ok(FitScore::Degenerate);
        }

        let fitted: Vec<f64> = t.iter().map(|&x| self.polynomial(x)).collect();
        let score = FitScore::from_r_squared(coefficient_of_determination(history, &fitted));
        self.status = FitStatus::Fitted;
        debug!(model = %self.name(), samples = history.len(), score = ?score, "fitted model");
        Ok(score)
    }

    fn evaluate(&self, x: f64) -> f64 {
        if self.status == FitStatus::Unfitted {
            return f64::NAN;
        }
        self.polynomial(x)
    }
}

impl fmt::Display for PolynomialRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ coefficients={} }}",
            self.name(),
            format_bracketed_vector(&self.coefficients)
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
    fn test_polynomial_creation() {
        assert!(PolynomialRegression::new(1).is_ok());
        assert!(PolynomialRegression::new(0).is_err());
        assert_eq!(PolynomialRegression::new(4).unwrap().minimum_samples(), 5);
    }

    #[test]
    fn test_polynomial_interpolates_minimum_points() {
        // y = 1 - t + 2t^2 through t = -2, -1, 0
        let mut model = PolynomialRegression::new(2).unwrap();
        let score = model.fit(&[11.0, 4.0, 1.0]).unwrap();

        assert!((score.value() - 1.0).abs() < 1e-9);
        let c = model.coefficients();
        assert!((c[0] - 1.0).abs() < 1e-9);
        assert!((c[1] + 1.0).abs() < 1e-9);
        assert!((c[2] - 2.0).abs() < 1e-9);
        assert!((model.evaluate(1.0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_polynomial_reference_values() {
        let mut model = PolynomialRegression::new(3).unwrap();
        model.fit(&DATA).unwrap();

        assert!((model.evaluate(1.0) - 242.253).abs() < 0.001);
        assert!((model.evaluate(2.0) - 241.950).abs() < 0.001);
    }

    #[test]
    fn test_polynomial_order_one_matches_linear() {
        use crate::models::SimpleLinearRegression;

        let mut poly = PolynomialRegression::new(1).unwrap();
        let mut line = SimpleLinearRegression::new();
        poly.fit(&DATA).unwrap();
        line.fit(&DATA).unwrap();

        for x in [-5.0, 0.0, 3.0] {
            assert!((poly.evaluate(x) - line.evaluate(x)).abs() < 1e-8);
        }
    }

    #[test]
    fn test_polynomial_negative_offsets_are_defined() {
        let mut model = PolynomialRegression::new(2).unwrap();
        model.fit(&DATA).unwrap();
        assert!(model.evaluate(-10.0).is_finite());
        assert!(model.evaluate(-10.5).is_finite());
    }

    #[test]
    fn test_polynomial_unfitted() {
        let model = PolynomialRegression::new(2).unwrap();
        assert!(model.evaluate(0.0).is_nan());
        assert_eq!(
            model.to_string(),
            "polynomial regression of order k=2 { coefficients=[ ] }"
        );
    }

    #[test]
    fn test_polynomial_rejects_malformed_snapshot() {
        let zero_order = r#"{"order":0,"coefficients":[],"status":"Unfitted"}"#;
        assert!(serde_json::from_str::<PolynomialRegression>(zero_order).is_err());

        let short = r#"{"order":2,"coefficients":[1.0,2.0],"status":"Fitted"}"#;
        assert!(serde_json::from_str::<PolynomialRegression>(short).is_err());

        let valid = r#"{"order":1,"coefficients":[1.0,2.0],"status":"Fitted"}"#;
        let model: PolynomialRegression = serde_json::from_str(valid).unwrap();
        assert_eq!(model.evaluate(2.0), 5.0);
    }
}
