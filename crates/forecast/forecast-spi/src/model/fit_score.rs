//! Fit outcome model

use serde::{Deserialize, Serialize};

use super::FitStatus;

/// Outcome of a successful call to `fit`
///
/// `fit` only returns `Err` for contract violations. Everything it can
/// compute ends up here, including numerical failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FitScore {
    /// Coefficient of determination over the scored part of the window
    RSquared(f64),
    /// R² has no value, e.g. the observed series has zero variance
    Undefined,
    /// The least-squares solve produced non-finite coefficients
    Degenerate,
}

impl FitScore {
    /// Wrap a computed R², mapping NaN to [`FitScore::Undefined`]
    pub fn from_r_squared(value: f64) -> Self {
        if value.is_nan() {
            FitScore::Undefined
        } else {
            FitScore::RSquared(value)
        }
    }

    /// The score as a float, NaN when there is none
    pub fn value(&self) -> f64 {
        match self {
            FitScore::RSquared(r2) => *r2,
            FitScore::Undefined | FitScore::Degenerate => f64::NAN,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, FitScore::Degenerate)
    }

    /// Model status implied by this outcome
    pub fn status(&self) -> FitStatus {
        match self {
            FitScore::Degenerate => FitStatus::Degenerate,
            _ => FitStatus::Fitted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_r_squared() {
        assert_eq!(FitScore::from_r_squared(0.5), FitScore::RSquared(0.5));
        assert_eq!(FitScore::from_r_squared(f64::NAN), FitScore::Undefined);
        assert_eq!(FitScore::from_r_squared(-3.0), FitScore::RSquared(-3.0));
    }

    #[test]
    fn test_value() {
        assert_eq!(FitScore::RSquared(0.9).value(), 0.9);
        assert!(FitScore::Undefined.value().is_nan());
        assert!(FitScore::Degenerate.value().is_nan());
    }

    #[test]
    fn test_status() {
        assert_eq!(FitScore::RSquared(1.0).status(), FitStatus::Fitted);
        assert_eq!(FitScore::Undefined.status(), FitStatus::Fitted);
        assert_eq!(FitScore::Degenerate.status(), FitStatus::Degenerate);
        assert!(FitScore::Degenerate.is_degenerate());
    }
}
