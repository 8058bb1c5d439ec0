//! Projection of a fitted model over its history and horizon
//!
//! Produces the `(offset, value)` series a chart of the fit would plot:
//! retrospective fitted values for direct models, followed by the forecast.

use forecast_spi::{ForecastError, ForecastModel, Result};
use serde::{Deserialize, Serialize};

/// One projected value at a time offset relative to the last observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub offset: i64,
    pub value: f64,
}

/// Fitted values over the history and forecasts over the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Offsets `-(n-1) ..= 0`; empty for autoregressive models
    pub retrospective: Vec<ProjectionPoint>,
    /// Offsets `1 ..= horizon`
    pub prospective: Vec<ProjectionPoint>,
}

impl Projection {
    /// All points in offset order
    pub fn points(&self) -> impl Iterator<Item = &ProjectionPoint> {
        self.retrospective.iter().chain(&self.prospective)
    }

    pub fn values(&self) -> Vec<f64> {
        self.points().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.retrospective.len() + self.prospective.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Project `model` across a history of `history_len` samples and `horizon` steps
///
/// Autoregressive models are undefined before the last observation, so only
/// their forecast is included.
///
/// # Errors
///
/// `history_len` and `horizon` must both be positive.
pub fn project<M>(model: &M, history_len: usize, horizon: usize) -> Result<Projection>
where
    M: ForecastModel + ?Sized,
{
    if history_len == 0 {
        return Err(ForecastError::invalid_parameter(
            "history_len",
            "must be greater than zero",
        ));
    }
    if horizon == 0 {
        return Err(ForecastError::invalid_parameter(
            "horizon",
            "must be greater than zero",
        ));
    }

    let point = |offset: i64| ProjectionPoint {
        offset,
        value: model.evaluate(offset as f64),
    };

    let retrospective = if model.is_autoregressive() {
        Vec::new()
    } else {
        let first = -(history_len as i64 - 1);
        (first..=0).map(&point).collect()
    };
    let prospective = (1..=horizon as i64).map(&point).collect();

    Ok(Projection {
        retrospective,
        prospective,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AutoRegression, SimpleLinearRegression};

    #[test]
    fn test_direct_model_projection() {
        let data = [1.0, 2.0, 3.0, 4.0];
        let mut model = SimpleLinearRegression::new();
        model.fit(&data).unwrap();

        let projection = project(&model, data.len(), 2).unwrap();
        let offsets: Vec<i64> = projection.points().map(|p| p.offset).collect();
        assert_eq!(offsets, vec![-3, -2, -1, 0, 1, 2]);

        let expected = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        for (value, want) in projection.values().iter().zip(expected) {
            assert!((value - want).abs() < 1e-10);
        }
    }

    #[test]
    fn test_autoregressive_projection_is_forecast_only() {
        let data: Vec<f64> = (0..12).map(|i| (i as f64 * 0.8).cos()).collect();
        let mut model = AutoRegression::new(2).unwrap();
        model.fit(&data).unwrap();

        let projection = project(&model, data.len(), 3).unwrap();
        assert!(projection.retrospective.is_empty());
        assert_eq!(projection.len(), 3);
        assert_eq!(projection.values(), model.forecast(3).unwrap());
    }

    #[test]
    fn test_projection_through_trait_object() {
        let mut model: Box<dyn ForecastModel> = Box::new(SimpleLinearRegression::new());
        model.fit(&[0.0, 1.0]).unwrap();

        let projection = project(model.as_ref(), 2, 1).unwrap();
        assert_eq!(projection.len(), 3);
        assert!(!projection.is_empty());
    }

    #[test]
    fn test_projection_rejects_zero_lengths() {
        let model = SimpleLinearRegression::new();
        assert!(matches!(
            project(&model, 0, 3),
            Err(ForecastError::InvalidParameter { .. })
        ));
        assert!(matches!(
            project(&model, 3, 0),
            Err(ForecastError::InvalidParameter { .. })
        ));
    }
}
