//! Forecast configuration types.

use std::fmt;
use std::str::FromStr;

use forecast_core::{
    Arima, AutoRegression, AutoRegressiveMovingAverage, ConstantRegression, PolynomialRegression,
    SimpleLinearRegression,
};
use forecast_spi::{ForecastError, ForecastModel, ModelFamily, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Model Specification
// ============================================================================

/// Model type and structural hyperparameters.
///
/// Serialized with an internal `kind` tag:
///
/// ```rust
/// use forecast_api::ModelSpec;
///
/// let spec: ModelSpec = "arima(3,1,1)".parse().unwrap();
/// assert_eq!(spec, ModelSpec::Arima { p: 3, d: 1, q: 1 });
/// let model = spec.build().unwrap();
/// assert!(model.is_autoregressive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ModelSpec {
    #[default]
    Constant,
    SimpleLinear,
    Polynomial {
        order: usize,
    },
    #[serde(rename = "ar")]
    AutoRegression {
        p: usize,
    },
    Arma {
        p: usize,
        q: usize,
    },
    Arima {
        p: usize,
        d: usize,
        q: usize,
    },
}

impl ModelSpec {
    /// Construct an unfitted model.
    ///
    /// # Errors
    ///
    /// [`ForecastError::InvalidParameter`] when the hyperparameters violate
    /// the model's constraints.
    pub fn build(&self) -> Result<Box<dyn ForecastModel>> {
        let model: Box<dyn ForecastModel> = match *self {
            ModelSpec::Constant => Box::new(ConstantRegression::new()),
            ModelSpec::SimpleLinear => Box::new(SimpleLinearRegression::new()),
            ModelSpec::Polynomial { order } => Box::new(PolynomialRegression::new(order)?),
            ModelSpec::AutoRegression { p } => Box::new(AutoRegression::new(p)?),
            ModelSpec::Arma { p, q } => Box::new(AutoRegressiveMovingAverage::new(p, q)?),
            ModelSpec::Arima { p, d, q } => Box::new(Arima::new(p, d, q)?),
        };
        Ok(model)
    }

    /// Check hyperparameters without keeping the model.
    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    /// Build a spec from a model tag and positional hyperparameters.
    ///
    /// Accepted tags, with their parameters in order:
    ///
    /// | Tag | Alias | Parameters |
    /// |-----|-------|------------|
    /// | `constant` | `constRegression` | |
    /// | `simple-linear` | `simpleLinearRegression` | |
    /// | `polynomial` | `polynomialRegression` | order |
    /// | `ar` | `autoRegression` | p |
    /// | `arma` | `autoRegressionMovingAverage` | p, q |
    /// | `arima` | `autoRegressionIntegratedAverage` | p, d, q |
    ///
    /// Values are not range-checked here; see [`ModelSpec::build`].
    pub fn from_tag(tag: &str, params: &[usize]) -> Result<Self> {
        let spec = match tag {
            "constant" | "constRegression" => {
                expect_params(tag, params, &[])?;
                ModelSpec::Constant
            }
            "simple-linear" | "simpleLinearRegression" => {
                expect_params(tag, params, &[])?;
                ModelSpec::SimpleLinear
            }
            "polynomial" | "polynomialRegression" => {
                let v = expect_params(tag, params, &["order"])?;
                ModelSpec::Polynomial { order: v[0] }
            }
            "ar" | "autoRegression" => {
                let v = expect_params(tag, params, &["p"])?;
                ModelSpec::AutoRegression { p: v[0] }
            }
            "arma" | "autoRegressionMovingAverage" => {
                let v = expect_params(tag, params, &["p", "q"])?;
                ModelSpec::Arma { p: v[0], q: v[1] }
            }
            "arima" | "autoRegressionIntegratedAverage" => {
                let v = expect_params(tag, params, &["p", "d", "q"])?;
                ModelSpec::Arima {
                    p: v[0],
                    d: v[1],
                    q: v[2],
                }
            }
            other => return Err(ForecastError::UnknownModel(other.to_string())),
        };
        Ok(spec)
    }

    /// Canonical tag, as accepted by [`ModelSpec::from_tag`].
    pub fn tag(&self) -> &'static str {
        match self {
            ModelSpec::Constant => "constant",
            ModelSpec::SimpleLinear => "simple-linear",
            ModelSpec::Polynomial { .. } => "polynomial",
            ModelSpec::AutoRegression { .. } => "ar",
            ModelSpec::Arma { .. } => "arma",
            ModelSpec::Arima { .. } => "arima",
        }
    }

    /// Positional hyperparameters, in [`ModelSpec::from_tag`] order.
    pub fn params(&self) -> Vec<usize> {
        match *self {
            ModelSpec::Constant | ModelSpec::SimpleLinear => Vec::new(),
            ModelSpec::Polynomial { order } => vec![order],
            ModelSpec::AutoRegression { p } => vec![p],
            ModelSpec::Arma { p, q } => vec![p, q],
            ModelSpec::Arima { p, d, q } => vec![p, d, q],
        }
    }

    pub fn family(&self) -> ModelFamily {
        match self {
            ModelSpec::Constant | ModelSpec::SimpleLinear | ModelSpec::Polynomial { .. } => {
                ModelFamily::Direct
            }
            _ => ModelFamily::Autoregressive,
        }
    }
}

/// Check that `params` holds exactly one value per name in `names`.
fn expect_params<'a>(tag: &str, params: &'a [usize], names: &[&str]) -> Result<&'a [usize]> {
    if let Some(missing) = names.get(params.len()) {
        return Err(ForecastError::invalid_parameter(
            *missing,
            format!("missing hyperparameter for '{}'", tag),
        ));
    }
    if params.len() > names.len() {
        return Err(ForecastError::invalid_parameter(
            "params",
            format!(
                "'{}' takes {} hyperparameter(s), got {}",
                tag,
                names.len(),
                params.len()
            ),
        ));
    }
    Ok(params)
}

impl fmt::Display for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.params();
        if params.is_empty() {
            return write!(f, "{}", self.tag());
        }
        let list: Vec<String> = params.iter().map(usize::to_string).collect();
        write!(f, "{}({})", self.tag(), list.join(","))
    }
}

impl FromStr for ModelSpec {
    type Err = ForecastError;

    /// Parse the compact form: `constant`, `polynomial(3)`, `arima(3,1,1)`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let Some((tag, rest)) = s.split_once('(') else {
            return Self::from_tag(s, &[]);
        };
        let inner = rest.strip_suffix(')').ok_or_else(|| {
            ForecastError::invalid_parameter("params", format!("unclosed parameter list in '{}'", s))
        })?;

        let params = if inner.trim().is_empty() {
            Vec::new()
        } else {
            inner
                .split(',')
                .map(|v| {
                    v.trim().parse::<usize>().map_err(|_| {
                        ForecastError::invalid_parameter(
                            "params",
                            format!("'{}' is not a non-negative integer", v.trim()),
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?
        };
        Self::from_tag(tag.trim(), &params)
    }
}

// ============================================================================
// Forecast Configuration
// ============================================================================

fn default_horizon() -> usize {
    5
}

/// Model choice plus forecast horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Model to build.
    pub model: ModelSpec,
    /// Number of future steps to forecast.
    #[serde(default = "default_horizon")]
    pub horizon: usize,
}

impl ForecastConfig {
    pub fn new(model: ModelSpec, horizon: usize) -> Self {
        Self { model, horizon }
    }

    /// Check the horizon and the model hyperparameters.
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(ForecastError::invalid_parameter(
                "horizon",
                "must be greater than zero",
            ));
        }
        self.model.validate()
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            model: ModelSpec::Constant,
            horizon: default_horizon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // ModelSpec
    // ========================================================================

    #[test]
    fn test_build_each_kind() {
        let specs = [
            ModelSpec::Constant,
            ModelSpec::SimpleLinear,
            ModelSpec::Polynomial { order: 2 },
            ModelSpec::AutoRegression { p: 2 },
            ModelSpec::Arma { p: 2, q: 1 },
            ModelSpec::Arima { p: 2, d: 1, q: 0 },
        ];
        for spec in specs {
            let model = spec.build().unwrap();
            assert!(!model.is_fitted());
            assert_eq!(model.family(), spec.family());
        }
    }

    #[test]
    fn test_build_rejects_bad_hyperparameters() {
        let bad = [
            ModelSpec::Polynomial { order: 0 },
            ModelSpec::AutoRegression { p: 0 },
            ModelSpec::Arma { p: 1, q: 2 },
            ModelSpec::Arma { p: 2, q: 0 },
            ModelSpec::Arima { p: 2, d: 0, q: 1 },
            ModelSpec::Arima { p: 1, d: 1, q: 3 },
        ];
        for spec in bad {
            assert!(
                matches!(spec.validate(), Err(ForecastError::InvalidParameter { .. })),
                "{} should be rejected",
                spec
            );
        }
    }

    #[test]
    fn test_from_tag_names_and_aliases() {
        assert_eq!(ModelSpec::from_tag("constant", &[]).unwrap(), ModelSpec::Constant);
        assert_eq!(
            ModelSpec::from_tag("simpleLinearRegression", &[]).unwrap(),
            ModelSpec::SimpleLinear
        );
        assert_eq!(
            ModelSpec::from_tag("polynomialRegression", &[3]).unwrap(),
            ModelSpec::Polynomial { order: 3 }
        );
        assert_eq!(
            ModelSpec::from_tag("autoRegressionMovingAverage", &[3, 1]).unwrap(),
            ModelSpec::Arma { p: 3, q: 1 }
        );
        assert_eq!(
            ModelSpec::from_tag("autoRegressionIntegratedAverage", &[3, 1, 1]).unwrap(),
            ModelSpec::Arima { p: 3, d: 1, q: 1 }
        );
    }

    #[test]
    fn test_from_tag_errors() {
        assert_eq!(
            ModelSpec::from_tag("garch", &[1]).unwrap_err(),
            ForecastError::UnknownModel("garch".to_string())
        );

        match ModelSpec::from_tag("arima", &[3, 1]).unwrap_err() {
            ForecastError::InvalidParameter { name, .. } => assert_eq!(name, "q"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
        assert!(ModelSpec::from_tag("constant", &[1]).is_err());
    }

    #[test]
    fn test_display_and_parse() {
        let spec = ModelSpec::Arima { p: 3, d: 1, q: 1 };
        assert_eq!(spec.to_string(), "arima(3,1,1)");
        assert_eq!(ModelSpec::SimpleLinear.to_string(), "simple-linear");

        assert_eq!(" ar( 4 ) ".parse::<ModelSpec>().unwrap(), ModelSpec::AutoRegression { p: 4 });
        assert_eq!("constant()".parse::<ModelSpec>().unwrap(), ModelSpec::Constant);
        assert!("arma(3,x)".parse::<ModelSpec>().is_err());
        assert!("arma(3,1".parse::<ModelSpec>().is_err());
        assert!(matches!(
            "lstm(2)".parse::<ModelSpec>(),
            Err(ForecastError::UnknownModel(_))
        ));
    }

    #[test]
    fn test_model_spec_serde() {
        let json = serde_json::to_string(&ModelSpec::Arma { p: 3, q: 1 }).unwrap();
        assert_eq!(json, r#"{"kind":"arma","p":3,"q":1}"#);

        let spec: ModelSpec = serde_json::from_str(r#"{"kind":"ar","p":2}"#).unwrap();
        assert_eq!(spec, ModelSpec::AutoRegression { p: 2 });

        let spec: ModelSpec = serde_json::from_str(r#"{"kind":"simple-linear"}"#).unwrap();
        assert_eq!(spec, ModelSpec::SimpleLinear);
    }

    // ========================================================================
    // ForecastConfig
    // ========================================================================

    #[test]
    fn test_forecast_config_default() {
        let config = ForecastConfig::default();
        assert_eq!(config.model, ModelSpec::Constant);
        assert_eq!(config.horizon, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_forecast_config_validate() {
        assert!(ForecastConfig::new(ModelSpec::Constant, 0).validate().is_err());
        assert!(ForecastConfig::new(ModelSpec::AutoRegression { p: 0 }, 3)
            .validate()
            .is_err());
        assert!(ForecastConfig::new(ModelSpec::Arima { p: 3, d: 1, q: 1 }, 10)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_forecast_config_serde_default_horizon() {
        let config: ForecastConfig =
            serde_json::from_str(r#"{"model":{"kind":"polynomial","order":3}}"#).unwrap();
        assert_eq!(config.model, ModelSpec::Polynomial { order: 3 });
        assert_eq!(config.horizon, 5);

        let json = serde_json::to_string(&config).unwrap();
        let back: ForecastConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
