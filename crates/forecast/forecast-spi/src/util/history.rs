//! Input checks run at the top of every `fit`

use crate::error::{ForecastError, Result};

/// Check that `history` is long enough for a model and holds only finite values
///
/// Length is checked first so a too-short series reports
/// [`ForecastError::InsufficientData`] rather than a kernel error.
pub fn validate_history(history: &[f64], minimum_samples: usize) -> Result<()> {
    if history.len() < minimum_samples {
        return Err(ForecastError::InsufficientData {
            required: minimum_samples,
            actual: history.len(),
        });
    }
    linalg::validate_vector(history)?;
    Ok(())
}
