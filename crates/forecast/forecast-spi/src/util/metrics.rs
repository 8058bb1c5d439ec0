//! Goodness-of-fit metric

/// Coefficient of determination: `1 - SS_res / SS_tot`
///
/// Returns NaN for empty or length-mismatched inputs, and when `observed`
/// has zero total sum of squares around its mean.
pub fn coefficient_of_determination(observed: &[f64], fitted: &[f64]) -> f64 {
    if observed.is_empty() || observed.len() != fitted.len() {
        return f64::NAN;
    }

    let mean = observed.iter().sum::<f64>() / observed.len() as f64;
    let ss_tot: f64 = observed.iter().map(|y| (y - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        return f64::NAN;
    }
    let ss_res: f64 = observed
        .iter()
        .zip(fitted)
        .map(|(y, f)| (y - f).powi(2))
        .sum();

    1.0 - ss_res / ss_tot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_fit() {
        let y = [1.0, 2.0, 3.0, 4.0];
        assert!((coefficient_of_determination(&y, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_prediction_scores_zero() {
        let y = [1.0, 2.0, 3.0];
        let fitted = [2.0, 2.0, 2.0];
        assert!(coefficient_of_determination(&y, &fitted).abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        // SS_tot = 2, SS_res = 0.5
        let y = [1.0, 2.0, 3.0];
        let fitted = [1.5, 2.0, 2.5];
        assert!((coefficient_of_determination(&y, &fitted) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_worse_than_mean_is_negative() {
        let y = [1.0, 2.0, 3.0];
        let fitted = [3.0, 2.0, 1.0];
        assert!(coefficient_of_determination(&y, &fitted) < 0.0);
    }

    #[test]
    fn test_degenerate_inputs_are_nan() {
        assert!(coefficient_of_determination(&[], &[]).is_nan());
        assert!(coefficient_of_determination(&[1.0, 2.0], &[1.0]).is_nan());
        assert!(coefficient_of_determination(&[5.0, 5.0, 5.0], &[5.0, 5.0, 5.0]).is_nan());
    }
}
