//! Least-squares building blocks shared by the model implementations

use forecast_spi::{ForecastError, Result};
use linalg::{cholesky_solve, mat_mul_mat, mat_mul_vec, transpose, Matrix, Solved, Vector};

/// Solve `design * beta ≈ target` through the normal equations
pub(crate) fn least_squares(design: &[Vec<f64>], target: &[f64]) -> Result<Solved<Vector>> {
    let xt = transpose(design)?;
    let xtx = mat_mul_mat(&xt, design)?;
    let xty = mat_mul_vec(&xt, target)?;
    Ok(cholesky_solve(&xtx, &xty)?)
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Centered lag design: row `r` holds `y[r..r+p] - center`, target `y[r+p] - center`
pub(crate) fn lag_system(history: &[f64], p: usize, center: f64) -> (Matrix, Vector) {
    let rows = history.len() - p;
    let design = (0..rows)
        .map(|r| history[r..r + p].iter().map(|y| y - center).collect())
        .collect();
    let target = history[p..].iter().map(|y| y - center).collect();
    (design, target)
}

/// `Σ coeff[j] * (window[j] - center)`
pub(crate) fn lag_sum(coefficients: &[f64], window: &[f64], center: f64) -> f64 {
    coefficients
        .iter()
        .zip(window)
        .map(|(c, y)| c * (y - center))
        .sum()
}

/// Whole recursion steps for offset `x`, `None` when `x` is negative or not finite
pub(crate) fn recursion_steps(x: f64) -> Option<usize> {
    if x.is_finite() && x >= 0.0 {
        Some(x.floor() as usize)
    } else {
        None
    }
}

/// Restored model state must hold exactly `expected` values
pub(crate) fn check_state_len(name: &str, values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(ForecastError::invalid_parameter(
            name,
            format!("expected {} values, got {}", expected, values.len()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lag_system_layout() {
        let y = [1.0, 2.0, 3.0, 4.0, 5.0];
        let (a, b) = lag_system(&y, 2, 1.0);
        assert_eq!(a, vec![vec![0.0, 1.0], vec![1.0, 2.0], vec![2.0, 3.0]]);
        assert_eq!(b, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_least_squares_exact_line() {
        let design = vec![vec![1.0, 0.0], vec![1.0, 1.0], vec![1.0, 2.0]];
        let beta = least_squares(&design, &[1.0, 3.0, 5.0])
            .unwrap()
            .finite()
            .unwrap();
        assert!((beta[0] - 1.0).abs() < 1e-10);
        assert!((beta[1] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_least_squares_rank_deficient_is_degenerate() {
        let design = vec![vec![1.0, 0.0], vec![1.0, 0.0], vec![1.0, 0.0]];
        assert!(least_squares(&design, &[1.0, 2.0, 3.0])
            .unwrap()
            .is_degenerate());
    }

    #[test]
    fn test_recursion_steps() {
        assert_eq!(recursion_steps(0.0), Some(0));
        assert_eq!(recursion_steps(2.7), Some(2));
        assert_eq!(recursion_steps(-0.5), None);
        assert_eq!(recursion_steps(f64::NAN), None);
        assert_eq!(recursion_steps(f64::INFINITY), None);
    }

    #[test]
    fn test_check_state_len() {
        assert!(check_state_len("seed", &[1.0, 2.0], 2).is_ok());
        match check_state_len("seed", &[1.0], 2).unwrap_err() {
            ForecastError::InvalidParameter { name, .. } => assert_eq!(name, "seed"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }
}
