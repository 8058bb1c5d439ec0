//! Vector construction, validation and arithmetic
//!
//! Vectors are plain `Vec<f64>` / `&[f64]`. Every arithmetic entry point
//! validates its operands first: non-empty, all elements finite.

use crate::error::{LinalgError, Result};

/// Owned dense vector
pub type Vector = Vec<f64>;

/// Create a zero-filled vector of length `n`
///
/// # Errors
///
/// [`LinalgError::InvalidDimension`] if `n < 1`.
pub fn make_vector(n: usize) -> Result<Vector> {
    if n < 1 {
        return Err(LinalgError::InvalidDimension {
            name: "length",
            value: n,
        });
    }
    Ok(vec![0.0; n])
}

/// Validate a vector and return its length
///
/// # Errors
///
/// [`LinalgError::Empty`] for an empty slice, [`LinalgError::NonFiniteElement`]
/// (with `row` set to the element index) for NaN or infinite entries.
pub fn validate_vector(v: &[f64]) -> Result<usize> {
    if v.is_empty() {
        return Err(LinalgError::Empty);
    }
    if let Some(index) = v.iter().position(|x| !x.is_finite()) {
        return Err(LinalgError::NonFiniteElement { row: index, col: 0 });
    }
    Ok(v.len())
}

fn validate_pair(op: &'static str, a: &[f64], b: &[f64]) -> Result<usize> {
    let n = validate_vector(a)?;
    let m = validate_vector(b)?;
    if n != m {
        return Err(LinalgError::IncompatibleShape {
            op,
            left: (n, 1),
            right: (m, 1),
        });
    }
    Ok(n)
}

/// Elementwise `a + b`
pub fn add_vectors(a: &[f64], b: &[f64]) -> Result<Vector> {
    validate_pair("add", a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Elementwise `a - b`
pub fn sub_vectors(a: &[f64], b: &[f64]) -> Result<Vector> {
    validate_pair("sub", a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

/// Scalar multiple `s * v`
pub fn scale_vector(s: f64, v: &[f64]) -> Result<Vector> {
    validate_vector(v)?;
    Ok(v.iter().map(|x| s * x).collect())
}

/// Sum of elementwise products
pub fn inner_product(a: &[f64], b: &[f64]) -> Result<f64> {
    validate_pair("inner_product", a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}
