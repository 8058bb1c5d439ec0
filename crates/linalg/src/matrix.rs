//! Matrix construction, validation and arithmetic
//!
//! Matrices are row-major `Vec<Vec<f64>>`. Validation requires at least one
//! row, non-empty rows of identical length and finite elements.

use crate::error::{LinalgError, Result};
use crate::vector::{validate_vector, Vector};

/// Owned dense row-major matrix
pub type Matrix = Vec<Vec<f64>>;

/// Create a zero-filled `rows x cols` matrix
///
/// # Errors
///
/// [`LinalgError::InvalidDimension`] if either dimension is below one.
pub fn make_matrix(rows: usize, cols: usize) -> Result<Matrix> {
    if rows < 1 {
        return Err(LinalgError::InvalidDimension {
            name: "rows",
            value: rows,
        });
    }
    if cols < 1 {
        return Err(LinalgError::InvalidDimension {
            name: "cols",
            value: cols,
        });
    }
    Ok(vec![vec![0.0; cols]; rows])
}

/// Create the `n x n` identity matrix
pub fn identity(n: usize) -> Result<Matrix> {
    let mut m = make_matrix(n, n)?;
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    Ok(m)
}

/// Validate a matrix and return `(rows, cols)`
///
/// Rows must all have the length of the first row; ragged input is
/// rejected with [`LinalgError::RaggedRows`].
pub fn validate_matrix(m: &[Vec<f64>]) -> Result<(usize, usize)> {
    let first = m.first().ok_or(LinalgError::Empty)?;
    let cols = first.len();
    for (r, row) in m.iter().enumerate() {
        if row.is_empty() {
            return Err(LinalgError::NonPositiveSize { row: r });
        }
        if row.len() != cols {
            return Err(LinalgError::RaggedRows {
                row: r,
                expected: cols,
                actual: row.len(),
            });
        }
        if let Some(c) = row.iter().position(|x| !x.is_finite()) {
            return Err(LinalgError::NonFiniteElement { row: r, col: c });
        }
    }
    Ok((m.len(), cols))
}

fn same_shape(op: &'static str, a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<()> {
    let left = validate_matrix(a)?;
    let right = validate_matrix(b)?;
    if left != right {
        return Err(LinalgError::IncompatibleShape { op, left, right });
    }
    Ok(())
}

fn zip_with(a: &[Vec<f64>], b: &[Vec<f64>], f: impl Fn(f64, f64) -> f64) -> Matrix {
    a.iter()
        .zip(b)
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(&x, &y)| f(x, y)).collect())
        .collect()
}

/// Elementwise `a + b`
pub fn add_matrices(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Matrix> {
    same_shape("add", a, b)?;
    Ok(zip_with(a, b, |x, y| x + y))
}

/// Elementwise `a - b`
pub fn sub_matrices(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Matrix> {
    same_shape("sub", a, b)?;
    Ok(zip_with(a, b, |x, y| x - y))
}

/// Scalar multiple `s * m`
pub fn scale_matrix(s: f64, m: &[Vec<f64>]) -> Result<Matrix> {
    validate_matrix(m)?;
    Ok(m.iter()
        .map(|row| row.iter().map(|x| s * x).collect())
        .collect())
}

/// Matrix-vector product `m * v`; result length is `m.rows`
pub fn mat_mul_vec(m: &[Vec<f64>], v: &[f64]) -> Result<Vector> {
    let (rows, cols) = validate_matrix(m)?;
    let n = validate_vector(v)?;
    if n != cols {
        return Err(LinalgError::IncompatibleShape {
            op: "mat_mul_vec",
            left: (rows, cols),
            right: (n, 1),
        });
    }
    Ok(m.iter()
        .map(|row| row.iter().zip(v).map(|(a, b)| a * b).sum())
        .collect())
}

/// Matrix product `a * b`
pub fn mat_mul_mat(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Matrix> {
    let (rows_a, cols_a) = validate_matrix(a)?;
    let (rows_b, cols_b) = validate_matrix(b)?;
    if cols_a != rows_b {
        return Err(LinalgError::IncompatibleShape {
            op: "mat_mul_mat",
            left: (rows_a, cols_a),
            right: (rows_b, cols_b),
        });
    }

    let mut result = make_matrix(rows_a, cols_b)?;
    for i in 0..rows_a {
        for j in 0..cols_b {
            let mut sum = 0.0;
            for k in 0..cols_a {
                sum += a[i][k] * b[k][j];
            }
            result[i][j] = sum;
        }
    }
    Ok(result)
}

/// Transpose: `cols x rows` result
pub fn transpose(m: &[Vec<f64>]) -> Result<Matrix> {
    let (rows, cols) = validate_matrix(m)?;
    let mut result = make_matrix(cols, rows)?;
    for (i, row) in m.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            result[j][i] = value;
        }
    }
    Ok(result)
}
