//! Matrix inversion and least-squares solving
//!
//! Both solvers are cheap and never probe rank. A singular or
//! ill-conditioned input is not an error: the computed values are returned
//! as [`Solved::Degenerate`] and may hold NaN or infinite entries.

use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};
use crate::matrix::{identity, make_matrix, validate_matrix, Matrix};
use crate::vector::{validate_vector, Vector};

/// Outcome of a numerical solve
///
/// `Degenerate` still carries the raw result so callers that want the
/// non-finite values can reach them through [`Solved::into_inner`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Solved<T> {
    /// Every value in the result is finite
    Finite(T),
    /// The result contains at least one NaN or infinite value
    Degenerate(T),
}

impl<T> Solved<T> {
    /// `true` when the solve produced non-finite values
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Solved::Degenerate(_))
    }

    /// The finite result, or `None` if degenerate
    pub fn finite(self) -> Option<T> {
        match self {
            Solved::Finite(value) => Some(value),
            Solved::Degenerate(_) => None,
        }
    }

    /// The raw result regardless of degeneracy
    pub fn into_inner(self) -> T {
        match self {
            Solved::Finite(value) | Solved::Degenerate(value) => value,
        }
    }

    /// Borrow the raw result
    pub fn as_inner(&self) -> &T {
        match self {
            Solved::Finite(value) | Solved::Degenerate(value) => value,
        }
    }
}

impl Solved<Vector> {
    /// Classify a vector by the finiteness of its elements
    pub fn classify(values: Vector) -> Self {
        if values.iter().all(|x| x.is_finite()) {
            Solved::Finite(values)
        } else {
            Solved::Degenerate(values)
        }
    }
}

impl Solved<Matrix> {
    /// Classify a matrix by the finiteness of its elements
    pub fn classify(values: Matrix) -> Self {
        if values.iter().flatten().all(|x| x.is_finite()) {
            Solved::Finite(values)
        } else {
            Solved::Degenerate(values)
        }
    }
}

/// Invert a square matrix by Gauss-Jordan elimination with scaled partial
/// pivoting.
///
/// Rows are never swapped physically; a logical row order is maintained
/// and the pivot at each step is the remaining row maximizing
/// `|a[row][col]| / scale[row]`, where `scale[row]` is the row's largest
/// absolute value.
///
/// # Errors
///
/// Structural errors from validation, or [`LinalgError::NotSquare`].
pub fn invert(m: &[Vec<f64>]) -> Result<Solved<Matrix>> {
    let (rows, cols) = validate_matrix(m)?;
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    let size = rows;

    let mut a: Matrix = m.to_vec();
    let mut b = identity(size)?;
    let mut x = make_matrix(size, size)?;
    let mut order: Vec<usize> = (0..size).collect();

    let scale: Vec<f64> = a
        .iter()
        .map(|row| row.iter().fold(0.0_f64, |acc, v| acc.max(v.abs())))
        .collect();

    // Forward elimination; multipliers are kept below the diagonal of `a`.
    for i in 0..size.saturating_sub(1) {
        let mut best = 0.0;
        let mut pivot = i;
        for j in i..size {
            let ratio = a[order[j]][i].abs() / scale[order[j]];
            if ratio > best {
                best = ratio;
                pivot = j;
            }
        }
        order.swap(i, pivot);

        let pivot_row = order[i];
        for j in (i + 1)..size {
            let row = order[j];
            let factor = a[row][i] / a[pivot_row][i];
            a[row][i] = factor;
            for k in (i + 1)..size {
                let upper = a[pivot_row][k];
                a[row][k] -= factor * upper;
            }
        }
    }

    // Replay the row operations on the identity.
    for i in 0..size.saturating_sub(1) {
        for j in (i + 1)..size {
            let factor = a[order[j]][i];
            for k in 0..size {
                let source = b[order[i]][k];
                b[order[j]][k] -= factor * source;
            }
        }
    }

    // Back substitution, one column of the inverse at a time.
    let last = size - 1;
    for col in 0..size {
        x[last][col] = b[order[last]][col] / a[order[last]][last];
        for j in (0..last).rev() {
            let mut value = b[order[j]][col];
            for k in (j + 1)..size {
                value -= a[order[j]][k] * x[k][col];
            }
            x[j][col] = value / a[order[j]][j];
        }
    }

    let solved = Solved::<Matrix>::classify(x);
    if solved.is_degenerate() {
        tracing::trace!(size, "inversion produced non-finite entries");
    }
    Ok(solved)
}

/// Solve the normal equations `ata * x = atb` by Cholesky factorization.
///
/// `ata` is assumed symmetric positive-definite. If it is not (for example
/// rank-deficient), a diagonal entry of the factor becomes the square root
/// of a negative number and the NaN propagates into a degenerate result.
///
/// # Errors
///
/// Structural errors from validation, [`LinalgError::NotSquare`] if `ata`
/// is not square, [`LinalgError::DimensionMismatch`] if `atb` does not
/// match its size.
pub fn cholesky_solve(ata: &[Vec<f64>], atb: &[f64]) -> Result<Solved<Vector>> {
    let (rows, cols) = validate_matrix(ata)?;
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    let dim = validate_vector(atb)?;
    if dim != cols {
        return Err(LinalgError::DimensionMismatch {
            expected: cols,
            actual: dim,
        });
    }

    let mut l = make_matrix(dim, dim)?;
    for i in 0..dim {
        let sum: f64 = l[i][..i].iter().map(|v| v * v).sum();
        l[i][i] = (ata[i][i] - sum).sqrt();
        for j in (i + 1)..dim {
            let sum: f64 = (0..i).map(|k| l[j][k] * l[i][k]).sum();
            l[j][i] = (ata[j][i] - sum) / l[i][i];
        }
    }

    // L y = atb, then L^T x = y, in one buffer.
    let mut x = atb.to_vec();
    for i in 0..dim {
        let sum: f64 = (0..i).map(|j| x[j] * l[i][j]).sum();
        x[i] = (x[i] - sum) / l[i][i];
    }
    for i in (0..dim).rev() {
        let sum: f64 = ((i + 1)..dim).map(|j| x[j] * l[j][i]).sum();
        x[i] = (x[i] - sum) / l[i][i];
    }

    let solved = Solved::<Vector>::classify(x);
    if solved.is_degenerate() {
        tracing::trace!(dim, "normal equations are not positive-definite");
    }
    Ok(solved)
}
