//! Kernel error types
//!
//! Structural violations only. Numerical degeneracy (singular systems,
//! non-SPD normal equations) is reported through [`crate::Solved`], never
//! as an error.

use thiserror::Error;

/// Result type alias for kernel operations
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Errors raised when an operand violates a shape or content contract
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Requested container dimension is below one
    #[error("Invalid dimension '{name}': must be at least 1, got {value}")]
    InvalidDimension { name: &'static str, value: usize },

    /// Vector or matrix has no elements / rows
    #[error("Operand is empty")]
    Empty,

    /// Matrix row has zero length
    #[error("Matrix row {row} has no elements")]
    NonPositiveSize { row: usize },

    /// Element is NaN or infinite
    #[error("Non-finite element at row {row}, column {col}")]
    NonFiniteElement { row: usize, col: usize },

    /// Matrix rows differ in length
    #[error("Matrix row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Operand shapes are incompatible for the operation
    #[error("Incompatible shapes for {op}: {left:?} vs {right:?}")]
    IncompatibleShape {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Operation requires a square matrix
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Right-hand side length does not match the system size
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
