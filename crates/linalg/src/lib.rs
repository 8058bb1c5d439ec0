//! # linalg
//!
//! Dense linear algebra over plain `Vec<f64>` / `Vec<Vec<f64>>` containers,
//! sized for in-memory time series work (tens to low thousands of samples).
//!
//! ## Operations
//!
//! - [`vector`]: construction, validation, add/sub/scale, inner product
//! - [`matrix`]: construction, validation, add/sub/scale, products, transpose
//! - [`solve`]: Gauss-Jordan inversion with scaled partial pivoting,
//!   Cholesky solve of the normal equations
//! - [`format`]: ASCII grid and literal renderings for diagnostics
//!
//! ## Error channels
//!
//! Shape and content violations return [`LinalgError`]. Numerical
//! degeneracy never does: solvers return [`Solved::Degenerate`] holding
//! whatever non-finite values the computation produced.
//!
//! ## Example
//!
//! ```rust
//! use linalg::prelude::*;
//!
//! let x = vec![vec![1.0, -1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
//! let y = [1.0, 2.0, 3.0];
//! let xt = transpose(&x).unwrap();
//! let xtx = mat_mul_mat(&xt, &x).unwrap();
//! let xty = mat_mul_vec(&xt, &y).unwrap();
//! let beta = cholesky_solve(&xtx, &xty).unwrap().finite().unwrap();
//! assert!((beta[0] - 2.0).abs() < 1e-12);
//! assert!((beta[1] - 1.0).abs() < 1e-12);
//! ```

mod error;
pub mod format;
pub mod matrix;
pub mod solve;
pub mod vector;

pub use error::{LinalgError, Result};
pub use matrix::{
    add_matrices, identity, make_matrix, mat_mul_mat, mat_mul_vec, scale_matrix, sub_matrices,
    transpose, validate_matrix, Matrix,
};
pub use solve::{cholesky_solve, invert, Solved};
pub use vector::{
    add_vectors, inner_product, make_vector, scale_vector, sub_vectors, validate_vector, Vector,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::format::{
        format_ascii_matrix, format_ascii_vector, format_bracketed_matrix,
        format_bracketed_vector, format_code_matrix, format_code_vector,
    };
    pub use crate::matrix::*;
    pub use crate::solve::{cholesky_solve, invert, Solved};
    pub use crate::vector::*;
    pub use crate::{LinalgError, Result};
}
