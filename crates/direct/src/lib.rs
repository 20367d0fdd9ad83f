//! Direct solvers for dense linear systems: Gauss elimination (plain and
//! column-pivoted), LU decomposition with determinant and inversion, and the
//! tridiagonal Thomas algorithm.

pub mod gauss;
pub mod lu;
mod matrix;
pub mod ops;
pub mod scalar;
pub mod thomas;
mod traits;

pub use gauss::{Gauss, Pivoting};
pub use lu::{Inverse, Lu, LuDecomposition};
pub use matrix::augmented;
pub use ops::OpCount;
pub use scalar::{Rational, Scalar};
pub use thomas::Thomas;
pub use traits::{LinearSolver, Solution};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A required pivot is zero and no usable replacement row exists below it.
    /// Fatal to the current solve; no retry.
    #[error("singular matrix: zero pivot in column {col}")]
    SingularMatrix { col: usize },

    #[error("dimension mismatch: {context} (expected {expected}, found {found})")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    /// The tridiagonal solver was handed a matrix with a non-zero entry
    /// outside the three diagonals.
    #[error("invalid structure: entry ({row}, {col}) lies outside the tridiagonal band")]
    InvalidStructure { row: usize, col: usize },
}
