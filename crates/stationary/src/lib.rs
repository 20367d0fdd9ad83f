//! Stationary iterative solvers for linear systems: Jacobi and
//! Gauss-Seidel fixed-point iteration on a splitting of the coefficient
//! matrix.

use nalgebra::{DMatrix, DVector};
use num_traits::Zero;
use thiserror::Error;

pub mod gauss_seidel;
pub mod jacobi;
pub mod norm_inf;
pub mod traits;

pub use gauss_seidel::GaussSeidel;
pub use jacobi::Jacobi;
pub use norm_inf::NormInf;
pub use traits::{Iteration, StationarySolver};

use direct::Scalar;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Direct(#[from] direct::Error),
}

/// Structural validation shared by both sweeps: the system must be square
/// with matching vector lengths, and the diagonal must be non-zero since
/// every sweep divides by it.
pub(crate) fn check_system<T: Scalar>(
    a: &DMatrix<T>,
    b: &DVector<T>,
    x0: &DVector<T>,
) -> Result<usize, direct::Error> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(direct::Error::DimensionMismatch {
            context: "coefficient matrix must be square",
            expected: n,
            found: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(direct::Error::DimensionMismatch {
            context: "right-hand side length",
            expected: n,
            found: b.len(),
        });
    }
    if x0.len() != n {
        return Err(direct::Error::DimensionMismatch {
            context: "initial guess length",
            expected: n,
            found: x0.len(),
        });
    }
    for i in 0..n {
        if a[(i, i)].is_zero() {
            return Err(direct::Error::SingularMatrix { col: i });
        }
    }
    Ok(n)
}
