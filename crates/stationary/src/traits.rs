use direct::{OpCount, Scalar};
use nalgebra::{DMatrix, DVector};

use crate::Error;

/// Outcome of a stationary iteration.
///
/// Running out of iterations is a soft condition, not an error: the best
/// available estimate is returned with `converged` false, and the caller
/// decides what to do with it.
#[derive(Clone, Debug, PartialEq)]
pub struct Iteration<T> {
    /// The final iterate.
    pub x: DVector<T>,
    /// Number of sweeps performed.
    pub iterations: usize,
    /// Whether the tolerance was met before the iteration budget ran out.
    pub converged: bool,
    pub ops: OpCount,
}

/// Fixed-point iteration on a splitting of `A`, from an initial guess,
/// terminating when the infinity norm of the change between consecutive
/// iterates drops below `tol` or when `max_iters` sweeps have run.
///
/// Convergence is only guaranteed when the spectral radius of the
/// iteration matrix is below one; diagonally dominant systems satisfy
/// this. That precondition is the caller's responsibility and is not
/// checked here.
pub trait StationarySolver<T: Scalar> {
    fn solve(
        &self,
        a: &DMatrix<T>,
        b: &DVector<T>,
        x0: &DVector<T>,
        tol: T,
    ) -> Result<Iteration<T>, Error>;
}
