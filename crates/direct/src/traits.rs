use nalgebra::{DMatrix, DVector};

use crate::{ops::OpCount, scalar::Scalar, Error};

/// Solution of a linear system, together with the arithmetic spent
/// producing it.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<T> {
    /// One entry per unknown, indexed by variable position.
    pub x: DVector<T>,
    pub ops: OpCount,
}

/// A one-shot solver for `A x = b`.
///
/// Implementations work on private copies: the caller's matrix and vector
/// are never mutated. A structural failure (`SingularMatrix`,
/// `DimensionMismatch`, `InvalidStructure`) aborts the call; no partial
/// solution is ever returned.
pub trait LinearSolver<T: Scalar> {
    fn solve(&self, a: &DMatrix<T>, b: &DVector<T>) -> Result<Solution<T>, Error>;
}
