//! Gauss elimination over an augmented system.
//!
//! Two pivoting strategies are kept distinct because they carry different
//! stability guarantees: the plain variant swaps rows only to escape an
//! exactly-zero pivot, while the column-pivoted variant always moves the
//! largest-magnitude candidate into the pivot position to bound the growth
//! of rounding error.

use log::trace;
use nalgebra::{DMatrix, DVector};
use num_traits::{Signed, Zero};

use crate::{
    matrix,
    ops::OpCount,
    scalar::Scalar,
    traits::{LinearSolver, Solution},
    Error,
};

/// Row-swap strategy used while eliminating a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pivoting {
    /// Swap only when the pivot is exactly zero, taking the first non-zero
    /// row below it.
    None,
    /// Always swap the largest-magnitude candidate in the column into the
    /// pivot position.
    Partial,
}

#[derive(Clone, Copy, Debug)]
pub struct Gauss {
    pivoting: Pivoting,
}

impl Gauss {
    pub fn new(pivoting: Pivoting) -> Self {
        Gauss { pivoting }
    }

    /// Solves a pre-assembled n×(n+1) augmented system `[A | b]`.
    pub fn solve_augmented<T: Scalar>(&self, aug: &DMatrix<T>) -> Result<Solution<T>, Error> {
        if aug.ncols() != aug.nrows() + 1 {
            return Err(Error::DimensionMismatch {
                context: "augmented matrix must have one more column than rows",
                expected: aug.nrows() + 1,
                found: aug.ncols(),
            });
        }
        let mut work = aug.clone();
        let mut ops = OpCount::default();
        self.eliminate(&mut work, &mut ops)?;
        let x = back_substitute(&work, &mut ops)?;
        Ok(Solution { x, ops })
    }

    /// Reduces the working matrix to upper-triangular form.
    fn eliminate<T: Scalar>(&self, work: &mut DMatrix<T>, ops: &mut OpCount) -> Result<(), Error> {
        let n = work.nrows();
        for k in 0..n.saturating_sub(1) {
            match self.pivoting {
                Pivoting::None => {
                    if work[(k, k)].is_zero() {
                        let swap = ((k + 1)..n)
                            .find(|&i| !work[(i, k)].is_zero())
                            .ok_or(Error::SingularMatrix { col: k })?;
                        trace!("zero pivot in column {k}: swapping rows {k} and {swap}");
                        work.swap_rows(k, swap);
                    }
                }
                Pivoting::Partial => {
                    let mut best = k;
                    for i in (k + 1)..n {
                        if work[(i, k)].abs() > work[(best, k)].abs() {
                            best = i;
                        }
                    }
                    if work[(best, k)].is_zero() {
                        return Err(Error::SingularMatrix { col: k });
                    }
                    if best != k {
                        trace!("column {k}: pivoting row {best} into position {k}");
                        work.swap_rows(k, best);
                    }
                }
            }

            for i in (k + 1)..n {
                let l = work[(i, k)].clone() / work[(k, k)].clone();
                ops.muls += 1;
                for j in k..=n {
                    let delta = work[(k, j)].clone() * l.clone();
                    work[(i, j)] -= delta;
                    ops.muls += 1;
                    ops.adds += 1;
                }
            }
        }
        Ok(())
    }
}

impl<T: Scalar> LinearSolver<T> for Gauss {
    fn solve(&self, a: &DMatrix<T>, b: &DVector<T>) -> Result<Solution<T>, Error> {
        let aug = matrix::augmented(a, b)?;
        self.solve_augmented(&aug)
    }
}

/// Solves the upper-triangular system left behind by elimination, from the
/// last row upward. A zero diagonal entry here means the matrix was
/// singular after all.
fn back_substitute<T: Scalar>(work: &DMatrix<T>, ops: &mut OpCount) -> Result<DVector<T>, Error> {
    let n = work.nrows();
    let mut x = DVector::from_element(n, T::zero());
    for i in (0..n).rev() {
        if work[(i, i)].is_zero() {
            return Err(Error::SingularMatrix { col: i });
        }
        let mut rhs = work[(i, n)].clone();
        for j in (i + 1)..n {
            let term = work[(i, j)].clone() * x[j].clone();
            rhs -= term;
            ops.muls += 1;
            ops.adds += 1;
        }
        x[i] = rhs / work[(i, i)].clone();
        ops.muls += 1;
    }
    Ok(x)
}
