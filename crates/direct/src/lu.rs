//! LU decomposition without pivoting: `A = L U` with L unit
//! lower-triangular and U upper-triangular.
//!
//! Unlike the Gauss engine there is no row-swap fallback: a zero pivot
//! during factorization is immediately singular. A zero in U's *last*
//! diagonal position cannot be observed during factorization (it is never
//! used as a divisor there) and only surfaces when the factors are used to
//! solve or invert.

use nalgebra::{DMatrix, DVector};
use num_traits::{One, Zero};

use crate::{
    matrix,
    ops::OpCount,
    scalar::Scalar,
    traits::{LinearSolver, Solution},
    Error,
};

/// The factors of a square matrix, plus the arithmetic the factorization
/// spent.
#[derive(Clone, Debug, PartialEq)]
pub struct LuDecomposition<T> {
    l: DMatrix<T>,
    u: DMatrix<T>,
    ops: OpCount,
}

/// Inverse assembled from triangular factors.
#[derive(Clone, Debug, PartialEq)]
pub struct Inverse<T> {
    pub matrix: DMatrix<T>,
    pub ops: OpCount,
}

impl<T: Scalar> LuDecomposition<T> {
    /// Factors a square matrix. The input is copied; the caller's matrix is
    /// never mutated.
    pub fn factor(a: &DMatrix<T>) -> Result<Self, Error> {
        let n = matrix::check_square(a)?;
        let mut work = a.clone();
        let mut l = DMatrix::identity(n, n);
        let mut u = DMatrix::zeros(n, n);
        let mut ops = OpCount::default();

        for i in 0..n {
            // U's row i, columns >= i, is the current state of row i.
            for j in i..n {
                u[(i, j)] = work[(i, j)].clone();
            }

            if i + 1 < n && work[(i, i)].is_zero() {
                return Err(Error::SingularMatrix { col: i });
            }
            for j in (i + 1)..n {
                let m = work[(j, i)].clone() / work[(i, i)].clone();
                ops.muls += 1;
                l[(j, i)] = m.clone();
                for k in 0..n {
                    let delta = work[(i, k)].clone() * m.clone();
                    work[(j, k)] -= delta;
                    ops.muls += 1;
                    ops.adds += 1;
                }
            }
        }

        Ok(LuDecomposition { l, u, ops })
    }

    /// Unit lower-triangular factor.
    pub fn l(&self) -> &DMatrix<T> {
        &self.l
    }

    /// Upper-triangular factor.
    pub fn u(&self) -> &DMatrix<T> {
        &self.u
    }

    /// Arithmetic spent by the factorization.
    pub fn ops(&self) -> OpCount {
        self.ops
    }

    /// det(A) = det(L)·det(U) = product of U's diagonal, since det(L) = 1.
    pub fn determinant(&self) -> T {
        let mut det = T::one();
        for i in 0..self.u.nrows() {
            det *= self.u[(i, i)].clone();
        }
        det
    }

    /// Solves `A x = b` through the stored factors: forward substitution
    /// for `L y = b`, then back substitution for `U x = y`.
    pub fn solve(&self, b: &DVector<T>) -> Result<Solution<T>, Error> {
        let n = self.l.nrows();
        matrix::check_len(b.len(), n, "right-hand side length")?;
        let mut ops = OpCount::default();

        let mut y = DVector::from_element(n, T::zero());
        for i in 0..n {
            let mut s = b[i].clone();
            for j in 0..i {
                let term = self.l[(i, j)].clone() * y[j].clone();
                s -= term;
                ops.muls += 1;
                ops.adds += 1;
            }
            y[i] = s;
        }

        let mut x = DVector::from_element(n, T::zero());
        for i in (0..n).rev() {
            if self.u[(i, i)].is_zero() {
                return Err(Error::SingularMatrix { col: i });
            }
            let mut s = y[i].clone();
            for j in (i + 1)..n {
                let term = self.u[(i, j)].clone() * x[j].clone();
                s -= term;
                ops.muls += 1;
                ops.adds += 1;
            }
            x[i] = s / self.u[(i, i)].clone();
            ops.muls += 1;
        }

        Ok(Solution { x, ops })
    }

    /// Inverts the source matrix as `A⁻¹ = U⁻¹ L⁻¹`, with both triangular
    /// inverses computed analytically column-by-column. Exact for rational
    /// input.
    pub fn inverse(&self) -> Result<Inverse<T>, Error> {
        let n = self.l.nrows();
        let mut ops = OpCount::default();

        // L is unit lower-triangular, so its inverse is too:
        // L⁻¹[i][j] = -Σ_{k=j}^{i-1} L[i][k]·L⁻¹[k][j] for i > j.
        let mut l_inv: DMatrix<T> = DMatrix::identity(n, n);
        for j in 0..n {
            for i in (j + 1)..n {
                let mut s = T::zero();
                for k in j..i {
                    s += self.l[(i, k)].clone() * l_inv[(k, j)].clone();
                    ops.muls += 1;
                    ops.adds += 1;
                }
                l_inv[(i, j)] = -s;
            }
        }

        // U⁻¹[j][j] = 1/U[j][j];
        // U⁻¹[i][j] = -(Σ_{k=i+1}^{j} U[i][k]·U⁻¹[k][j]) / U[i][i] for i < j.
        let mut u_inv = DMatrix::zeros(n, n);
        for j in (0..n).rev() {
            if self.u[(j, j)].is_zero() {
                return Err(Error::SingularMatrix { col: j });
            }
            u_inv[(j, j)] = T::one() / self.u[(j, j)].clone();
            ops.muls += 1;
            for i in (0..j).rev() {
                let mut s = T::zero();
                for k in (i + 1)..=j {
                    s += self.u[(i, k)].clone() * u_inv[(k, j)].clone();
                    ops.muls += 1;
                    ops.adds += 1;
                }
                u_inv[(i, j)] = -s / self.u[(i, i)].clone();
                ops.muls += 1;
            }
        }

        let matrix = matrix::mat_mul(&u_inv, &l_inv, &mut ops);
        Ok(Inverse { matrix, ops })
    }
}

/// LU-backed implementation of the common solver interface: factor, then
/// substitute. Operation counts from both stages are merged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lu;

impl<T: Scalar> LinearSolver<T> for Lu {
    fn solve(&self, a: &DMatrix<T>, b: &DVector<T>) -> Result<Solution<T>, Error> {
        let lu = LuDecomposition::factor(a)?;
        let mut solution = lu.solve(b)?;
        solution.ops += lu.ops();
        Ok(solution)
    }
}
