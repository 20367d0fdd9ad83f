//! The Thomas algorithm: O(n) elimination for tridiagonal systems.
//!
//! With `d` the main diagonal, `a` the sub-diagonal and `c` the
//! super-diagonal, the forward sweep computes
//!
//! ```math
//! u₀ = d₀            uᵢ = dᵢ − aᵢ·cᵢ₋₁/uᵢ₋₁
//! y₀ = b₀            yᵢ = bᵢ − aᵢ·yᵢ₋₁/uᵢ₋₁
//! ```
//!
//! and the backward sweep recovers `xₙ₋₁ = yₙ₋₁/uₙ₋₁`,
//! `xᵢ = (yᵢ − cᵢ·xᵢ₊₁)/uᵢ`.

use nalgebra::{DMatrix, DVector};
use num_traits::Zero;

use crate::{
    matrix,
    ops::OpCount,
    scalar::Scalar,
    traits::{LinearSolver, Solution},
    Error,
};

/// Tridiagonal solver. The [`LinearSolver`] entry point actively validates
/// that the matrix has no entry outside the three diagonals; callers that
/// already hold the bands can use [`Thomas::solve_diagonals`] directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Thomas;

impl Thomas {
    /// Solves from the three bands: `sub` (length n−1), `diag` (length n),
    /// `sup` (length n−1) and the right-hand side `b` (length n).
    pub fn solve_diagonals<T: Scalar>(
        sub: &DVector<T>,
        diag: &DVector<T>,
        sup: &DVector<T>,
        b: &DVector<T>,
    ) -> Result<Solution<T>, Error> {
        let n = diag.len();
        let mut ops = OpCount::default();
        if n == 0 {
            return Ok(Solution {
                x: DVector::from_vec(Vec::new()),
                ops,
            });
        }
        matrix::check_len(sub.len(), n - 1, "sub-diagonal length")?;
        matrix::check_len(sup.len(), n - 1, "super-diagonal length")?;
        matrix::check_len(b.len(), n, "right-hand side length")?;

        let mut u = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        u.push(diag[0].clone());
        y.push(b[0].clone());
        for i in 1..n {
            if u[i - 1].is_zero() {
                return Err(Error::SingularMatrix { col: i - 1 });
            }
            let t = sub[i - 1].clone() * sup[i - 1].clone() / u[i - 1].clone();
            ops.muls += 2;
            u.push(diag[i].clone() - t);
            ops.adds += 1;

            let t = sub[i - 1].clone() * y[i - 1].clone() / u[i - 1].clone();
            ops.muls += 2;
            y.push(b[i].clone() - t);
            ops.adds += 1;
        }
        if u[n - 1].is_zero() {
            return Err(Error::SingularMatrix { col: n - 1 });
        }

        let mut x = DVector::from_element(n, T::zero());
        x[n - 1] = y[n - 1].clone() / u[n - 1].clone();
        ops.muls += 1;
        for i in (0..n - 1).rev() {
            let t = sup[i].clone() * x[i + 1].clone();
            ops.muls += 1;
            let s = y[i].clone() - t;
            ops.adds += 1;
            x[i] = s / u[i].clone();
            ops.muls += 1;
        }

        Ok(Solution { x, ops })
    }
}

impl<T: Scalar> LinearSolver<T> for Thomas {
    fn solve(&self, a: &DMatrix<T>, b: &DVector<T>) -> Result<Solution<T>, Error> {
        let n = matrix::check_square(a)?;
        matrix::check_len(b.len(), n, "right-hand side length")?;
        for i in 0..n {
            for j in 0..n {
                if (j > i + 1 || i > j + 1) && !a[(i, j)].is_zero() {
                    return Err(Error::InvalidStructure { row: i, col: j });
                }
            }
        }

        let sub = DVector::from_fn(n.saturating_sub(1), |i, _| a[(i + 1, i)].clone());
        let diag = DVector::from_fn(n, |i, _| a[(i, i)].clone());
        let sup = DVector::from_fn(n.saturating_sub(1), |i, _| a[(i, i + 1)].clone());
        Self::solve_diagonals(&sub, &diag, &sup, b)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector, DMatrix, DVector};
    use num_bigint::BigInt;

    use super::*;
    use crate::{
        gauss::{Gauss, Pivoting},
        scalar::Rational,
    };

    fn rat(n: i64, d: i64) -> Rational {
        Rational::new(BigInt::from(n), BigInt::from(d))
    }

    fn heat_system() -> (DMatrix<Rational>, DVector<Rational>) {
        let a = DMatrix::from_fn(5, 5, |i, j| {
            if i == j {
                rat(4, 1)
            } else if i.abs_diff(j) == 1 {
                rat(-1, 1)
            } else {
                rat(0, 1)
            }
        });
        let b = dvector![rat(100, 1), rat(200, 1), rat(200, 1), rat(200, 1), rat(100, 1)];
        (a, b)
    }

    #[test]
    fn solves_the_five_point_system_exactly() {
        let (a, b) = heat_system();
        let sol = Thomas.solve(&a, &b).unwrap();
        assert_eq!(
            sol.x,
            dvector![
                rat(600, 13),
                rat(1100, 13),
                rat(1200, 13),
                rat(1100, 13),
                rat(600, 13)
            ]
        );
    }

    #[test]
    fn agrees_with_general_gauss_elimination() {
        let (a, b) = heat_system();
        let fast = Thomas.solve(&a, &b).unwrap();
        let general = Gauss::new(Pivoting::Partial).solve(&a, &b).unwrap();
        assert_eq!(fast.x, general.x);
        // The specialized sweep does strictly less arithmetic.
        assert!(fast.ops.total() < general.ops.total());
    }

    #[test]
    fn counts_operations() {
        let (a, b) = heat_system();
        let sol = Thomas.solve(&a, &b).unwrap();
        assert_eq!(sol.ops.muls, 25);
        assert_eq!(sol.ops.adds, 12);
    }

    #[test]
    fn solves_floats() {
        let a = DMatrix::from_fn(5, 5, |i, j| {
            if i == j {
                4.0
            } else if i.abs_diff(j) == 1 {
                -1.0
            } else {
                0.0
            }
        });
        let b = dvector![100.0, 200.0, 200.0, 200.0, 100.0];
        let sol = Thomas.solve(&a, &b).unwrap();
        let expected = dvector![
            600.0 / 13.0,
            1100.0 / 13.0,
            1200.0 / 13.0,
            1100.0 / 13.0,
            600.0 / 13.0
        ];
        assert_relative_eq!(sol.x, expected, max_relative = 1e-12);
    }

    #[test]
    fn rejects_entries_outside_the_band() {
        let a = dmatrix![
            4.0, -1.0, 7.0;
            -1.0, 4.0, -1.0;
            0.0, -1.0, 4.0;
        ];
        let b = dvector![1.0, 2.0, 3.0];
        let err = Thomas.solve(&a, &b).unwrap_err();
        assert!(matches!(err, Error::InvalidStructure { row: 0, col: 2 }));
    }

    #[test]
    fn zero_sweep_divisor_is_singular() {
        // u₁ = 1 − 1·1/1 = 0, caught before the backward sweep divides.
        let sub = dvector![rat(1, 1)];
        let diag = dvector![rat(1, 1), rat(1, 1)];
        let sup = dvector![rat(1, 1)];
        let b = dvector![rat(1, 1), rat(2, 1)];
        let err = Thomas::solve_diagonals(&sub, &diag, &sup, &b).unwrap_err();
        assert!(matches!(err, Error::SingularMatrix { col: 1 }));
    }

    #[test]
    fn single_unknown() {
        let sol = Thomas::solve_diagonals(
            &DVector::from_vec(Vec::new()),
            &dvector![4.0],
            &DVector::from_vec(Vec::new()),
            &dvector![8.0],
        )
        .unwrap();
        assert_eq!(sol.x, dvector![2.0]);
        assert_eq!(sol.ops.muls, 1);
    }
}
