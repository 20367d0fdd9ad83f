//! Gauss-Seidel iteration: same splitting as Jacobi, but the sweep runs
//! in place, so entry i already sees the updated values of entries
//! 0..i from the current sweep and the previous values of entries i+1..n.

use direct::{OpCount, Scalar};
use log::{debug, trace};
use nalgebra::{DMatrix, DVector};

use crate::{
    norm_inf::NormInf,
    traits::{Iteration, StationarySolver},
    Error,
};

#[derive(Clone, Copy, Debug)]
pub struct GaussSeidel {
    max_iters: usize,
}

impl GaussSeidel {
    /// # Arguments
    /// * `max_iters` - The maximum number of sweeps per solve attempt
    pub fn new(max_iters: usize) -> Self {
        GaussSeidel { max_iters }
    }
}

impl<T: Scalar> StationarySolver<T> for GaussSeidel {
    fn solve(
        &self,
        a: &DMatrix<T>,
        b: &DVector<T>,
        x0: &DVector<T>,
        tol: T,
    ) -> Result<Iteration<T>, Error> {
        let n = crate::check_system(a, b, x0)?;
        let mut ops = OpCount::default();
        let mut x = x0.clone();

        for iter in 1..=self.max_iters {
            let x_prev = x.clone();
            for i in 0..n {
                let mut s = b[i].clone();
                for j in 0..n {
                    if j != i {
                        let term = a[(i, j)].clone() * x[j].clone();
                        s -= term;
                        ops.muls += 1;
                        ops.adds += 1;
                    }
                }
                x[i] = s / a[(i, i)].clone();
                ops.muls += 1;
            }

            if (&x - &x_prev).norm_inf() < tol {
                trace!("gauss-seidel converged after {iter} sweeps");
                return Ok(Iteration {
                    x,
                    iterations: iter,
                    converged: true,
                    ops,
                });
            }
        }

        debug!(
            "gauss-seidel: tolerance not met after {} sweeps, returning best estimate",
            self.max_iters
        );
        Ok(Iteration {
            x,
            iterations: self.max_iters,
            converged: false,
            ops,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use direct::{Gauss, LinearSolver, Pivoting, Rational};
    use nalgebra::{dmatrix, dvector};
    use num_bigint::BigInt;

    use super::*;
    use crate::Jacobi;

    #[test]
    fn converges_on_diagonally_dominant_system() {
        let a = dmatrix![
            8.0, -3.0, 2.0;
            4.0, 11.0, -1.0;
            6.0, 3.0, 12.0;
        ];
        let b = dvector![20.0, 33.0, 36.0];
        let x0 = dvector![0.0, 0.0, 0.0];

        let it = GaussSeidel::new(100).solve(&a, &b, &x0, 1e-6).unwrap();
        assert!(it.converged);
        assert_relative_eq!(it.x, dvector![3.0, 2.0, 1.0], max_relative = 1e-5);

        let direct = Gauss::new(Pivoting::Partial).solve(&a, &b).unwrap();
        assert_relative_eq!(it.x, direct.x, max_relative = 1e-4);
    }

    #[test]
    fn needs_no_more_sweeps_than_jacobi() {
        let a = dmatrix![
            8.0, -3.0, 2.0;
            4.0, 11.0, -1.0;
            6.0, 3.0, 12.0;
        ];
        let b = dvector![20.0, 33.0, 36.0];
        let x0 = dvector![0.0, 0.0, 0.0];

        let gs = GaussSeidel::new(100).solve(&a, &b, &x0, 1e-6).unwrap();
        let jacobi = Jacobi::new(100).solve(&a, &b, &x0, 1e-6).unwrap();
        assert!(gs.converged && jacobi.converged);
        assert!(gs.iterations <= jacobi.iterations);
    }

    #[test]
    fn runs_over_exact_rationals() {
        let rat = |n: i64, d: i64| Rational::new(BigInt::from(n), BigInt::from(d));
        let a = dmatrix![
            rat(4, 1), rat(1, 1);
            rat(1, 1), rat(3, 1);
        ];
        let b = dvector![rat(9, 1), rat(7, 1)];
        let x0 = dvector![rat(0, 1), rat(0, 1)];

        let it = GaussSeidel::new(100)
            .solve(&a, &b, &x0, rat(1, 1_000_000))
            .unwrap();
        assert!(it.converged);

        // Exact fixed point is (20/11, 19/11); the iterate is within the
        // tolerance of it.
        let exact = dvector![rat(20, 11), rat(19, 11)];
        assert!((&it.x - &exact).norm_inf() < rat(1, 100_000));
    }

    #[test]
    fn zero_budget_returns_the_initial_guess() {
        let a = dmatrix![4.0, 1.0; 1.0, 3.0];
        let b = dvector![9.0, 7.0];
        let x0 = dvector![2.0, 2.0];
        let it = GaussSeidel::new(0).solve(&a, &b, &x0, 1e-10).unwrap();
        assert!(!it.converged);
        assert_eq!(it.iterations, 0);
        assert_eq!(it.x, x0);
    }
}
