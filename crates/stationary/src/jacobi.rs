//! Jacobi iteration: split `A = D + R` with D the diagonal, then sweep
//! `x⁽ᵏ⁺¹⁾ = D⁻¹(b − R·x⁽ᵏ⁾)`, every entry computed from the previous
//! iterate.

use direct::{OpCount, Scalar};
use log::{debug, trace};
use nalgebra::{DMatrix, DVector};
use num_traits::Zero;

use crate::{
    norm_inf::NormInf,
    traits::{Iteration, StationarySolver},
    Error,
};

#[derive(Clone, Copy, Debug)]
pub struct Jacobi {
    max_iters: usize,
}

impl Jacobi {
    /// # Arguments
    /// * `max_iters` - The maximum number of sweeps per solve attempt
    pub fn new(max_iters: usize) -> Self {
        Jacobi { max_iters }
    }
}

impl<T: Scalar> StationarySolver<T> for Jacobi {
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
            let mut x_new = DVector::from_element(n, T::zero());
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
                x_new[i] = s / a[(i, i)].clone();
                ops.muls += 1;
            }

            if (&x_new - &x).norm_inf() < tol {
                trace!("jacobi converged after {iter} sweeps");
                return Ok(Iteration {
                    x: x_new,
                    iterations: iter,
                    converged: true,
                    ops,
                });
            }
            x = x_new;
        }

        debug!(
            "jacobi: tolerance not met after {} sweeps, returning best estimate",
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
