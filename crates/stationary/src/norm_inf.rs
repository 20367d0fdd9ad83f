use direct::Scalar;
use nalgebra::DVector;
use num_traits::{Signed, Zero};

/// Infinity norm: the largest absolute entry. Both sweeps use it to decide
/// convergence of the difference between consecutive iterates.
pub trait NormInf<T> {
    fn norm_inf(&self) -> T;
}

impl<T: Scalar> NormInf<T> for DVector<T> {
    fn norm_inf(&self) -> T {
        let mut max = T::zero();
        for v in self.iter() {
            let a = v.abs();
            if a > max {
                max = a;
            }
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::dvector;

    use super::*;

    #[test]
    fn picks_largest_magnitude() {
        assert_eq!(dvector![1.0, -3.5, 2.0].norm_inf(), 3.5);
        assert_eq!(dvector![0.0, 0.0].norm_inf(), 0.0);
    }
}
