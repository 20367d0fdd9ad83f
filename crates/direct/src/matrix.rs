//! Dimension checks and augmented-system assembly.

use nalgebra::{DMatrix, DVector};
use num_traits::Zero;

use crate::{ops::OpCount, scalar::Scalar, Error};

/// Builds the n×(n+1) augmented system `[A | b]`.
///
/// The inputs are copied; callers keep their originals untouched.
pub fn augmented<T: Scalar>(a: &DMatrix<T>, b: &DVector<T>) -> Result<DMatrix<T>, Error> {
    let n = check_square(a)?;
    check_len(b.len(), n, "right-hand side length")?;
    Ok(DMatrix::from_fn(n, n + 1, |i, j| {
        if j == n {
            b[i].clone()
        } else {
            a[(i, j)].clone()
        }
    }))
}

pub(crate) fn check_square<T: Scalar>(a: &DMatrix<T>) -> Result<usize, Error> {
    if a.nrows() != a.ncols() {
        return Err(Error::DimensionMismatch {
            context: "coefficient matrix must be square",
            expected: a.nrows(),
            found: a.ncols(),
        });
    }
    Ok(a.nrows())
}

pub(crate) fn check_len(len: usize, dim: usize, context: &'static str) -> Result<(), Error> {
    if len != dim {
        return Err(Error::DimensionMismatch {
            context,
            expected: dim,
            found: len,
        });
    }
    Ok(())
}

/// Counted dense product, used when assembling an inverse from triangular
/// factors.
pub(crate) fn mat_mul<T: Scalar>(
    a: &DMatrix<T>,
    b: &DMatrix<T>,
    ops: &mut OpCount,
) -> DMatrix<T> {
    let (n, m) = (a.nrows(), b.ncols());
    let inner = a.ncols();
    let mut out = DMatrix::zeros(n, m);
    for i in 0..n {
        for j in 0..m {
            let mut s = T::zero();
            for k in 0..inner {
                s += a[(i, k)].clone() * b[(k, j)].clone();
                ops.muls += 1;
                ops.adds += 1;
            }
            out[(i, j)] = s;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use nalgebra::{dmatrix, dvector};

    use super::*;
    use crate::Error;

    #[test]
    fn augment_appends_rhs() {
        let a = dmatrix![1.0, 2.0; 3.0, 4.0];
        let b = dvector![5.0, 6.0];
        let aug = augmented(&a, &b).unwrap();
        assert_eq!(aug, dmatrix![1.0, 2.0, 5.0; 3.0, 4.0, 6.0]);
    }

    #[test]
    fn augment_rejects_bad_shapes() {
        let a = dmatrix![1.0, 2.0, 3.0; 4.0, 5.0, 6.0];
        let b = dvector![1.0, 2.0];
        assert!(matches!(
            augmented(&a, &b),
            Err(Error::DimensionMismatch { .. })
        ));

        let a = dmatrix![1.0, 2.0; 3.0, 4.0];
        let b = dvector![1.0, 2.0, 3.0];
        assert!(matches!(
            augmented(&a, &b),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
