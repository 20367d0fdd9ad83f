//! Scalar abstraction shared by every solver.

use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::Signed;

/// Exact rational scalar: a ratio of arbitrary-precision integers.
///
/// Used to compare "exact" against floating solutions without rounding noise.
/// `Rational::new` normalizes and panics on a zero denominator; the solvers
/// themselves never construct one.
pub type Rational = num_rational::BigRational;

/// Entry type the solvers operate on.
///
/// Implemented for IEEE floats (`f32`, `f64`) and for [`Rational`] via the
/// blanket impl below. Pivot selection compares magnitudes through
/// `Signed::abs`, and every division in the algorithms is preceded by a zero
/// test on the divisor, so a zero pivot surfaces as
/// [`Error::SingularMatrix`](crate::Error::SingularMatrix) for both
/// representations instead of a rational divide-by-zero panic or a silent
/// float infinity/NaN.
///
/// `Copy` is deliberately not required: [`Rational`] is heap-backed, so the
/// algorithms clone entries where they reuse them.
pub trait Scalar:
    nalgebra::Scalar + Signed + PartialOrd + AddAssign + SubAssign + MulAssign + DivAssign
{
}

impl<T> Scalar for T where
    T: nalgebra::Scalar + Signed + PartialOrd + AddAssign + SubAssign + MulAssign + DivAssign
{
}
