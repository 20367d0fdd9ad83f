//! Operation counting.

use std::ops::AddAssign;

/// Tally of the arithmetic performed by a single solver invocation.
///
/// Every solver creates one of these at the start of a solve and returns it
/// attached to its result, so counts are scoped per call and concurrent
/// solves never share state. One multiplicative tick per multiplication or
/// division, one additive tick per addition or subtraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCount {
    /// Additions and subtractions.
    pub adds: u64,
    /// Multiplications and divisions.
    pub muls: u64,
}

impl OpCount {
    /// Combined tally.
    pub fn total(&self) -> u64 {
        self.adds + self.muls
    }
}

impl AddAssign for OpCount {
    fn add_assign(&mut self, rhs: OpCount) {
        self.adds += rhs.adds;
        self.muls += rhs.muls;
    }
}
