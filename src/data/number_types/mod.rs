//! # Number types
//!
//! The tableau is defined over floating point numbers. Rounding errors accumulate over pivots, so
//! values that are within a fixed tolerance of zero are treated as zero.
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Float, NumCast};

/// Values closer to zero than this are treated as zero.
pub const EPSILON: f64 = 1e-6;

/// Basic numerical operations needed from the values stored in a tableau.
///
/// Automatically implemented for all types satisfying the trait's bounds, notably `f64` and `f32`.
pub trait Real: Float + AddAssign + SubAssign + MulAssign + DivAssign + Debug + Display {
    /// Absolute tolerance below which a value is considered zero.
    fn tolerance() -> Self {
        <Self as NumCast>::from(EPSILON).unwrap_or_else(Self::epsilon)
    }
}
impl<T: Float + AddAssign + SubAssign + MulAssign + DivAssign + Debug + Display> Real for T {}

/// Whether a value rounds to zero under the tolerance.
#[inline]
pub fn rounds_to_zero<F: Real>(value: F) -> bool {
    value.abs() < F::tolerance()
}
