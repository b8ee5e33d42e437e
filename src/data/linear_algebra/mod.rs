//! # Linear algebra primitives
//!
//! Sparse sequences of coefficients, indexed by constraint, and the operations on them that a pivot
//! needs.
use std::fmt::{self, Display};

pub mod sparse;

/// Index of a constraint, or equivalently, of a row of the tableau.
pub type ConstraintId = usize;

/// A single nonzero entry of a column, in a given constraint row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coefficient<F> {
    /// Row in which this value appears.
    pub constraint_id: ConstraintId,
    /// Should not round to zero when stored in a column.
    pub value: F,
}

impl<F> Coefficient<F> {
    /// Create a new coefficient.
    pub fn new(constraint_id: ConstraintId, value: F) -> Self {
        Self { constraint_id, value }
    }
}

impl<F: Display> Display for Coefficient<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {})", self.constraint_id, self.value)
    }
}
