//! # Error reporting for building and pivoting a tableau
//!
//! Unboundedness of a linear program is not an error; these errors describe inconsistent input or
//! a misuse of the pivoting interface.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crate::data::linear_algebra::ConstraintId;
use crate::data::linear_program::VariableId;

/// A `TableauError` is returned when the data used to build a tableau violates its invariants.
#[derive(Debug, Eq, PartialEq)]
pub enum TableauError {
    /// There should be exactly one basic variable per right-hand side value.
    DimensionMismatch {
        /// Number of right-hand side values.
        rhs_values: usize,
        /// Number of basic variables.
        basic_variables: usize,
    },
    /// A column has a coefficient in a row that doesn't exist.
    ConstraintOutOfRange {
        #[allow(missing_docs)]
        variable: VariableId,
        #[allow(missing_docs)]
        constraint: ConstraintId,
    },
    /// The coefficients of a column are not sorted by constraint.
    UnsortedColumn(VariableId),
    /// A column has two coefficients for the same constraint.
    DuplicateCoefficient {
        #[allow(missing_docs)]
        variable: VariableId,
        #[allow(missing_docs)]
        constraint: ConstraintId,
    },
    /// A column stores a value that rounds to zero.
    NegligibleCoefficient {
        #[allow(missing_docs)]
        variable: VariableId,
        #[allow(missing_docs)]
        constraint: ConstraintId,
    },
    /// A variable appears twice, either as two columns, twice in the basis, or both basic and
    /// nonbasic.
    DuplicateVariable(VariableId),
}

impl Display for TableauError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableauError::DimensionMismatch { rhs_values, basic_variables } => write!(
                f, "{} right-hand side values but {} basic variables", rhs_values, basic_variables,
            ),
            TableauError::ConstraintOutOfRange { variable, constraint } => write!(
                f, "variable {} has a coefficient in constraint {}, which doesn't exist",
                variable, constraint,
            ),
            TableauError::UnsortedColumn(variable) => write!(
                f, "coefficients of variable {} are not sorted by constraint", variable,
            ),
            TableauError::DuplicateCoefficient { variable, constraint } => write!(
                f, "variable {} has more than one coefficient in constraint {}", variable, constraint,
            ),
            TableauError::NegligibleCoefficient { variable, constraint } => write!(
                f, "variable {} stores a zero coefficient in constraint {}", variable, constraint,
            ),
            TableauError::DuplicateVariable(variable) => write!(
                f, "variable {} appears more than once", variable,
            ),
        }
    }
}

impl Error for TableauError {}

/// A `PivotError` is returned when a pivot is requested that can't be carried out.
#[derive(Debug, Eq, PartialEq)]
pub enum PivotError {
    /// The entering variable is not among the nonbasic variables.
    VariableNotFound(VariableId),
}

impl Display for PivotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PivotError::VariableNotFound(variable) => write!(
                f, "incoming variable {} not found in nonbasic variables", variable,
            ),
        }
    }
}

impl Error for PivotError {}

#[cfg(test)]
mod test {
    use crate::error::{PivotError, TableauError};

    #[test]
    fn display() {
        assert_eq!(
            PivotError::VariableNotFound(9).to_string(),
            "incoming variable 9 not found in nonbasic variables",
        );
        assert_eq!(
            TableauError::DimensionMismatch { rhs_values: 2, basic_variables: 3 }.to_string(),
            "2 right-hand side values but 3 basic variables",
        );
    }
}
