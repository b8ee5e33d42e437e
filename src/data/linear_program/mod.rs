//! # Representing linear programs
//!
//! A linear program in tableau form consists of basic variables, one per constraint, and nonbasic
//! variables. Only the nonbasic variables are stored as columns; a basic variable implicitly has a
//! unit coefficient in its own row and no coefficient elsewhere.
use std::fmt::{self, Display};

use crate::data::linear_algebra::{Coefficient, ConstraintId};
use crate::data::linear_algebra::sparse::is_sparse;
use crate::data::number_types::{Real, rounds_to_zero};

/// Identifies a variable, whether basic or nonbasic.
pub type VariableId = usize;

/// A nonbasic variable.
///
/// Holds the effect of the variable on each constraint row and its reduced cost.
#[derive(Clone, Debug, PartialEq)]
pub struct Column<F> {
    variable_id: VariableId,
    coefficients: Vec<Coefficient<F>>,
    objective_coefficient: F,
}

impl<F: Real> Column<F> {
    /// Create a new column.
    ///
    /// Requires that the coefficients are sorted by strictly increasing constraint index and that
    /// values that round to zero are already filtered. This is validated when the column is placed
    /// in a `Tableau`.
    pub fn new(
        variable_id: VariableId,
        coefficients: Vec<Coefficient<F>>,
        objective_coefficient: F,
    ) -> Self {
        Self { variable_id, coefficients, objective_coefficient }
    }

    /// Create a column from a dense sequence of values, one per constraint.
    ///
    /// Values that round to zero are not stored.
    pub fn from_dense(variable_id: VariableId, values: &[F], objective_coefficient: F) -> Self {
        let coefficients = values.iter()
            .enumerate()
            .filter(|&(_, value)| !rounds_to_zero(*value))
            .map(|(constraint_id, &value)| Coefficient::new(constraint_id, value))
            .collect();

        Self::new(variable_id, coefficients, objective_coefficient)
    }

    /// Variable this column represents.
    pub fn variable_id(&self) -> VariableId {
        self.variable_id
    }

    /// Nonzero entries, sorted by constraint.
    pub fn coefficients(&self) -> &[Coefficient<F>] {
        &self.coefficients
    }

    /// Reduced cost in the current basis.
    pub fn objective_coefficient(&self) -> F {
        self.objective_coefficient
    }

    /// Coefficient in a constraint, zero if not stored.
    pub fn coefficient(&self, constraint_id: ConstraintId) -> F {
        self.coefficients.iter()
            .find(|coefficient| coefficient.constraint_id == constraint_id)
            .map_or_else(F::zero, |coefficient| coefficient.value)
    }

    /// Whether the sorted, unique, no-zero invariant holds.
    pub fn is_sparse(&self) -> bool {
        is_sparse(&self.coefficients)
    }

    /// Reuse this column's storage for a variable that just left the basis.
    ///
    /// The leaving variable has a unit coefficient in the row it was basic in, and no reduced cost.
    pub(crate) fn replace_with_unit(&mut self, variable_id: VariableId, constraint_id: ConstraintId) {
        self.variable_id = variable_id;
        self.objective_coefficient = F::zero();
        self.coefficients.clear();
        self.coefficients.push(Coefficient::new(constraint_id, F::one()));
    }

    pub(crate) fn coefficients_mut(&mut self) -> &mut Vec<Coefficient<F>> {
        &mut self.coefficients
    }

    pub(crate) fn objective_coefficient_mut(&mut self) -> &mut F {
        &mut self.objective_coefficient
    }
}

impl<F: Display> Display for Column<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x{} (cost {}): [", self.variable_id, self.objective_coefficient)?;
        for (index, coefficient) in self.coefficients.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coefficient)?;
        }
        write!(f, "]")
    }
}
