//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! Only the nonbasic variables are stored, as sparse columns; the basic variables are represented
//! by the right-hand side and the identity of the variable that is basic in each row.
use std::collections::HashSet;
use std::fmt::{self, Display};

use crate::algorithm::strategy::pivot_rule::{EnteringRule, LargestCoefficient};
use crate::data::linear_algebra::sparse::is_sparse;
use crate::data::linear_program::{Column, VariableId};
use crate::data::number_types::{Real, rounds_to_zero};
use crate::error::TableauError;

pub mod pivot;
pub mod work_buffers;

/// The full state of a linear program during the simplex method.
///
/// Row `i` has basic variable `basic_variable_ids[i]`, whose current value is `rhs_values[i]`.
/// That variable implicitly has coefficient one in row `i` and zero in all other rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Objective function value of the current basic solution, `+infinity` once the problem has
    /// been found unbounded.
    objective: F,
    /// Indexed by position; a pivot reuses the entering variable's position for the leaving
    /// variable.
    nonbasic_columns: Vec<Column<F>>,

    /// In tandem with `basic_variable_ids`.
    rhs_values: Vec<F>,
    basic_variable_ids: Vec<VariableId>,
}

impl<F: Real> Tableau<F> {
    /// Create a new tableau.
    ///
    /// # Arguments
    ///
    /// * `objective`: Objective value of the initial basic solution.
    /// * `nonbasic_columns`: Each with coefficients sorted by constraint, without duplicates and
    /// without values that round to zero.
    /// * `rhs_values`: Value of the basic variable of each row.
    /// * `basic_variable_ids`: Basic variable of each row.
    ///
    /// # Errors
    ///
    /// A `TableauError` describing the first inconsistency found.
    pub fn new(
        objective: F,
        nonbasic_columns: Vec<Column<F>>,
        rhs_values: Vec<F>,
        basic_variable_ids: Vec<VariableId>,
    ) -> Result<Self, TableauError> {
        if rhs_values.len() != basic_variable_ids.len() {
            return Err(TableauError::DimensionMismatch {
                rhs_values: rhs_values.len(),
                basic_variables: basic_variable_ids.len(),
            });
        }

        let mut seen = HashSet::with_capacity(basic_variable_ids.len() + nonbasic_columns.len());
        let variables = basic_variable_ids.iter()
            .copied()
            .chain(nonbasic_columns.iter().map(Column::variable_id));
        for variable in variables {
            if !seen.insert(variable) {
                return Err(TableauError::DuplicateVariable(variable));
            }
        }

        for column in &nonbasic_columns {
            validate_column(column, rhs_values.len())?;
        }

        Ok(Self { objective, nonbasic_columns, rhs_values, basic_variable_ids })
    }

    /// Objective function value of the current basic solution.
    pub fn objective(&self) -> F {
        self.objective
    }

    /// Whether an improving direction without a binding constraint has been found.
    pub fn is_unbounded(&self) -> bool {
        self.objective == F::infinity()
    }

    pub(crate) fn set_unbounded(&mut self) {
        self.objective = F::infinity();
    }

    /// Number of constraints, which equals the number of basic variables.
    pub fn nr_constraints(&self) -> usize {
        self.rhs_values.len()
    }

    /// Columns of all variables that are currently nonbasic.
    pub fn nonbasic_columns(&self) -> &[Column<F>] {
        &self.nonbasic_columns
    }

    /// Current values of the basic variables, per row.
    pub fn rhs_values(&self) -> &[F] {
        &self.rhs_values
    }

    /// Basic variable of each row.
    pub fn basic_variable_ids(&self) -> &[VariableId] {
        &self.basic_variable_ids
    }

    /// Column of a nonbasic variable.
    pub fn column(&self, variable: VariableId) -> Option<&Column<F>> {
        self.nonbasic_columns.iter().find(|column| column.variable_id() == variable)
    }

    /// Whether a variable is currently basic.
    pub fn is_in_basis(&self, variable: VariableId) -> bool {
        self.basic_variable_ids.contains(&variable)
    }

    /// Value of a variable in the current basic solution.
    ///
    /// Nonbasic variables, and variables that aren't known to this tableau, have value zero.
    pub fn value_of(&self, variable: VariableId) -> F {
        self.basic_variable_ids.iter()
            .position(|&basic| basic == variable)
            .map_or_else(F::zero, |row| self.rhs_values[row])
    }

    /// Values of all basic variables, sorted by variable.
    ///
    /// All variables that are not listed have value zero.
    pub fn solution(&self) -> Vec<(VariableId, F)> {
        let mut solution = self.basic_variable_ids.iter()
            .copied()
            .zip(self.rhs_values.iter().copied())
            .collect::<Vec<_>>();
        solution.sort_unstable_by_key(|&(variable, _)| variable);
        solution
    }

    /// Whether all basic variables are nonnegative, up to the tolerance.
    pub fn is_primal_feasible(&self) -> bool {
        self.rhs_values.iter().all(|&value| value >= -F::tolerance())
    }

    /// Whether no nonbasic variable can improve the objective.
    pub fn is_optimal(&self) -> bool {
        !self.is_unbounded()
            && self.nonbasic_columns.iter().all(|column| column.objective_coefficient() <= F::zero())
    }

    /// Entering variable according to the largest reduced cost.
    ///
    /// See `LargestCoefficient`.
    pub fn select_incoming_variable(&self) -> Option<VariableId> {
        LargestCoefficient::new().select_incoming_variable(self)
    }
}

fn validate_column<F: Real>(column: &Column<F>, nr_constraints: usize) -> Result<(), TableauError> {
    let variable = column.variable_id();
    if is_sparse(column.coefficients())
        && column.coefficients().last().is_none_or(|last| last.constraint_id < nr_constraints) {
        return Ok(());
    }

    for pair in column.coefficients().windows(2) {
        if pair[0].constraint_id == pair[1].constraint_id {
            return Err(TableauError::DuplicateCoefficient { variable, constraint: pair[0].constraint_id });
        }
        if pair[0].constraint_id > pair[1].constraint_id {
            return Err(TableauError::UnsortedColumn(variable));
        }
    }
    for coefficient in column.coefficients() {
        if coefficient.constraint_id >= nr_constraints {
            return Err(TableauError::ConstraintOutOfRange { variable, constraint: coefficient.constraint_id });
        }
        if rounds_to_zero(coefficient.value) {
            return Err(TableauError::NegligibleCoefficient { variable, constraint: coefficient.constraint_id });
        }
    }

    Ok(())
}

impl<F: Real> Display for Tableau<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "objective: {}", self.objective)?;
        for (row, (basic, value)) in self.basic_variable_ids.iter().zip(&self.rhs_values).enumerate() {
            writeln!(f, "row {}: x{} = {}", row, basic, value)?;
        }
        for column in &self.nonbasic_columns {
            writeln!(f, "{}", column)?;
        }
        Ok(())
    }
}
