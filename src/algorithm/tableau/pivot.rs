//! # Pivoting
//!
//! A pivot exchanges a nonbasic variable with a basic variable. The leaving variable is found with
//! the minimum-ratio test, after which the right-hand side and all nonbasic columns are rewritten
//! in the new basis. Columns are updated by merging sorted sparse sequences, so the cost of a pivot
//! depends on the number of nonzeros involved rather than on the number of constraints.
use std::mem;

use log::{debug, error, trace};

use crate::algorithm::strategy::pivot_rule::{FirstFound, LeavingRule};
use crate::algorithm::tableau::Tableau;
use crate::algorithm::tableau::work_buffers::WorkBuffers;
use crate::data::linear_algebra::ConstraintId;
use crate::data::linear_algebra::sparse::{find, merge_with, scale};
use crate::data::linear_program::{Column, VariableId};
use crate::data::number_types::Real;
use crate::error::PivotError;

/// Result of the minimum-ratio test.
///
/// Only lives for the duration of a single pivot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PivotSelection<F> {
    /// Basic variable that leaves the basis.
    pub outgoing_variable_id: VariableId,
    /// Row of the pivot.
    pub active_constraint_id: ConstraintId,
    /// The pivot element: coefficient of the entering variable in the active row. Positive.
    pub incoming_variable_active_coefficient: F,
}

/// What a single pivot did.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PivotOutcome {
    /// The basis changed.
    Pivoted {
        /// Variable that left the basis and now occupies the entering variable's column.
        outgoing: VariableId,
        /// Row in which the entering variable became basic.
        active_constraint: ConstraintId,
    },
    /// The entering variable can increase without bound. The tableau's objective is now
    /// `+infinity` and it is otherwise unchanged.
    Unbounded,
}

impl<F: Real> Tableau<F> {
    /// Perform a single pivot, bringing a nonbasic variable into the basis.
    ///
    /// Exact ties in the minimum-ratio test go to the row found first.
    ///
    /// # Arguments
    ///
    /// * `incoming_variable_id`: Nonbasic variable that should enter the basis.
    /// * `work_buffers`: Scratch space; temporary buffers are created if none are provided.
    ///
    /// # Errors
    ///
    /// If the variable is not nonbasic. The tableau is not modified in that case.
    pub fn pivot(
        &mut self,
        incoming_variable_id: VariableId,
        work_buffers: Option<&mut WorkBuffers<F>>,
    ) -> Result<PivotOutcome, PivotError> {
        self.pivot_with::<FirstFound>(incoming_variable_id, work_buffers)
    }

    /// Perform a single pivot, with a specific rule for ties in the minimum-ratio test.
    ///
    /// See `pivot`.
    pub fn pivot_with<L: LeavingRule>(
        &mut self,
        incoming_variable_id: VariableId,
        work_buffers: Option<&mut WorkBuffers<F>>,
    ) -> Result<PivotOutcome, PivotError> {
        let Some(incoming_index) = self.nonbasic_columns.iter()
            .position(|column| column.variable_id() == incoming_variable_id) else {
            error!("incoming variable {} not found in nonbasic variables", incoming_variable_id);
            return Err(PivotError::VariableNotFound(incoming_variable_id));
        };

        let Some(selection) = self.select_pivot::<L>(&self.nonbasic_columns[incoming_index]) else {
            debug!("variable {} can increase without bound", incoming_variable_id);
            self.set_unbounded();
            return Ok(PivotOutcome::Unbounded);
        };

        let mut temporary = WorkBuffers::new();
        let work_buffers = work_buffers.unwrap_or(&mut temporary);
        let was_feasible = cfg!(debug_assertions) && self.is_primal_feasible();

        let Tableau { objective, nonbasic_columns, rhs_values, basic_variable_ids } = self;
        let incoming_column = &nonbasic_columns[incoming_index];
        *objective += incoming_column.objective_coefficient()
            * rhs_values[selection.active_constraint_id]
            / selection.incoming_variable_active_coefficient;
        fix_right_hand_side(&selection, incoming_column, basic_variable_ids, rhs_values);
        fix_nonbasic_columns(&selection, incoming_index, nonbasic_columns, work_buffers);

        debug!(
            "pivot: x{} enters, x{} leaves in row {} (pivot element {}), objective {}",
            incoming_variable_id,
            selection.outgoing_variable_id,
            selection.active_constraint_id,
            selection.incoming_variable_active_coefficient,
            self.objective,
        );
        debug_assert!(work_buffers.is_empty());
        debug_assert!(self.nonbasic_columns.iter().all(Column::is_sparse));
        debug_assert!(!was_feasible || self.is_primal_feasible(), "pivot lost primal feasibility");

        Ok(PivotOutcome::Pivoted {
            outgoing: selection.outgoing_variable_id,
            active_constraint: selection.active_constraint_id,
        })
    }

    /// Minimum-ratio test: find the basic variable that limits the increase of the entering
    /// variable first.
    ///
    /// Only rows in which the entering column has a positive coefficient are considered. Ratios are
    /// compared by cross multiplication, so no division happens. A row whose right-hand side is exactly
    /// zero has the smallest possible ratio and is taken directly. Right-hand sides that are merely
    /// small are compared like any other, as taking them early can make a later row infeasible.
    ///
    /// # Return value
    ///
    /// `None` if no row has a positive coefficient, which means that the problem is unbounded.
    pub fn select_pivot<L: LeavingRule>(
        &self,
        incoming_variable_column: &Column<F>,
    ) -> Option<PivotSelection<F>> {
        let mut selection: Option<PivotSelection<F>> = None;
        for coefficient in incoming_variable_column.coefficients() {
            let (row, value) = (coefficient.constraint_id, coefficient.value);
            if value <= F::zero() {
                continue;
            }

            let candidate = PivotSelection {
                outgoing_variable_id: self.basic_variable_ids[row],
                active_constraint_id: row,
                incoming_variable_active_coefficient: value,
            };
            let numerator = self.rhs_values[row];

            if numerator == F::zero() {
                let replace = match selection {
                    Some(current) if self.rhs_values[current.active_constraint_id] == F::zero() => {
                        L::prefer_on_tie(candidate.outgoing_variable_id, current.outgoing_variable_id)
                    },
                    _ => true,
                };
                if replace {
                    trace!("degenerate pivot row {}", row);
                    selection = Some(candidate);
                }
                if L::STOP_AT_ZERO_RATIO {
                    break;
                }
                continue;
            }

            match selection {
                None => selection = Some(candidate),
                Some(current) => {
                    // numerator / value < current_numerator / current_denominator
                    let current_numerator = self.rhs_values[current.active_constraint_id];
                    let current_denominator = current.incoming_variable_active_coefficient;
                    let left = numerator * current_denominator;
                    let right = current_numerator * value;
                    if left < right
                        || (left == right
                            && L::prefer_on_tie(candidate.outgoing_variable_id, current.outgoing_variable_id)) {
                        selection = Some(candidate);
                    }
                },
            }
        }

        selection
    }
}

/// Normalize the pivot row and eliminate the entering variable from the right-hand side of all
/// other rows.
///
/// The entering variable becomes the basic variable of the active row.
fn fix_right_hand_side<F: Real>(
    selection: &PivotSelection<F>,
    incoming_variable_column: &Column<F>,
    basic_variable_ids: &mut [VariableId],
    rhs_values: &mut [F],
) {
    let active_row = selection.active_constraint_id;
    let pivot = selection.incoming_variable_active_coefficient;

    basic_variable_ids[active_row] = incoming_variable_column.variable_id();
    let active_rhs_value = rhs_values[active_row];
    for coefficient in incoming_variable_column.coefficients() {
        if coefficient.constraint_id == active_row {
            rhs_values[active_row] /= pivot;
        } else {
            rhs_values[coefficient.constraint_id] -= active_rhs_value * coefficient.value / pivot;
        }
    }
}

/// Rewrite all nonbasic columns in the new basis.
///
/// The entering variable's column is reused for the leaving variable, which is a unit column in
/// the active row in the old basis. After that, every column with a coefficient in the active row,
/// including the reused one, gets a multiple of the (old) entering column added to it.
///
/// # Arguments
///
/// * `selection`: Result of the minimum-ratio test.
/// * `incoming_index`: Position of the entering variable in `nonbasic_columns`.
/// * `nonbasic_columns`: All nonbasic columns, including the entering one.
/// * `work_buffers`: Empty, and empty again when this function returns.
fn fix_nonbasic_columns<F: Real>(
    selection: &PivotSelection<F>,
    incoming_index: usize,
    nonbasic_columns: &mut [Column<F>],
    work_buffers: &mut WorkBuffers<F>,
) {
    let active_row = selection.active_constraint_id;
    let pivot = selection.incoming_variable_active_coefficient;

    let incoming_column = &mut nonbasic_columns[incoming_index];
    let incoming_objective_coefficient = incoming_column.objective_coefficient();
    work_buffers.incoming_variable_coefficients.extend_from_slice(incoming_column.coefficients());
    incoming_column.replace_with_unit(selection.outgoing_variable_id, active_row);

    for column in nonbasic_columns.iter_mut() {
        // A column without support in the active row is not affected by the pivot
        let Some(position) = find(column.coefficients(), active_row) else {
            continue;
        };
        let active_value = column.coefficients()[position].value;

        work_buffers.scale_buffer.extend_from_slice(&work_buffers.incoming_variable_coefficients);
        scale(&mut work_buffers.scale_buffer, -active_value / pivot);
        merge_with(
            &work_buffers.scale_buffer,
            column.coefficients(),
            &mut work_buffers.merge_buffer,
            // The active row is set directly, rather than relying on the sum to come out right
            |row, scaled, current| if row == active_row { active_value / pivot } else { scaled + current },
        );
        mem::swap(column.coefficients_mut(), &mut work_buffers.merge_buffer);
        work_buffers.merge_buffer.clear();
        work_buffers.scale_buffer.clear();

        *column.objective_coefficient_mut() -= active_value * incoming_objective_coefficient / pivot;
    }

    work_buffers.incoming_variable_coefficients.clear();
}
