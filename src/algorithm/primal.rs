use log::debug;

use crate::algorithm::OptimizationResult;
use crate::algorithm::strategy::pivot_rule::{EnteringRule, LeavingRule};
use crate::algorithm::tableau::Tableau;
use crate::algorithm::tableau::work_buffers::WorkBuffers;
use crate::data::number_types::Real;

/// Increases the objective of the basic feasible solution to the maximum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - All constraint values need to be nonnegative (primal feasibility)
/// - Every column is sorted by constraint, without duplicates or values that round to zero
///
/// There is no iteration limit. On degenerate problems, cycling is possible with the default
/// rules.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
///
/// # Panics
///
/// If the entering rule selects a variable that is not nonbasic.
pub(crate) fn primal<F, E, L>(tableau: &mut Tableau<F>) -> OptimizationResult<F>
where
    F: Real,
    E: EnteringRule,
    L: LeavingRule,
{
    let mut rule = E::new();
    let mut work_buffers = WorkBuffers::with_capacity(tableau.nr_constraints());
    let mut nr_pivots = 0_usize;

    while let Some(incoming_variable_id) = rule.select_incoming_variable(tableau) {
        tableau.pivot_with::<L>(incoming_variable_id, Some(&mut work_buffers))
            .unwrap_or_else(|error| panic!("entering rule selected a variable that can't enter the basis: {}", error));
        nr_pivots += 1;
    }

    if tableau.is_unbounded() {
        debug!("unbounded after {} pivots", nr_pivots);
        OptimizationResult::Unbounded
    } else {
        debug!("optimal after {} pivots, objective {}", nr_pivots, tableau.objective());
        OptimizationResult::FiniteOptimum(tableau.objective())
    }
}
