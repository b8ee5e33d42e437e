//! # Tests that require a look inside the crate.
//!
//! One module per problem. Each module builds the initial tableau of its problem and checks the
//! tableau after every pivot, not only the final result.
use std::collections::HashMap;

use approx::assert_abs_diff_eq;

use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::{Column, VariableId};


fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Check the invariants that hold after every pivot.
///
/// # Arguments
///
/// * `original_costs`: Objective coefficient of each variable in the original problem.
fn assert_invariants(tableau: &Tableau<f64>, original_costs: &HashMap<VariableId, f64>) {
    assert!(tableau.is_primal_feasible(), "not primal feasible:\n{}", tableau);
    assert!(tableau.nonbasic_columns().iter().all(Column::is_sparse), "not sparse:\n{}", tableau);

    let objective = tableau.solution().into_iter()
        .map(|(variable, value)| original_costs.get(&variable).copied().unwrap_or(0.0) * value)
        .sum::<f64>();
    assert_abs_diff_eq!(objective, tableau.objective(), epsilon = 1e-9);
}
