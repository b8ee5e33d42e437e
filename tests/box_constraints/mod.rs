//! Upper bounds as rows, with one coupling constraint.
//!
//! maximize x1 + 2 x2 + 3 x3 + 4 x4
//! subject to
//!     x_i <= 3 for i = 1, ..., 4
//!     x1 + x2 + x3 + x4 <= 10
//!
//! The slack of row `i` is variable `5 + i`. The optimum fills the most valuable variables first.
use approx::assert_relative_eq;

use sparse_tableau::algorithm::{OptimizationResult, maximize, maximize_with};
use sparse_tableau::algorithm::strategy::pivot_rule::{FirstFound, FirstProfitable, LargestCoefficient, SmallestVariableId};
use sparse_tableau::algorithm::tableau::Tableau;
use sparse_tableau::algorithm::tableau::pivot::PivotOutcome;
use sparse_tableau::algorithm::tableau::work_buffers::WorkBuffers;
use sparse_tableau::data::linear_program::Column;
use sparse_tableau::error::{PivotError, TableauError};

fn tableau() -> Tableau<f64> {
    let columns = (0..4)
        .map(|i| {
            let mut values = [0.0; 5];
            values[i] = 1.0;
            values[4] = 1.0;
            Column::from_dense(i + 1, &values, (i + 1) as f64)
        })
        .collect();

    Tableau::new(0.0, columns, vec![3.0, 3.0, 3.0, 3.0, 10.0], vec![5, 6, 7, 8, 9]).unwrap()
}

fn assert_optimal(tableau: &Tableau<f64>) {
    assert_relative_eq!(tableau.objective(), 28.0, max_relative = 1e-12);
    let expected = [(1, 1.0), (2, 3.0), (3, 3.0), (4, 3.0), (5, 2.0)];
    let solution = tableau.solution();
    assert_eq!(solution.len(), expected.len());
    for ((variable, value), (expected_variable, expected_value)) in solution.into_iter().zip(expected) {
        assert_eq!(variable, expected_variable);
        assert_relative_eq!(value, expected_value, max_relative = 1e-12);
    }
    assert!(tableau.is_optimal());
    assert!(tableau.nonbasic_columns().iter().all(Column::is_sparse));
}

#[test]
fn default_rules() {
    let mut tableau = tableau();
    assert!(matches!(maximize(&mut tableau), OptimizationResult::FiniteOptimum(_)));
    assert_optimal(&tableau);
}

#[test]
fn all_rule_combinations() {
    let mut tableaus = [tableau(), tableau(), tableau(), tableau()];
    maximize_with::<_, LargestCoefficient, FirstFound>(&mut tableaus[0]);
    maximize_with::<_, LargestCoefficient, SmallestVariableId>(&mut tableaus[1]);
    maximize_with::<_, FirstProfitable, FirstFound>(&mut tableaus[2]);
    maximize_with::<_, FirstProfitable, SmallestVariableId>(&mut tableaus[3]);

    for tableau in &tableaus {
        assert_optimal(tableau);
    }
}

#[test]
fn shared_work_buffers() {
    let mut work_buffers = WorkBuffers::with_capacity(5);
    let mut tableau = tableau();
    while let Some(incoming) = tableau.select_incoming_variable() {
        let outcome = tableau.pivot(incoming, Some(&mut work_buffers));
        assert!(matches!(outcome, Ok(PivotOutcome::Pivoted { .. })));
        assert!(work_buffers.is_empty());
        assert!(tableau.is_primal_feasible());
    }
    assert_optimal(&tableau);
}

#[test]
fn misuse() {
    let mut tableau = tableau();
    assert_eq!(tableau.pivot(9, None), Err(PivotError::VariableNotFound(9)));

    let result = Tableau::new(0.0, vec![Column::from_dense(1, &[1.0], 1.0)], vec![1.0, 2.0], vec![3]);
    assert_eq!(result, Err(TableauError::DimensionMismatch { rhs_values: 2, basic_variables: 1 }));
}
