//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
//!
//! An `EnteringRule` picks the nonbasic variable that enters the basis. Once it has been chosen,
//! the minimum-ratio test decides which basic variable leaves; a `LeavingRule` only decides what
//! happens when that test has more than one winner.
use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::VariableId;
use crate::data::number_types::Real;

/// Deciding which variable enters the basis.
///
/// During the simplex method, one needs to decide how to move from basic solution to basic
/// solution. The entering rule describes that behavior.
pub trait EnteringRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal simplex method.
    ///
    /// # Return value
    ///
    /// The variable that should enter the basis, or `None` if no nonbasic variable can improve the
    /// objective. Also `None` once the tableau has been found unbounded.
    fn select_incoming_variable<F: Real>(&mut self, tableau: &Tableau<F>) -> Option<VariableId>;
}

/// Pivot on the column with the largest reduced cost.
///
/// Ties are broken by taking the smallest variable id.
pub struct LargestCoefficient;
impl EnteringRule for LargestCoefficient {
    fn new() -> Self {
        Self
    }

    fn select_incoming_variable<F: Real>(&mut self, tableau: &Tableau<F>) -> Option<VariableId> {
        if tableau.is_unbounded() {
            return None;
        }

        let mut best: Option<(VariableId, F)> = None;
        for column in tableau.nonbasic_columns() {
            let (variable, cost) = (column.variable_id(), column.objective_coefficient());
            match best.as_mut() {
                Some((best_variable, best_cost)) => {
                    if cost > *best_cost || (cost == *best_cost && variable < *best_variable) {
                        *best_variable = variable;
                        *best_cost = cost;
                    }
                },
                None => best = Some((variable, cost)),
            }
        }

        best
            .filter(|&(_, cost)| cost > F::zero())
            .map(|(variable, _)| variable)
    }
}

/// Simply pivot on the first column, in storage order, which has a positive reduced cost.
pub struct FirstProfitable;
impl EnteringRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_incoming_variable<F: Real>(&mut self, tableau: &Tableau<F>) -> Option<VariableId> {
        if tableau.is_unbounded() {
            return None;
        }

        tableau.nonbasic_columns().iter()
            .find(|column| column.objective_coefficient() > F::zero())
            .map(|column| column.variable_id())
    }
}

/// Deciding between rows that tie in the minimum-ratio test.
pub trait LeavingRule {
    /// Whether the search ends at the first row with a zero ratio.
    ///
    /// No ratio can be smaller, so this only matters when several rows have a zero ratio.
    const STOP_AT_ZERO_RATIO: bool;

    /// Whether a row should replace the current choice when their ratios are exactly equal.
    ///
    /// # Arguments
    ///
    /// * `candidate`: Basic variable of the row being considered.
    /// * `incumbent`: Basic variable of the row currently chosen.
    fn prefer_on_tie(candidate: VariableId, incumbent: VariableId) -> bool;
}

/// Keep the row that was found first.
///
/// Rows are scanned in the order of the entering column, so by increasing constraint index.
pub struct FirstFound;
impl LeavingRule for FirstFound {
    const STOP_AT_ZERO_RATIO: bool = true;

    fn prefer_on_tie(_candidate: VariableId, _incumbent: VariableId) -> bool {
        false
    }
}

/// Let the basic variable with the smallest id leave, as in Bland's rule.
pub struct SmallestVariableId;
impl LeavingRule for SmallestVariableId {
    const STOP_AT_ZERO_RATIO: bool = false;

    fn prefer_on_tie(candidate: VariableId, incumbent: VariableId) -> bool {
        candidate < incumbent
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::strategy::pivot_rule::{EnteringRule, FirstProfitable, LargestCoefficient};
    use crate::algorithm::tableau::Tableau;
    use crate::data::linear_program::Column;

    fn tableau(costs: &[(usize, f64)]) -> Tableau<f64> {
        let columns = costs.iter()
            .map(|&(variable, cost)| Column::from_dense(variable, &[1.0], cost))
            .collect();
        Tableau::new(0.0, columns, vec![1.0], vec![100]).unwrap()
    }

    #[test]
    fn largest_coefficient() {
        let mut rule = LargestCoefficient::new();
        assert_eq!(rule.select_incoming_variable(&tableau(&[(1, 6.0), (2, 14.0), (3, 13.0)])), Some(2));
        assert_eq!(rule.select_incoming_variable(&tableau(&[(1, -1.0), (2, 0.5)])), Some(2));
    }

    #[test]
    fn largest_coefficient_tie() {
        let mut rule = LargestCoefficient::new();
        assert_eq!(rule.select_incoming_variable(&tableau(&[(7, 3.0), (2, 3.0), (5, 3.0)])), Some(2));
    }

    #[test]
    fn largest_coefficient_optimal() {
        let mut rule = LargestCoefficient::new();
        assert_eq!(rule.select_incoming_variable(&tableau(&[(1, 0.0), (2, -3.0)])), None);
        assert_eq!(rule.select_incoming_variable(&tableau(&[])), None);
    }

    #[test]
    fn first_profitable() {
        let mut rule = FirstProfitable::new();
        assert_eq!(rule.select_incoming_variable(&tableau(&[(4, -1.0), (3, 1.0), (2, 5.0)])), Some(3));
        assert_eq!(rule.select_incoming_variable(&tableau(&[(4, -1.0), (3, 0.0)])), None);
    }

    #[test]
    fn unbounded_is_terminal() {
        let mut unbounded = tableau(&[(1, 6.0)]);
        unbounded.set_unbounded();
        assert_eq!(LargestCoefficient::new().select_incoming_variable(&unbounded), None);
        assert_eq!(FirstProfitable::new().select_incoming_variable(&unbounded), None);
    }
}
