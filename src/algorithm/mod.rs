//! # Algorithms
//!
//! The primal simplex method on a sparse tableau.
use crate::algorithm::strategy::pivot_rule::{EnteringRule, FirstFound, LargestCoefficient, LeavingRule};
use crate::algorithm::tableau::Tableau;
use crate::data::number_types::Real;

mod primal;
pub mod strategy;
pub mod tableau;

/// A linear program with a feasible starting basis is either unbounded or has a finite optimum.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum OptimizationResult<F> {
    FiniteOptimum(F),
    Unbounded,
}

/// Maximize the objective of a tableau in place.
///
/// Enters the variable with the largest reduced cost and resolves ties in the minimum-ratio test
/// by taking the row found first.
///
/// # Arguments
///
/// * `tableau`: Should be primal feasible, that is, all right-hand side values are nonnegative.
///
/// # Return value
///
/// The optimal objective value, or `Unbounded`. In the latter case, the tableau's objective is
/// `+infinity`. Otherwise, the solution can be read from the tableau.
pub fn maximize<F: Real>(tableau: &mut Tableau<F>) -> OptimizationResult<F> {
    primal::primal::<F, LargestCoefficient, FirstFound>(tableau)
}

/// Maximize the objective of a tableau in place, using specific pivot rules.
///
/// See `maximize`.
pub fn maximize_with<F, E, L>(tableau: &mut Tableau<F>) -> OptimizationResult<F>
where
    F: Real,
    E: EnteringRule,
    L: LeavingRule,
{
    primal::primal::<F, E, L>(tableau)
}
