//! # Sparse coefficient sequences
//!
//! A sparse sequence is a slice of `Coefficient`s sorted by strictly increasing constraint, in
//! which no value rounds to zero. Two such sequences can be combined with a single linear pass.
use itertools::{EitherOrBoth, Itertools};

use crate::data::linear_algebra::{Coefficient, ConstraintId};
use crate::data::number_types::{Real, rounds_to_zero};

/// Whether the constraint indices are strictly increasing.
pub fn is_sorted_by_constraint<F>(coefficients: &[Coefficient<F>]) -> bool {
    coefficients.windows(2).all(|pair| pair[0].constraint_id < pair[1].constraint_id)
}

/// Whether the sequence is sorted, has unique constraint indices and holds no value that rounds to
/// zero.
pub fn is_sparse<F: Real>(coefficients: &[Coefficient<F>]) -> bool {
    is_sorted_by_constraint(coefficients)
        && coefficients.iter().all(|coefficient| !rounds_to_zero(coefficient.value))
}

/// Position of the coefficient in a given constraint, if there is one.
///
/// Linear scan; the sequences involved are short.
pub fn find<F>(coefficients: &[Coefficient<F>], constraint_id: ConstraintId) -> Option<usize> {
    coefficients.iter().position(|coefficient| coefficient.constraint_id == constraint_id)
}

/// Multiply every value by a constant.
pub fn scale<F: Real>(coefficients: &mut [Coefficient<F>], factor: F) {
    for coefficient in coefficients {
        coefficient.value *= factor;
    }
}

/// Merge two sorted sequences into `target`.
///
/// Entries that appear in only one of the sequences are copied. For entries that appear in both,
/// `combine` is called with the constraint index and the values from `left` and `right`. Any value
/// that rounds to zero is left out of the result.
///
/// # Arguments
///
/// * `left`, `right`: Sorted by strictly increasing constraint index.
/// * `target`: Should be empty; receives the merged sequence, which is again sorted.
/// * `combine`: Value to store for a constraint present in both inputs.
pub fn merge_with<F, G>(
    left: &[Coefficient<F>],
    right: &[Coefficient<F>],
    target: &mut Vec<Coefficient<F>>,
    mut combine: G,
)
where
    F: Real,
    G: FnMut(ConstraintId, F, F) -> F,
{
    debug_assert!(is_sorted_by_constraint(left));
    debug_assert!(is_sorted_by_constraint(right));
    debug_assert!(target.is_empty());

    let merged = left.iter()
        .merge_join_by(right, |l, r| l.constraint_id.cmp(&r.constraint_id))
        .map(|pair| match pair {
            EitherOrBoth::Left(coefficient) | EitherOrBoth::Right(coefficient) => *coefficient,
            EitherOrBoth::Both(l, r) => {
                Coefficient::new(l.constraint_id, combine(l.constraint_id, l.value, r.value))
            },
        })
        .filter(|coefficient| !rounds_to_zero(coefficient.value));
    target.extend(merged);
}

/// Sum of two sorted sequences, dropping values that cancel out.
#[must_use]
pub fn merge<F: Real>(left: &[Coefficient<F>], right: &[Coefficient<F>]) -> Vec<Coefficient<F>> {
    let mut target = Vec::with_capacity(left.len() + right.len());
    merge_with(left, right, &mut target, |_, l, r| l + r);
    target
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::Coefficient;
    use crate::data::linear_algebra::sparse::{find, is_sparse, merge, merge_with, scale};

    fn sequence(data: &[(usize, f64)]) -> Vec<Coefficient<f64>> {
        data.iter().map(|&(i, v)| Coefficient::new(i, v)).collect()
    }

    #[test]
    fn merge_disjoint() {
        let left = sequence(&[(0, 1.0), (4, 2.0)]);
        let right = sequence(&[(1, 3.0), (2, -1.0), (7, 5.0)]);
        assert_eq!(
            merge(&left, &right),
            sequence(&[(0, 1.0), (1, 3.0), (2, -1.0), (4, 2.0), (7, 5.0)]),
        );
    }

    #[test]
    fn merge_overlapping() {
        let left = sequence(&[(0, 1.0), (2, 2.0), (3, 0.5)]);
        let right = sequence(&[(2, 3.0), (3, 0.25)]);
        assert_eq!(merge(&left, &right), sequence(&[(0, 1.0), (2, 5.0), (3, 0.75)]));
    }

    #[test]
    fn merge_keeps_tails() {
        let left = sequence(&[(0, 1.0)]);
        let right = sequence(&[(0, 1.0), (5, 2.0), (6, 3.0)]);
        assert_eq!(merge(&left, &right), sequence(&[(0, 2.0), (5, 2.0), (6, 3.0)]));
        assert_eq!(merge(&right, &left), sequence(&[(0, 2.0), (5, 2.0), (6, 3.0)]));
    }

    #[test]
    fn merge_drops_cancellation() {
        let left = sequence(&[(0, 1.0), (1, 2.0)]);
        let right = sequence(&[(0, -1.0 + 1e-9), (1, 1.0)]);
        let merged = merge(&left, &right);
        assert_eq!(merged, sequence(&[(1, 3.0)]));
        assert!(is_sparse(&merged));
    }

    #[test]
    fn merge_empty() {
        let empty = sequence(&[]);
        let other = sequence(&[(3, 1.0)]);
        assert_eq!(merge(&empty, &empty), empty);
        assert_eq!(merge(&empty, &other), other);
        assert_eq!(merge(&other, &empty), other);
    }

    #[test]
    fn merge_with_override() {
        let left = sequence(&[(0, -4.0), (1, 2.0)]);
        let right = sequence(&[(0, 4.0), (1, 1.0)]);
        let mut target = Vec::new();
        merge_with(&left, &right, &mut target, |row, l, r| if row == 0 { 7.0 } else { l + r });
        assert_eq!(target, sequence(&[(0, 7.0), (1, 3.0)]));
    }

    #[test]
    fn scale_and_find() {
        let mut data = sequence(&[(1, 2.0), (3, -0.5)]);
        scale(&mut data, -2.0);
        assert_eq!(data, sequence(&[(1, -4.0), (3, 1.0)]));
        assert_eq!(find(&data, 3), Some(1));
        assert_eq!(find(&data, 2), None);
    }

    #[test]
    fn sparsity() {
        assert!(is_sparse(&sequence(&[(0, 1.0), (2, 1.0)])));
        assert!(!is_sparse(&sequence(&[(2, 1.0), (0, 1.0)])));
        assert!(!is_sparse(&sequence(&[(2, 1.0), (2, 1.0)])));
        assert!(!is_sparse(&sequence(&[(0, 1e-8)])));
    }
}
