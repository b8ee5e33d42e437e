//! # Scratch space for pivots
//!
//! Updating the nonbasic columns needs a few temporary sequences. Keeping them between pivots
//! avoids allocating for every updated column.
use crate::data::linear_algebra::Coefficient;

/// Reusable sequences of coefficients.
///
/// Owned by whoever drives the pivots. The buffers hold no state between pivots: all three are
/// empty after each pivot completes.
#[derive(Clone, Debug)]
pub struct WorkBuffers<F> {
    /// Copy of the entering column, taken before its storage is reused.
    pub(crate) incoming_variable_coefficients: Vec<Coefficient<F>>,
    /// Receives the merge of a scaled entering column and the column being updated.
    pub(crate) merge_buffer: Vec<Coefficient<F>>,
    /// Scaled copy of the entering column.
    pub(crate) scale_buffer: Vec<Coefficient<F>>,
}

impl<F> WorkBuffers<F> {
    /// Create empty buffers; nothing is allocated until the first pivot.
    pub fn new() -> Self {
        Self {
            incoming_variable_coefficients: Vec::new(),
            merge_buffer: Vec::new(),
            scale_buffer: Vec::new(),
        }
    }

    /// Create buffers that can hold columns with up to `nr_constraints` entries without
    /// reallocating.
    pub fn with_capacity(nr_constraints: usize) -> Self {
        Self {
            incoming_variable_coefficients: Vec::with_capacity(nr_constraints),
            merge_buffer: Vec::with_capacity(nr_constraints),
            scale_buffer: Vec::with_capacity(nr_constraints),
        }
    }

    /// Whether all buffers are empty.
    pub fn is_empty(&self) -> bool {
        self.incoming_variable_coefficients.is_empty()
            && self.merge_buffer.is_empty()
            && self.scale_buffer.is_empty()
    }
}

impl<F> Default for WorkBuffers<F> {
    fn default() -> Self {
        Self::new()
    }
}
