//! # Strategies
//!
//! Choices made by the simplex method that don't affect its correctness on non-degenerate
//! problems, but do affect the path it takes.
pub mod pivot_rule;
