//! # A sparse tableau simplex solver
//!
//! Linear programs in tableau form are maximized with the primal simplex method. Nonbasic
//! variables are stored as sparse columns, sorted by constraint, and every pivot rewrites these
//! columns in place by merging sorted sequences.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;
