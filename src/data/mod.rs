//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to represent a tableau in memory: the number
//! type, sparse sequences of coefficients and the columns of nonbasic variables. Algorithms
//! introduce their specific data structures in `algorithm`.

pub mod linear_algebra;
pub mod linear_program;
pub mod number_types;
