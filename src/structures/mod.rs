//! Key structures, such as literals and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Batches
//!
//! A batch is a (non-empty) sequence of [clauses](clause), each the reason for some conflict observed by a host solver.
//! Batches are borrowed for the duration of an analysis and never modified.
//!
//! ## Polynomials
//!
//! Polynomials are owned by the [ring](crate::ring), see the module for details.

pub mod activity;
pub mod atom;
pub mod clause;
pub mod literal;
