//! Structures which only live for the duration of a single analysis.

pub mod remap;
