//! Procedures of an analysis.
//!
//! For the most part these are methods accessed via an [analyzer](crate::analyzer::Analyzer), and primarily placed here for documentation.
//! The [codec] is an exception, as encoding and decoding only depend on a ring and a remap.

pub mod analysis;
pub mod codec;
pub mod construction;
pub mod extraction;
pub mod gate;
pub mod reorder;
