//! A library for periodic algebraic analysis of the reason clauses of a conflict-driven clause-learning solver.
//!
//! otter_gb takes a batch of recent reason clauses from a host solver, translates each clause into a polynomial over GF(2), builds a reduced Gröbner basis of the ideal generated by those polynomials, and returns any basis element which is (the encoding of) a clause as a learnt clause.
//!
//! Learnt clauses are implied by the batch, and are often short: units and binary clauses which resolution alone would only find through several steps.
//!
//! # Orientation
//!
//! The library is designed around the core structure of an [analyzer](crate::analyzer).
//!
//! An analyzer is built with a count of atoms and a configuration, and persists across many analyses, holding:
//! - A [Boolean ring](crate::ring), with a variable for each atom.
//! - A [cache](crate::engine::CacheManager) of implications of polynomials.
//! - A [database](crate::db::activity) of the local activity of each atom.
//!
//! A host calls [analyze](crate::analyzer::Analyzer::analyze) with a batch of reasons and read access to the activity of each atom according to the host, and receives an [AnalysisResult](crate::reports::AnalysisResult).
//! Analysis is expensive, and so a host is expected to only analyse every so often, e.g. by [checking the clock](crate::analyzer::Analyzer::check_clock) of an analyzer at each conflict.
//!
//! Useful starting points, then, may be:
//! - The high-level [analysis procedure](crate::procedures::analysis) to inspect the steps of an analysis.
//! - The [codec](crate::procedures::codec) to see how clauses are read as polynomials (and polynomials as clauses).
//! - The [engine](crate::engine) to see how a reduced Gröbner basis is constructed.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Learn a unit clause from two reasons, on the 50,000th conflict.
//!
//! ```rust
//! # use otter_gb::analyzer::Analyzer;
//! # use otter_gb::config::Config;
//! # use otter_gb::reports::AnalysisResult;
//! use otter_gb::structures::literal::{CLiteral, Literal};
//!
//! let mut analyzer = Analyzer::new(4, Config::default()).unwrap();
//! let host_activity = vec![0.5, 1.0, 2.0, 0.0];
//!
//! let reasons = vec![
//!     vec![CLiteral::new(1, true), CLiteral::new(2, true)],
//!     vec![CLiteral::new(1, false), CLiteral::new(2, true)],
//! ];
//!
//! let conflicts = 49_999;
//! if analyzer.check_clock(conflicts, 0) {
//!     match analyzer.analyze(&reasons, &host_activity) {
//!         Ok(AnalysisResult::Other(clauses)) => {
//!             assert_eq!(clauses, vec![vec![CLiteral::new(2, true)]]);
//!         }
//!         _ => panic!("Unexpected analysis"),
//!     }
//! }
//!
//! assert_eq!(analyzer.activity_db.activity_of(2), Some(2.0));
//! ```
//!
//! + Find an inconsistency, with host activity given by a closure.
//!
//! ```rust
//! # use otter_gb::analyzer::Analyzer;
//! # use otter_gb::config::Config;
//! # use otter_gb::reports::AnalysisResult;
//! # use otter_gb::structures::activity::ActivityFn;
//! # use otter_gb::structures::literal::{CLiteral, Literal};
//! let mut analyzer = Analyzer::new(3, Config::default()).unwrap();
//!
//! let reasons = vec![
//!     vec![CLiteral::new(0, true), CLiteral::new(1, true)],
//!     vec![CLiteral::new(0, false), CLiteral::new(1, true)],
//!     vec![CLiteral::new(0, true), CLiteral::new(1, false)],
//!     vec![CLiteral::new(0, false), CLiteral::new(1, false)],
//! ];
//!
//! let result = analyzer.analyze(&reasons, &ActivityFn(|atom| atom as f64));
//! assert!(matches!(result, Ok(AnalysisResult::Contradiction(_))));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Polynomials of a basis which are not clauses can be found with `RUST_LOG=extraction=debug …` or,
//! - Matrices of the linear algebra step of completion can be found with `RUST_LOG=engine=trace …`, provided matrix drawing is configured.
//!

#![allow(mixed_script_confusables)]
#![allow(clippy::single_match)]
#![allow(clippy::derivable_impls)]

pub mod analyzer;
pub mod procedures;
pub mod reports;

pub mod config;
pub mod structures;
pub mod types;

pub mod db;
pub mod engine;
pub mod ring;

pub mod misc;
pub mod transient;
