//! Error types used in the library.
//!
//! - Steady-state outcomes of an analysis (a skipped batch, a contradiction, etc.) are never errors, see [AnalysisResult](crate::reports::AnalysisResult).
//! - Errors record violations of the contract between a host and an analyzer, e.g. an empty batch, or an atom beyond the range of the analyzer.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    ActivityDB(ActivityDBError),
    Ring(RingError),
    Strategy(StrategyError),
}

/// Noted errors during analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// An analysis was requested on a batch without any reasons.
    EmptyBatch,

    /// Some atom in the batch is beyond the atoms known to the analyzer.
    AtomOutOfRange(Atom),

    /// The batch contains more atoms than the ring has variables.
    RingExhausted,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Errors in the activity database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActivityDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<ActivityDBError> for ErrorKind {
    fn from(e: ActivityDBError) -> Self {
        ErrorKind::ActivityDB(e)
    }
}

/// Errors when building or using a ring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RingError {
    /// A ring variable at or beyond the variable count of the ring.
    VariableOutOfRange(u32),

    /// A block order whose boundaries are not strictly increasing, or exceed the variable count.
    MalformedBlocks,
}

impl From<RingError> for ErrorKind {
    fn from(e: RingError) -> Self {
        ErrorKind::Ring(e)
    }
}

/// Errors from a basis-construction strategy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StrategyError {
    /// The zero polynomial was offered as a generator.
    ZeroGenerator,
}

impl From<StrategyError> for ErrorKind {
    fn from(e: StrategyError) -> Self {
        ErrorKind::Strategy(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis(AnalysisError::EmptyBatch) => write!(f, "Analysis of an empty batch"),
            Self::Analysis(AnalysisError::AtomOutOfRange(atom)) => {
                write!(f, "Atom {atom} is out of range")
            }
            Self::Analysis(AnalysisError::RingExhausted) => {
                write!(f, "More atoms in the batch than ring variables")
            }
            Self::ActivityDB(ActivityDBError::AtomsExhausted) => write!(f, "Atoms exhausted"),
            Self::Ring(RingError::VariableOutOfRange(var)) => {
                write!(f, "Ring variable {var} is out of range")
            }
            Self::Ring(RingError::MalformedBlocks) => write!(f, "Malformed block order"),
            Self::Strategy(StrategyError::ZeroGenerator) => write!(f, "Zero offered as a generator"),
        }
    }
}

impl std::error::Error for ErrorKind {}
