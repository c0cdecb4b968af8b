/*!
Reports, for a host, on the result of an analysis.
*/

use crate::structures::clause::{CClause, Clause};

/// The result of an analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisResult {
    /// The batch was not analysed, as the batch was too sparse (or the clock was closed).
    Skipped,

    /// The batch is inconsistent.
    ///
    /// Any clauses learnt before the inconsistency was found are included, though typically there are none.
    Contradiction(Vec<CClause>),

    /// The batch carries no information, e.g. each reason is a tautology.
    Redundant,

    /// The clauses learnt from the batch, which may be empty.
    Other(Vec<CClause>),
}

impl AnalysisResult {
    /// The clauses learnt by the analysis.
    pub fn clauses(&self) -> &[CClause] {
        match self {
            Self::Contradiction(clauses) | Self::Other(clauses) => clauses,
            Self::Skipped | Self::Redundant => &[],
        }
    }
}

impl std::fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skipped => write!(f, "Skipped"),
            Self::Contradiction(_) => write!(f, "Contradiction"),
            Self::Redundant => write!(f, "Redundant"),
            Self::Other(clauses) => {
                write!(f, "Learnt {} clauses:", clauses.len())?;
                for clause in clauses {
                    write!(f, " [{}]", clause.as_dimacs(false))?;
                }
                Ok(())
            }
        }
    }
}
