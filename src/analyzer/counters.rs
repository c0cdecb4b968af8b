use std::time::Duration;

use crate::reports::AnalysisResult;

/// Counts for various things which count, over all analyses of an analyzer.
#[derive(Clone, Debug)]
pub struct Counters {
    /// A count of analyses which returned a result.
    pub analyses: usize,

    /// A count of batches skipped as sparse.
    pub skipped: usize,

    /// A count of batches found to be inconsistent.
    pub contradictions: usize,

    /// A count of batches found to be redundant.
    pub redundant: usize,

    /// A count of all clauses learnt.
    pub learnt_clauses: usize,

    /// A count of basis polynomials which did not decode to a clause.
    pub dropped_polynomials: usize,

    /// The total time spent on analysis.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            analyses: 0,
            skipped: 0,
            contradictions: 0,
            redundant: 0,

            learnt_clauses: 0,
            dropped_polynomials: 0,

            time: Duration::from_secs(0),
        }
    }
}

impl Counters {
    /// Notes the result of an analysis.
    pub fn note_result(&mut self, result: &AnalysisResult) {
        self.analyses += 1;
        match result {
            AnalysisResult::Skipped => self.skipped += 1,
            AnalysisResult::Contradiction(_) => self.contradictions += 1,
            AnalysisResult::Redundant => self.redundant += 1,
            AnalysisResult::Other(_) => {}
        }
    }
}
