/*!
Analysis of a batch of reason clauses.

Takes a batch of (recent) reason clauses from a host and returns clauses derived from the reduced Gröbner basis of the encodings of the batch.

For the method, see: [analyze](Analyzer::analyze).

# Overview

1. The atoms of the batch are collected, and the batch is [skipped](crate::procedures::gate) if sparse.
2. The atoms are placed in [priority order](crate::procedures::reorder), and [remapped](crate::transient::remap) to ring variables.
3. Each reason is [encoded](crate::procedures::codec::encode), and the (non-zero) encodings are noted as originals.
4. A basis is [constructed](crate::procedures::construction) from the encodings.
5. Clauses are [extracted](crate::procedures::extraction) from the basis.

# Example

```rust
# use otter_gb::analyzer::Analyzer;
# use otter_gb::config::Config;
# use otter_gb::reports::AnalysisResult;
# use otter_gb::structures::literal::{CLiteral, Literal};
let mut analyzer = Analyzer::new(3, Config::default()).unwrap();
let host_activity = vec![1.0; 3];

let reasons = vec![
    vec![CLiteral::new(1, true), CLiteral::new(2, true)],
    vec![CLiteral::new(1, false), CLiteral::new(2, true)],
];

match analyzer.analyze(&reasons, &host_activity) {
    Ok(AnalysisResult::Other(clauses)) => assert!(clauses.contains(&vec![CLiteral::new(2, true)])),
    _ => panic!("Unexpected result"),
}
```
*/

use std::collections::{BTreeSet, HashSet};

use crate::{
    analyzer::Analyzer,
    misc::log::targets::{self},
    procedures::{codec, construction::ConstructionOk},
    reports::AnalysisResult,
    structures::{activity::HostActivity, atom::Atom, clause::Clause},
    transient::remap::VariableRemap,
    types::err::{self},
};

impl Analyzer {
    /// For details on analysis see the [analysis](crate::procedures::analysis) procedure.
    pub fn analyze<C: Clause>(
        &mut self,
        reasons: &[C],
        host: &impl HostActivity,
    ) -> Result<AnalysisResult, err::ErrorKind> {
        let start = std::time::Instant::now();
        let result = self.analyze_batch(reasons, host);
        self.counters.time += start.elapsed();

        if let Ok(result) = &result {
            self.counters.note_result(result);
        }
        result
    }

    /// Analysis, on the given conflict and start counts, if the clock of the analyzer is open.
    ///
    /// If the clock is closed, no analysis takes place and [Skipped](AnalysisResult::Skipped) is returned.
    pub fn analyze_on_clock<C: Clause>(
        &mut self,
        conflicts: usize,
        starts: usize,
        reasons: &[C],
        host: &impl HostActivity,
    ) -> Result<AnalysisResult, err::ErrorKind> {
        match self.check_clock(conflicts, starts) {
            true => self.analyze(reasons, host),
            false => Ok(AnalysisResult::Skipped),
        }
    }

    fn analyze_batch<C: Clause>(
        &mut self,
        reasons: &[C],
        host: &impl HostActivity,
    ) -> Result<AnalysisResult, err::ErrorKind> {
        if reasons.is_empty() {
            return Err(err::AnalysisError::EmptyBatch.into());
        }

        let atoms = reasons
            .iter()
            .flat_map(|reason| reason.atoms())
            .collect::<BTreeSet<Atom>>();
        log::info!(target: targets::ANALYSIS, "Analysis of {} reasons over {} atoms", reasons.len(), atoms.len());

        if let Some(&last) = atoms.last() {
            if (last as usize) >= self.atom_count() {
                return Err(err::AnalysisError::AtomOutOfRange(last).into());
            }
        }

        if self.should_skip(reasons.len(), atoms.len()) {
            return Ok(AnalysisResult::Skipped);
        }

        if atoms.len() > self.ring.variable_count() as usize {
            return Err(err::AnalysisError::RingExhausted.into());
        }

        let remap = VariableRemap::from_priority(self.priority_order(atoms, host));

        let mut originals = HashSet::with_capacity(reasons.len());
        let mut encodings = Vec::with_capacity(reasons.len());
        for reason in reasons {
            let p = codec::encode(&self.ring, &remap, reason)?;
            if p.is_zero() {
                log::trace!(target: targets::ANALYSIS, "Tautology: {}", reason.as_string());
                continue;
            }
            originals.insert(p.clone());
            encodings.push(p);
        }

        match self.construct_basis(encodings)? {
            ConstructionOk::Contradiction => Ok(AnalysisResult::Contradiction(Vec::default())),

            ConstructionOk::Redundant => Ok(AnalysisResult::Redundant),

            ConstructionOk::Basis(basis) => Ok(self.extract_clauses(&basis, &originals, &remap)),
        }
    }
}
