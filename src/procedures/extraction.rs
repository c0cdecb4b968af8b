/*!
Extraction of learnt clauses from a reduced basis.

For the method, see: [extract_clauses](Analyzer::extract_clauses).

The reduced basis is scanned once, in increasing order:
- `1` marks a contradiction, and the scan stops.
- `0` is skipped.
- Any polynomial which is the encoding of some reason of the batch is skipped, as the host already has the clause.
- Any other polynomial is [decoded](crate::procedures::codec::decode), and if decoding succeeds the clause is learnt.
  Polynomials which do not decode are dropped.

Each learnt clause with at most `bump_length` literals [bumps](crate::db::activity::ActivityDB::bump_relative) the local activity of each of its atoms.
This is the only way in which the local activity of an atom changes.
*/

use std::collections::HashSet;

use crate::{
    analyzer::Analyzer,
    misc::log::targets::{self},
    procedures::codec,
    reports::AnalysisResult,
    ring::polynomial::Polynomial,
    structures::clause::{CClause, Clause},
    transient::remap::VariableRemap,
};

impl Analyzer {
    /// For details on extraction see the [extraction](crate::procedures::extraction) procedure.
    ///
    /// `originals` is the set of encodings of the reasons of the batch.
    pub fn extract_clauses(
        &mut self,
        basis: &[Polynomial],
        originals: &HashSet<Polynomial>,
        remap: &VariableRemap,
    ) -> AnalysisResult {
        let mut clauses: Vec<CClause> = Vec::default();
        let mut contradiction = false;

        for p in basis {
            if p.is_one() {
                contradiction = true;
                break;
            }

            if p.is_zero() || originals.contains(p) {
                continue;
            }

            match codec::decode(&self.ring, remap, p) {
                Some(clause) => {
                    log::info!(target: targets::EXTRACTION, "Learnt: {}", clause.as_dimacs(false));
                    clauses.push(clause);
                }

                None => {
                    log::debug!(target: targets::EXTRACTION, "Dropped: {p}");
                    self.counters.dropped_polynomials += 1;
                }
            }
        }

        let bump_length = self.activity_db.config.bump_length.value;
        for clause in &clauses {
            if clause.size() <= bump_length {
                self.activity_db.bump_relative(clause.atoms());
            }
        }

        self.counters.learnt_clauses += clauses.len();

        match contradiction {
            true => AnalysisResult::Contradiction(clauses),
            false => AnalysisResult::Other(clauses),
        }
    }
}

#[cfg(test)]
mod extraction_tests {
    use super::*;
    use crate::{
        config::Config,
        structures::literal::{CLiteral, Literal},
    };

    #[test]
    fn originals_and_equivalences_are_not_learnt() {
        let mut analyzer = Analyzer::new(8, Config::default()).unwrap();
        let ring = analyzer.ring.clone();
        let remap = VariableRemap::from_priority(vec![6, 2, 7]);

        let x0 = ring.variable(0).unwrap();
        let x1 = ring.variable(1).unwrap();
        let x2 = ring.variable(2).unwrap();
        let x0_plus_x1 = ring.add(&x0, &x1);
        let x1x2 = ring.multiply(&x1, &x2);

        let originals = HashSet::from([x1x2.clone()]);
        let basis = vec![x2.clone(), x0_plus_x1, x1x2];

        let result = analyzer.extract_clauses(&basis, &originals, &remap);
        assert_eq!(result, AnalysisResult::Other(vec![vec![CLiteral::new(7, true)]]));

        assert_eq!(analyzer.counters.dropped_polynomials, 1);
        assert_eq!(analyzer.counters.learnt_clauses, 1);
        assert_eq!(analyzer.activity_db.activity_of(7), Some(2.0));
        assert_eq!(analyzer.activity_db.activity_of(6), Some(1.0));
    }

    #[test]
    fn long_clauses_do_not_bump() {
        let mut analyzer = Analyzer::new(3, Config::default()).unwrap();
        let ring = analyzer.ring.clone();
        let remap = VariableRemap::from_priority(vec![0, 1, 2]);

        let p = ring
            .literal_product([(0, true), (1, false), (2, true)])
            .unwrap();

        let result = analyzer.extract_clauses(&[p], &HashSet::default(), &remap);
        assert_eq!(result.clauses().len(), 1);
        assert_eq!(analyzer.activity_db.activities(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn one_is_a_contradiction() {
        let mut analyzer = Analyzer::new(1, Config::default()).unwrap();
        let remap = VariableRemap::from_priority(vec![0]);

        let result = analyzer.extract_clauses(&[Polynomial::one()], &HashSet::default(), &remap);
        assert_eq!(result, AnalysisResult::Contradiction(vec![]));
    }
}
