/*!
The analyzer --- which holds everything which persists across analyses.

An [Analyzer] owns:
- The [ring](crate::ring::BooleRing) within which batches are encoded, with a variable for each atom of the host.
- A [cache manager](crate::engine::CacheManager), for implications of polynomials.
- The [activity database](crate::db::activity), for the local activity of atoms.
- [Counters], for a record of the analyses made.

Each analysis borrows the analyzer mutably, and everything else used during an analysis (the remap of atoms, the strategy, etc.) is dropped at the end of the analysis.

Atoms are expected to be the atoms of the host, and so the analyzer should [grow](Analyzer::grow_to) whenever the host adds an atom.

# Example
```rust
# use otter_gb::analyzer::Analyzer;
# use otter_gb::config::Config;
# use otter_gb::reports::AnalysisResult;
# use otter_gb::structures::literal::{CLiteral, Literal};
let mut analyzer = Analyzer::new(2, Config::default()).unwrap();
let host_activity = vec![1.0, 1.0];

let p = CLiteral::new(1, true);
let reasons = vec![vec![p], vec![p.negate()]];

assert!(matches!(
    analyzer.analyze(&reasons, &host_activity),
    Ok(AnalysisResult::Contradiction(_))
));

analyzer.grow_to(5).unwrap();
assert_eq!(analyzer.atom_count(), 5);
assert_eq!(analyzer.counters.contradictions, 1);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::activity::ActivityDB,
    engine::CacheManager,
    ring::BooleRing,
    types::err::{self},
};

/// The analyzer.
pub struct Analyzer {
    /// The configuration of the analyzer.
    pub config: Config,

    /// The ring within which batches are encoded.
    pub ring: BooleRing,

    /// A cache of implications, kept across analyses.
    pub cache: CacheManager,

    /// The local activity of each atom.
    pub activity_db: ActivityDB,

    /// Counters over all analyses.
    pub counters: Counters,
}

impl Analyzer {
    /// An analyzer for atoms `0..atom_count`, with the given configuration.
    pub fn new(atom_count: usize, config: Config) -> Result<Self, err::ErrorKind> {
        let variable_count = ring_size(atom_count)?;
        let ring = BooleRing::new(variable_count, config.order.clone())?;

        let mut activity_db = ActivityDB::new(&config.activity_db);
        activity_db.grow_to(atom_count)?;

        Ok(Analyzer {
            ring,
            cache: CacheManager::new(config.cache_capacity.value),
            activity_db,
            counters: Counters::default(),
            config,
        })
    }

    /// A count of the atoms known to the analyzer.
    pub fn atom_count(&self) -> usize {
        self.activity_db.count()
    }

    /// Ensures the analyzer knows each atom below `atom_count`.
    ///
    /// The local activity of any fresh atom is the configured initial activity, and any cached results remain valid.
    pub fn grow_to(&mut self, atom_count: usize) -> Result<(), err::ErrorKind> {
        let variable_count = ring_size(atom_count)?;
        self.activity_db.grow_to(atom_count)?;
        if variable_count > self.ring.variable_count() {
            self.ring.grow(variable_count);
        }
        Ok(())
    }
}

/// The count of ring variables for `atom_count` atoms.
fn ring_size(atom_count: usize) -> Result<u32, err::ErrorKind> {
    u32::try_from(atom_count).map_err(|_| err::ErrorKind::from(err::ActivityDBError::AtomsExhausted))
}

#[cfg(test)]
mod analyzer_tests {
    use super::*;
    use crate::ring::order::MonomialOrder;

    #[test]
    fn growth() {
        let mut analyzer = Analyzer::new(0, Config::default()).unwrap();
        assert_eq!(analyzer.atom_count(), 0);
        assert_eq!(analyzer.ring.variable_count(), 0);

        analyzer.grow_to(12).unwrap();
        assert_eq!(analyzer.atom_count(), 12);
        assert_eq!(analyzer.ring.variable_count(), 12);

        analyzer.grow_to(4).unwrap();
        assert_eq!(analyzer.atom_count(), 12);
    }

    #[test]
    fn malformed_blocks() {
        let config = Config {
            order: MonomialOrder::BlockDegLex(vec![3, 2]),
            ..Default::default()
        };
        assert_eq!(
            Analyzer::new(4, config).err(),
            Some(err::ErrorKind::Ring(err::RingError::MalformedBlocks))
        );
    }
}
