/*!
Gates, which determine whether an analysis takes place.

Analysis is expensive, and so two gates are used to limit analysis:
- A clock, which opens once every `N` conflicts, as determined by the [scheduler](crate::config::Scheduler) of an analyzer.
  Specifically, the clock opens when `(conflicts + 1) mod N = 0`.
- A sparsity check, which skips any batch with more atoms per reason than some threshold.
  As the ideal of a sparse batch tends to be large, and its basis tends to contain few clauses, such a batch is judged to not be worth the cost of analysis.

Both gates are pure, and the [analyzer](crate::analyzer::Analyzer) methods are thin wrappers around [should_run] and [should_skip].

```rust
# use otter_gb::procedures::gate::{should_run, should_skip};
# use otter_gb::config::Scheduler;
let scheduler = Scheduler { conflict: Some(5) };
assert!(should_run(&scheduler, 4, 0));
assert!(!should_run(&scheduler, 5, 0));

assert!(should_skip(3, 10, 2.0));
assert!(!should_skip(5, 10, 2.0));
```
*/

use crate::{analyzer::Analyzer, config::Scheduler, misc::log::targets::{self}};

/// Whether the clock of `scheduler` opens on the given count of conflicts.
///
/// The count of starts (i.e. restarts) is not used.
pub fn should_run(scheduler: &Scheduler, conflicts: usize, _starts: usize) -> bool {
    match scheduler.conflict {
        None | Some(0) => false,
        Some(period) => conflicts.wrapping_add(1) % (period as usize) == 0,
    }
}

/// Whether a batch with `reason_count` reasons over `atom_count` atoms is too sparse to analyse.
///
/// A batch without reasons is always skipped.
pub fn should_skip(reason_count: usize, atom_count: usize, threshold: f64) -> bool {
    if reason_count == 0 {
        return true;
    }
    (atom_count as f64) / (reason_count as f64) > threshold
}

impl Analyzer {
    /// Whether an analysis should take place on the given count of conflicts, as determined by the scheduler of the analyzer.
    pub fn check_clock(&self, conflicts: usize, starts: usize) -> bool {
        let open = should_run(&self.config.scheduler, conflicts, starts);
        if open {
            log::info!(target: targets::GATE, "Clock open at {conflicts} conflicts, {starts} starts");
        }
        open
    }

    /// Whether a batch with `reason_count` reasons over `atom_count` atoms should be skipped, as determined by the sparsity threshold of the analyzer.
    pub fn should_skip(&self, reason_count: usize, atom_count: usize) -> bool {
        let skip = should_skip(reason_count, atom_count, self.config.sparsity_threshold.value);
        if skip {
            log::info!(target: targets::GATE, "Skip of {atom_count} atoms over {reason_count} reasons");
        }
        skip
    }
}

#[cfg(test)]
mod gate_tests {
    use super::*;

    #[test]
    fn default_period() {
        let scheduler = Scheduler::default();
        assert!(!should_run(&scheduler, 0, 0));
        assert!(should_run(&scheduler, 49_999, 0));
        assert!(!should_run(&scheduler, 50_000, 3));
        assert!(should_run(&scheduler, 99_999, 7));
    }

    #[test]
    fn disabled_clock() {
        assert!(!should_run(&Scheduler { conflict: None }, 49_999, 0));
        assert!(!should_run(&Scheduler { conflict: Some(0) }, 0, 0));
    }

    #[test]
    fn ratio_at_threshold_is_kept() {
        assert!(!should_skip(3, 6, 2.0));
        assert!(should_skip(3, 7, 2.0));
        assert!(should_skip(0, 0, 2.0));
    }
}
