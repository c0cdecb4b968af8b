/*!
Configuration of an analyzer.

All configuration for an analyzer is contained within [Config].
Some structures clone parts of the configuration, e.g. the [activity database](crate::db::activity) and [strategies](crate::engine::GroebnerStrategy).

The defaults follow the heuristic of analysing every 50,000 conflicts, and skipping any batch with more than two atoms for each reason.

```rust
# use otter_gb::config::Config;
let mut config = Config::default();
assert_eq!(config.scheduler.conflict, Some(50_000));

assert!(config.sparsity_threshold.set(3.0));
assert!(!config.sparsity_threshold.set(-1.0));
assert_eq!(config.sparsity_threshold.value, 3.0);
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;
use dbs::ActivityDBConfig;

mod scheduler;
pub use scheduler::Scheduler;

pub mod strategy;
use strategy::StrategyConfig;

pub use crate::structures::activity::Activity;

use crate::ring::order::MonomialOrder;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of the activity database.
    pub activity_db: ActivityDBConfig,

    /// A scheduler for analysis.
    pub scheduler: Scheduler,

    /// Batches with more atoms per reason than the threshold are skipped.
    pub sparsity_threshold: ConfigOption<f64>,

    /// The monomial order of the ring.
    pub order: MonomialOrder,

    /// Configuration of the strategy used for each analysis.
    pub strategy: StrategyConfig,

    /// The maximum number of entries held by the cache manager before the cache is cleared.
    pub cache_capacity: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            activity_db: ActivityDBConfig::default(),

            scheduler: Scheduler::default(),

            sparsity_threshold: ConfigOption {
                name: "sparsity_threshold",
                min: 0.0,
                max: f64::MAX,
                value: 2.0,
            },

            order: MonomialOrder::DegLex,

            strategy: StrategyConfig::default(),

            cache_capacity: ConfigOption {
                name: "cache_capacity",
                min: 0,
                max: usize::MAX,
                value: 4096,
            },
        }
    }
}
