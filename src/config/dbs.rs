//! Configuration of databases, typically derived from the configuration of an analyzer.

use super::{Activity, ConfigOption};

/// Configuration for the activity database.
#[derive(Clone, Debug)]
pub struct ActivityDBConfig {
    /// The activity of an atom when first added to the database.
    pub initial: ConfigOption<Activity>,

    /// The activity each atom in a short learnt clause is bumped by.
    pub bump: ConfigOption<Activity>,

    /// Learnt clauses of at most this many literals bump the activity of their atoms.
    pub bump_length: ConfigOption<usize>,
}

impl Default for ActivityDBConfig {
    fn default() -> Self {
        ActivityDBConfig {
            initial: ConfigOption {
                name: "initial_activity",
                min: 0.0,
                max: Activity::MAX,
                value: 1.0,
            },

            bump: ConfigOption {
                name: "activity_bump",
                min: 0.0,
                max: Activity::MAX,
                value: 1.0,
            },

            bump_length: ConfigOption {
                name: "bump_length",
                min: 0,
                max: usize::MAX,
                value: 2,
            },
        }
    }
}
