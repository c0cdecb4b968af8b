/*!
A database of the (local) activity of atoms.

The activity of an atom is increased each time the atom occurs in a short learnt clause, and is never decreased by the library.
Decay, if desired, is left to the host (see [apply_to_all](ActivityDB::apply_to_all)).

Together with the activity of an atom according to the host, the local activity of an atom is used to [order](crate::procedures::reorder) the atoms of a batch.

```rust
# use otter_gb::config::dbs::ActivityDBConfig;
# use otter_gb::db::activity::ActivityDB;
let mut activity_db = ActivityDB::new(&ActivityDBConfig::default());
activity_db.grow_to(4).unwrap();

activity_db.bump_relative([2, 3].into_iter());
activity_db.bump_relative([3].into_iter());

assert_eq!(activity_db.activity_of(1), Some(1.0));
assert_eq!(activity_db.activity_of(2), Some(2.0));
assert_eq!(activity_db.activity_of(3), Some(3.0));
assert_eq!(activity_db.activity_of(4), None);
```
*/

use crate::{
    config::{dbs::ActivityDBConfig, Activity},
    misc::log::targets::{self},
    structures::atom::{Atom, ATOM_MAX},
    types::err::ActivityDBError,
};

/// The activity database.
pub struct ActivityDB {
    /// The activity of each atom, indexed by atom.
    activity: Vec<Activity>,

    /// A local configuration, typically derived from the configuration of an analyzer.
    pub config: ActivityDBConfig,
}

impl ActivityDB {
    /// A new [ActivityDB] with local configuration options derived from `config`.
    pub fn new(config: &ActivityDBConfig) -> Self {
        ActivityDB {
            activity: Vec::default(),
            config: config.clone(),
        }
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.activity.len()
    }

    /// Ensures the database contains each atom below `count`, with any fresh atom given the initial activity.
    pub fn grow_to(&mut self, count: usize) -> Result<(), ActivityDBError> {
        if count > (ATOM_MAX as usize) + 1 {
            return Err(ActivityDBError::AtomsExhausted);
        }
        if self.activity.len() < count {
            self.activity.resize(count, self.config.initial.value);
        }
        Ok(())
    }

    /// The activity of an atom, if the atom is part of the database.
    pub fn activity_of(&self, atom: Atom) -> Option<Activity> {
        self.activity.get(atom as usize).copied()
    }

    /// Bumps the activity of each atom in the given iterator by the configured bump.
    ///
    /// Atoms which are not part of the database are ignored.
    pub fn bump_relative<A: Iterator<Item = Atom>>(&mut self, atoms: A) {
        let bump = self.config.bump.value;
        for atom in atoms {
            match self.activity.get_mut(atom as usize) {
                Some(activity) => {
                    *activity += bump;
                    log::trace!(target: targets::ACTIVITY, "Bumped {atom} to {activity}");
                }
                None => {
                    log::warn!(target: targets::ACTIVITY, "Bump of unknown atom {atom}");
                }
            }
        }
    }

    /// Apply `f` to the activity of every atom, e.g. to decay activities.
    pub fn apply_to_all(&mut self, f: impl Fn(Activity) -> Activity) {
        for activity in self.activity.iter_mut() {
            *activity = f(*activity)
        }
    }

    /// The activity of every atom, indexed by atom.
    pub fn activities(&self) -> &[Activity] {
        &self.activity
    }
}
