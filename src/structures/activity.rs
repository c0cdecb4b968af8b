/*!
Activity, as a measure of the relevance of an atom.

Two activities are relevant to an analysis:
- The activity of an atom according to the host, typically the score used by the branching heuristic of the host (e.g. VSIDS).
- The local activity of an atom, maintained by the [activity database](crate::db::activity) of an analyzer.

Host activity is read through the [HostActivity] trait, which is implemented for anything which dereferences to a slice of activities and for closures wrapped in an [ActivityFn].

```rust
# use otter_gb::structures::activity::{ActivityFn, HostActivity};
let scores = vec![0.5, 2.0, 1.0];
assert_eq!(scores.activity_of(1), 2.0);
assert_eq!(scores.activity_of(7), 0.0);

let constant = ActivityFn(|_atom| 3.0);
assert_eq!(constant.activity_of(7), 3.0);
```
*/

use crate::structures::atom::Atom;

/// Representation used for recording the activity of an atom.
pub type Activity = f64;

/// Read access to the activity of atoms, as determined by some host.
pub trait HostActivity {
    /// The activity of `atom`.
    ///
    /// Atoms unknown to the host are expected to have an activity of zero.
    fn activity_of(&self, atom: Atom) -> Activity;
}

impl<T: std::ops::Deref<Target = [Activity]>> HostActivity for T {
    fn activity_of(&self, atom: Atom) -> Activity {
        self.get(atom as usize).copied().unwrap_or(0.0)
    }
}

/// A wrapper to use a closure as a source of host activity.
pub struct ActivityFn<F: Fn(Atom) -> Activity>(pub F);

impl<F: Fn(Atom) -> Activity> HostActivity for ActivityFn<F> {
    fn activity_of(&self, atom: Atom) -> Activity {
        (self.0)(atom)
    }
}
