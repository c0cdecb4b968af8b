/*!
A priority order on the atoms of a batch.

The priority of an atom is the product of the activity of the atom according to the host and the (local) activity of the atom according to the [activity database](crate::db::activity).
Atoms are ordered by decreasing priority, with atoms of equal priority ordered by increasing atom.

The position of an atom in the priority order is the ring variable of the atom during an analysis, and in each supported [monomial order](crate::ring::order) lower ring variables are greater.
So, atoms the host currently finds important, and atoms which have occurred in short learnt clauses, are eliminated first when simplifying, which tends to lead to a smaller and more useful basis.

The order depends only on the (set of) atoms and their scores, and not on the order in which atoms are given.

```rust
# use otter_gb::procedures::reorder::priority_order;
let scores = [(4, 1.0), (2, 3.0), (7, 1.0), (5, 0.5)];
assert_eq!(priority_order(scores), vec![2, 4, 7, 5]);
```
*/

use std::cmp::Ordering;

use crate::{
    analyzer::Analyzer,
    config::Activity,
    misc::log::targets::{self},
    structures::{activity::HostActivity, atom::Atom},
};

/// The comparison of two scored atoms, with the atom of greater priority first.
pub fn compare_priority(a: &(Atom, Activity), b: &(Atom, Activity)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// The atoms of the given scored atoms, in priority order.
pub fn priority_order(scored: impl IntoIterator<Item = (Atom, Activity)>) -> Vec<Atom> {
    let mut scored = scored.into_iter().collect::<Vec<_>>();
    scored.sort_unstable_by(compare_priority);
    scored.into_iter().map(|(atom, _)| atom).collect()
}

impl Analyzer {
    /// The priority order of the given (distinct) atoms, using the activity of each atom according to the host and the activity database.
    ///
    /// Atoms absent from the activity database have a (local) activity of zero.
    pub fn priority_order(
        &self,
        atoms: impl IntoIterator<Item = Atom>,
        host: &impl HostActivity,
    ) -> Vec<Atom> {
        let order = priority_order(atoms.into_iter().map(|atom| {
            let local = self.activity_db.activity_of(atom).unwrap_or(0.0);
            (atom, host.activity_of(atom) * local)
        }));

        log::debug!(target: targets::ANALYSIS, "Priority order: {order:?}");
        order
    }
}

#[cfg(test)]
mod reorder_tests {
    use super::*;

    #[test]
    fn ties_by_atom() {
        let scored = vec![(9, 1.0), (3, 1.0), (6, 1.0)];
        assert_eq!(priority_order(scored), vec![3, 6, 9]);
    }

    #[test]
    fn permutation_invariant() {
        let scored = vec![(1, 0.5), (2, 2.0), (3, 0.5), (4, 2.0), (5, 0.0)];
        let expected = priority_order(scored.clone());
        assert_eq!(expected, vec![2, 4, 1, 3, 5]);

        let mut reversed = scored.clone();
        reversed.reverse();
        assert_eq!(priority_order(reversed), expected);

        let mut rotated = scored;
        rotated.rotate_left(2);
        assert_eq!(priority_order(rotated), expected);
    }
}
