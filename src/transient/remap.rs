/*!
A remap of atoms to ring variables, for the duration of an analysis.

The atoms of a batch are (typically) a small and scattered subset of the atoms of a host.
So, for each analysis the atoms of the batch are given dense indices `0..k`, as ring variables, in [priority order](crate::procedures::reorder).
The remap is dropped at the end of the analysis.

```rust
# use otter_gb::transient::remap::VariableRemap;
let remap = VariableRemap::from_priority(vec![42, 7, 19]);

assert_eq!(remap.var_of(7), Some(1));
assert_eq!(remap.atom_of(2), Some(19));
assert_eq!(remap.var_of(8), None);
assert_eq!(remap.len(), 3);
```
*/

use std::collections::HashMap;

use crate::{ring::RingVar, structures::atom::Atom};

/// A bijection between some atoms and ring variables `0..k`.
#[derive(Debug, Default)]
pub struct VariableRemap {
    /// The atom of each ring variable, indexed by ring variable.
    atoms: Vec<Atom>,

    /// The ring variable of each atom.
    vars: HashMap<Atom, RingVar>,
}

impl VariableRemap {
    /// A remap with the first atom of `atoms` as ring variable `0`, the second as ring variable `1`, etc.
    ///
    /// Repeated atoms keep their first ring variable.
    pub fn from_priority(atoms: Vec<Atom>) -> Self {
        let mut remap = VariableRemap::default();
        for atom in atoms {
            remap.insert(atom);
        }
        remap
    }

    /// Adds `atom` to the remap, if not already present, and returns the ring variable of `atom`.
    pub fn insert(&mut self, atom: Atom) -> RingVar {
        let fresh = self.atoms.len() as RingVar;
        let var = *self.vars.entry(atom).or_insert(fresh);
        if var == fresh {
            self.atoms.push(atom);
        }
        var
    }

    /// The ring variable of `atom`, if `atom` is part of the remap.
    pub fn var_of(&self, atom: Atom) -> Option<RingVar> {
        self.vars.get(&atom).copied()
    }

    /// The atom of ring variable `var`, if `var` is part of the remap.
    pub fn atom_of(&self, var: RingVar) -> Option<Atom> {
        self.atoms.get(var as usize).copied()
    }

    /// The count of atoms in the remap.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// The atoms of the remap, in order of ring variable.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }
}

#[cfg(test)]
mod remap_tests {
    use super::*;

    #[test]
    fn repeats_keep_first() {
        let remap = VariableRemap::from_priority(vec![3, 1, 3, 2]);
        assert_eq!(remap.atoms(), &[3, 1, 2]);
        assert_eq!(remap.var_of(2), Some(2));

        for (var, atom) in remap.atoms().iter().enumerate() {
            assert_eq!(remap.var_of(*atom), Some(var as RingVar));
        }
    }
}
