/*!
(The host representation of) an atom (aka. a 'variable').

Atoms are owned by the host solver.
Within the library an atom is an opaque identifier, though atoms are expected to be dense, as each atom is used as the index of the [activity database](crate::db::activity).

```rust
# use otter_gb::structures::atom::Atom;
let m = 97;
let atoms = (0..m).collect::<Vec<Atom>>();

assert_eq!(atoms.len(), 97);
```

# Notes
- Each atom appearing in some analysis is paired with a [ring variable](crate::ring::RingVar) for the duration of the analysis, see [VariableRemap](crate::transient::remap::VariableRemap).
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX - 1;
