/*!
Conversion between clauses and polynomials.

# Encoding

Ring value `0` is read as boolean `true`, and ring value `1` as boolean `false`.
So, a literal of positive polarity is encoded as the ring variable `x` of its atom, and a literal of negative polarity as `x + 1`.
A clause is encoded as the product of the encodings of its literals, which is zero exactly on the valuations satisfying the clause.

For example, the clause `a ∨ ¬b`, with `a` as `x0` and `b` as `x1`, is encoded as `x0 * (x1 + 1) = x0*x1 + x0`.

- Repeated literals have no effect, as `x * x = x`.
- A tautology is encoded as `0`, as `x * (x + 1) = 0`.
- The empty clause is encoded as `1`.

# Decoding

A polynomial `p` is the encoding of a clause exactly when for each variable `v` of `p` either `p` vanishes when `v` is fixed to `0` (and `v` occurs as a positive literal), or `p` vanishes when `v` is fixed to `1` (and `v` occurs as a negative literal).
Any other polynomial is not the encoding of a clause, and decoding fails.

```rust
# use otter_gb::procedures::codec::{decode, encode};
# use otter_gb::ring::{BooleRing, order::MonomialOrder};
# use otter_gb::structures::literal::{CLiteral, Literal};
# use otter_gb::transient::remap::VariableRemap;
let ring = BooleRing::new(4, MonomialOrder::DegLex).unwrap();
let remap = VariableRemap::from_priority(vec![12, 3]);

let clause = vec![CLiteral::new(3, true), CLiteral::new(12, false)];
let p = encode(&ring, &remap, &clause).unwrap();
assert_eq!(p.to_string(), "x0*x1 + x1");

let decoded = decode(&ring, &remap, &p).unwrap();
assert_eq!(decoded, vec![CLiteral::new(12, false), CLiteral::new(3, true)]);
```
*/

use crate::{
    misc::log::targets::{self},
    ring::{polynomial::Polynomial, BooleRing},
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    transient::remap::VariableRemap,
    types::err::{self},
};

/// The polynomial encoding of `clause`, with atoms read as ring variables through `remap`.
pub fn encode(
    ring: &BooleRing,
    remap: &VariableRemap,
    clause: &impl Clause,
) -> Result<Polynomial, err::ErrorKind> {
    let mut literals = Vec::with_capacity(clause.size());
    for literal in clause.literals() {
        match remap.var_of(literal.atom()) {
            Some(var) => literals.push((var, literal.polarity())),
            None => return Err(err::AnalysisError::AtomOutOfRange(literal.atom()).into()),
        }
    }

    Ok(ring.literal_product(literals)?)
}

/// The clause encoded by `p`, if `p` is the encoding of some clause, with ring variables read as atoms through `remap`.
///
/// Literals of the clause are ordered by ring variable.
/// The polynomial `1` decodes to the empty clause, and `0` does not decode.
pub fn decode(ring: &BooleRing, remap: &VariableRemap, p: &Polynomial) -> Option<CClause> {
    if p.is_zero() {
        log::debug!(target: targets::CODEC, "Decode of 0");
        return None;
    }

    let mut clause = CClause::default();
    for var in p.used_variables() {
        let polarity = if ring.restrict(p, var, false).is_zero() {
            true
        } else if ring.restrict(p, var, true).is_zero() {
            false
        } else {
            log::debug!(target: targets::CODEC, "No clause for {p}, at x{var}");
            return None;
        };

        let Some(atom) = remap.atom_of(var) else {
            log::debug!(target: targets::CODEC, "No atom for x{var} of {p}");
            return None;
        };

        clause.push(CLiteral::new(atom, polarity));
    }

    Some(clause)
}
