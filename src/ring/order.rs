/*!
Monomial orders.

In each order, variables with a lower index are greater.
So, `x0 > x1 > x2 > …`, and [remapping](crate::transient::remap) the most relevant atoms of a batch to the lowest ring variables makes those atoms the first to be eliminated when simplifying.

- [Lex](MonomialOrder::Lex) --- the lexicographic order.
- [DegLex](MonomialOrder::DegLex) --- the degree lexicographic order, comparing by degree and then lexicographically.
- [BlockDegLex](MonomialOrder::BlockDegLex) --- the ring is split into blocks of variables, and monomials are compared block by block using the degree lexicographic order.

```rust
# use otter_gb::ring::{monomial::Monomial, order::MonomialOrder};
# use std::cmp::Ordering;
let x0 = Monomial::variable(0);
let x1x2 = Monomial::from_variables([1, 2]);

assert_eq!(MonomialOrder::Lex.compare(&x0, &x1x2), Ordering::Greater);
assert_eq!(MonomialOrder::DegLex.compare(&x0, &x1x2), Ordering::Less);
```
*/

use std::cmp::Ordering;

use super::{monomial::Monomial, RingVar};

/// Supported monomial orders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MonomialOrder {
    /// The lexicographic order.
    Lex,

    /// The degree lexicographic order.
    #[default]
    DegLex,

    /// A block order, with the degree lexicographic order used within each block.
    ///
    /// The boundaries are the first variables of each block, excluding the first block, and are strictly increasing.
    /// For example, `[2, 5]` splits the variables into `[0, 2)`, `[2, 5)`, and `[5, …)`.
    BlockDegLex(Vec<RingVar>),
}

impl MonomialOrder {
    /// Compares two monomials.
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            Self::Lex => lex(a.variables(), b.variables()),

            Self::DegLex => deg_lex(a.variables(), b.variables()),

            Self::BlockDegLex(boundaries) => {
                let (mut a_rest, mut b_rest) = (a.variables(), b.variables());
                for boundary in boundaries {
                    let a_split = a_rest.partition_point(|var| var < boundary);
                    let b_split = b_rest.partition_point(|var| var < boundary);

                    match deg_lex(&a_rest[..a_split], &b_rest[..b_split]) {
                        Ordering::Equal => {}
                        unequal => return unequal,
                    }

                    a_rest = &a_rest[a_split..];
                    b_rest = &b_rest[b_split..];
                }
                deg_lex(a_rest, b_rest)
            }
        }
    }

    /// The first variable of the last block of the order.
    pub fn last_block_start(&self) -> RingVar {
        match self {
            Self::Lex | Self::DegLex => 0,
            Self::BlockDegLex(boundaries) => boundaries.last().copied().unwrap_or(0),
        }
    }

    /// Whether the order is well-formed for a ring with `variable_count` variables.
    pub fn well_formed(&self, variable_count: u32) -> bool {
        match self {
            Self::Lex | Self::DegLex => true,
            Self::BlockDegLex(boundaries) => {
                boundaries.windows(2).all(|pair| pair[0] < pair[1])
                    && boundaries
                        .iter()
                        .all(|boundary| 0 < *boundary && *boundary <= variable_count)
            }
        }
    }
}

/// The lexicographic comparison of two strictly increasing sequences of variables.
///
/// The first point of difference is a variable present in one monomial only, and the monomial containing the (lower) variable is greater.
fn lex(a: &[RingVar], b: &[RingVar]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        if x != y {
            return y.cmp(x);
        }
    }
    a.len().cmp(&b.len())
}

fn deg_lex(a: &[RingVar], b: &[RingVar]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| lex(a, b))
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex => write!(f, "lp"),
            Self::DegLex => write!(f, "dlex"),
            Self::BlockDegLex(boundaries) => write!(f, "block_dlex{boundaries:?}"),
        }
    }
}
