/*!
Polynomials of a Boolean ring.

A polynomial is a sum of distinct [monomials](Monomial), as each coefficient is either 0 or 1.
The monomials of a polynomial are stored in decreasing order, relative to the order of the ring which built the polynomial, and so the first monomial is the leading monomial.

Polynomials are only built through a [ring](super::BooleRing), as arithmetic depends on the order of the ring.
Two polynomials built by the same ring are equal exactly when their (canonical) expansions are equal.
*/

use std::collections::BTreeSet;

use super::{monomial::Monomial, RingVar};

/// A multilinear polynomial over GF(2).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    /// Distinct monomials, in decreasing order.
    pub(super) terms: Vec<Monomial>,
}

impl Polynomial {
    /// The polynomial `0`.
    pub fn zero() -> Self {
        Polynomial::default()
    }

    /// The polynomial `1`.
    pub fn one() -> Self {
        Polynomial {
            terms: vec![Monomial::one()],
        }
    }

    /// Whether the polynomial is `0`.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether the polynomial is `1`.
    pub fn is_one(&self) -> bool {
        matches!(self.terms.as_slice(), [only] if only.is_one())
    }

    /// Whether the polynomial is `0` or `1`.
    pub fn is_constant(&self) -> bool {
        self.is_zero() || self.is_one()
    }

    /// The leading monomial of the polynomial, if the polynomial is not `0`.
    pub fn lead(&self) -> Option<&Monomial> {
        self.terms.first()
    }

    /// The monomials of the polynomial, in decreasing order.
    pub fn terms(&self) -> &[Monomial] {
        &self.terms
    }

    /// The polynomial without its leading monomial.
    pub fn tail(&self) -> Polynomial {
        Polynomial {
            terms: self.terms.iter().skip(1).cloned().collect(),
        }
    }

    /// The count of monomials in the polynomial.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the polynomial has no monomials, i.e. is `0`.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The (total) degree of the polynomial, with `0` having degree `0`.
    pub fn degree(&self) -> usize {
        self.terms.iter().map(|term| term.degree()).max().unwrap_or(0)
    }

    /// Whether `1` is a monomial of the polynomial.
    pub fn has_constant_term(&self) -> bool {
        self.terms.last().is_some_and(|term| term.is_one())
    }

    /// The variables which occur in the polynomial.
    pub fn used_variables(&self) -> BTreeSet<RingVar> {
        self.terms
            .iter()
            .flat_map(|term| term.variables().iter().copied())
            .collect()
    }

    /// The value of the polynomial on a valuation of the variables, with `1` as true.
    pub fn evaluate(&self, valuation: impl Fn(RingVar) -> bool) -> bool {
        self.terms
            .iter()
            .filter(|term| term.evaluate(&valuation))
            .count()
            % 2
            == 1
    }
}

impl std::fmt::Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.terms.as_slice() {
            [] => write!(f, "0"),
            [first, rest @ ..] => {
                write!(f, "{first}")?;
                for term in rest {
                    write!(f, " + {term}")?;
                }
                Ok(())
            }
        }
    }
}
