/*!
The Boolean polynomial ring GF(2)\[x₀, …, xₙ₋₁\] / ⟨x₀² + x₀, …, xₙ₋₁² + xₙ₋₁⟩.

A ring is built with a fixed count of variables and a [monomial order](order::MonomialOrder), and all arithmetic on [polynomials](polynomial::Polynomial) goes through the ring, as the representation of a polynomial depends on the order.

A literal is identified with a polynomial which is zero exactly when the literal is true:
- A positive literal on variable `x` is `x`.
- A negative literal on variable `x` is `x + 1`.

And so, a clause is identified with the product of its literals, which is zero exactly when some literal is true.

```rust
# use otter_gb::ring::{BooleRing, order::MonomialOrder};
let ring = BooleRing::new(2, MonomialOrder::DegLex).unwrap();

let x0_or_x1 = ring.literal_product([(0, true), (1, true)]).unwrap();
let not_x0_or_x1 = ring.literal_product([(0, false), (1, true)]).unwrap();

// x0*x1 + (x0 + 1)*x1 = x1, and so both clauses together imply x1 is true.
assert_eq!(ring.add(&x0_or_x1, &not_x0_or_x1), ring.variable(1).unwrap());

// x0 * (x0 + 1) = 0, as every tautology.
assert!(ring.literal_product([(0, true), (0, false)]).unwrap().is_zero());
```
*/

pub mod monomial;
pub mod order;
pub mod polynomial;

use std::cmp::Ordering;

use monomial::Monomial;
use order::MonomialOrder;
use polynomial::Polynomial;

use crate::types::err::RingError;

/// A variable of a ring.
pub type RingVar = u32;

/// A Boolean polynomial ring.
#[derive(Clone, Debug)]
pub struct BooleRing {
    variable_count: u32,
    order: MonomialOrder,
}

impl BooleRing {
    /// A ring with `variable_count` variables and the given order.
    pub fn new(variable_count: u32, order: MonomialOrder) -> Result<Self, RingError> {
        if !order.well_formed(variable_count) {
            return Err(RingError::MalformedBlocks);
        }

        Ok(BooleRing {
            variable_count,
            order,
        })
    }

    /// The count of variables of the ring.
    pub fn variable_count(&self) -> u32 {
        self.variable_count
    }

    /// The monomial order of the ring.
    pub fn order(&self) -> &MonomialOrder {
        &self.order
    }

    /// Extends the ring to `variable_count` variables, if the ring has fewer variables.
    pub fn grow(&mut self, variable_count: u32) {
        self.variable_count = std::cmp::max(self.variable_count, variable_count);
    }

    /// The polynomial of a single variable.
    pub fn variable(&self, var: RingVar) -> Result<Polynomial, RingError> {
        self.check_variable(var)?;
        Ok(Polynomial {
            terms: vec![Monomial::variable(var)],
        })
    }

    /// The product of literals, each given as a variable paired with a polarity.
    /// A variable with positive polarity contributes `x` and with negative polarity contributes `x + 1`.
    pub fn literal_product(
        &self,
        literals: impl IntoIterator<Item = (RingVar, bool)>,
    ) -> Result<Polynomial, RingError> {
        let mut product = Polynomial::one();
        for (var, polarity) in literals {
            let mut factor = self.variable(var)?;
            if !polarity {
                factor = self.add(&factor, &Polynomial::one());
            }
            product = self.multiply(&product, &factor);
            if product.is_zero() {
                break;
            }
        }
        Ok(product)
    }

    /// The polynomial with the given monomials, where any monomial appearing an even number of times cancels.
    pub fn from_terms(&self, mut terms: Vec<Monomial>) -> Polynomial {
        terms.sort_unstable_by(|a, b| self.order.compare(b, a));

        let mut canonical: Vec<Monomial> = Vec::with_capacity(terms.len());
        for term in terms {
            match canonical.last() {
                Some(last) if *last == term => {
                    canonical.pop();
                }
                _ => canonical.push(term),
            }
        }

        Polynomial { terms: canonical }
    }

    /// The sum of two polynomials.
    pub fn add(&self, p: &Polynomial, q: &Polynomial) -> Polynomial {
        let mut terms = Vec::with_capacity(p.len() + q.len());

        let (mut i, mut j) = (0, 0);
        while i < p.terms.len() && j < q.terms.len() {
            match self.order.compare(&p.terms[i], &q.terms[j]) {
                Ordering::Greater => {
                    terms.push(p.terms[i].clone());
                    i += 1;
                }
                Ordering::Less => {
                    terms.push(q.terms[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }
        terms.extend_from_slice(&p.terms[i..]);
        terms.extend_from_slice(&q.terms[j..]);

        Polynomial { terms }
    }

    /// The product of a polynomial and a monomial.
    pub fn multiply_monomial(&self, p: &Polynomial, m: &Monomial) -> Polynomial {
        if m.is_one() {
            return p.clone();
        }
        self.from_terms(p.terms.iter().map(|term| term.lcm(m)).collect())
    }

    /// The product of two polynomials.
    pub fn multiply(&self, p: &Polynomial, q: &Polynomial) -> Polynomial {
        let mut terms = Vec::with_capacity(p.len() * q.len());
        for p_term in &p.terms {
            for q_term in &q.terms {
                terms.push(p_term.lcm(q_term));
            }
        }
        self.from_terms(terms)
    }

    /// The polynomial obtained by fixing `var` to `value`.
    ///
    /// Equivalently, the remainder of the polynomial modulo `var` (when `value` is false) or modulo `var + 1` (when `value` is true).
    pub fn restrict(&self, p: &Polynomial, var: RingVar, value: bool) -> Polynomial {
        match value {
            false => Polynomial {
                terms: p
                    .terms
                    .iter()
                    .filter(|term| !term.contains(var))
                    .cloned()
                    .collect(),
            },

            true => self.from_terms(p.terms.iter().map(|term| term.remove(var)).collect()),
        }
    }

    /// The canonical (total) order on polynomials of the ring.
    ///
    /// Polynomials are compared monomial by monomial, from the leading monomial, with a polynomial which is a proper prefix of another being lesser.
    pub fn compare(&self, p: &Polynomial, q: &Polynomial) -> Ordering {
        for (p_term, q_term) in p.terms.iter().zip(q.terms.iter()) {
            match self.order.compare(p_term, q_term) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        p.len().cmp(&q.len())
    }

    fn check_variable(&self, var: RingVar) -> Result<(), RingError> {
        match var < self.variable_count {
            true => Ok(()),
            false => Err(RingError::VariableOutOfRange(var)),
        }
    }
}

#[cfg(test)]
mod ring_tests {
    use super::*;

    fn ring(count: u32) -> BooleRing {
        BooleRing::new(count, MonomialOrder::DegLex).unwrap()
    }

    #[test]
    fn addition_cancels() {
        let ring = ring(3);
        let x0 = ring.variable(0).unwrap();
        let x1 = ring.variable(1).unwrap();

        let sum = ring.add(&x0, &x1);
        assert_eq!(sum.len(), 2);
        assert!(ring.add(&sum, &sum).is_zero());
        assert_eq!(ring.add(&sum, &x0), x1);
    }

    #[test]
    fn multiplication_is_idempotent() {
        let ring = ring(3);
        let x0_plus_1 = ring.add(&ring.variable(0).unwrap(), &Polynomial::one());

        assert_eq!(ring.multiply(&x0_plus_1, &x0_plus_1), x0_plus_1);
        assert!(ring
            .multiply(&x0_plus_1, &ring.variable(0).unwrap())
            .is_zero());
    }

    #[test]
    fn restriction() {
        let ring = ring(3);
        // x0*x1 + x1 = (x0 + 1) * x1
        let p = ring.literal_product([(0, false), (1, true)]).unwrap();

        assert!(ring.restrict(&p, 1, false).is_zero());
        assert!(ring.restrict(&p, 0, true).is_zero());
        assert_eq!(ring.restrict(&p, 0, false), ring.variable(1).unwrap());
    }

    #[test]
    fn leading_terms() {
        let ring = ring(3);
        let p = ring.literal_product([(2, false), (1, false)]).unwrap();

        assert_eq!(p.lead(), Some(&Monomial::from_variables([1, 2])));
        assert!(p.has_constant_term());
        assert_eq!(p.to_string(), "x1*x2 + x1 + x2 + 1");
    }

    #[test]
    fn out_of_range() {
        let ring = ring(2);
        assert_eq!(ring.variable(2), Err(RingError::VariableOutOfRange(2)));
        assert!(BooleRing::new(2, MonomialOrder::BlockDegLex(vec![3])).is_err());
    }

    #[test]
    fn canonical_order() {
        let ring = ring(3);
        let x0 = ring.variable(0).unwrap();
        let x1 = ring.variable(1).unwrap();
        let x0_plus_1 = ring.add(&x0, &Polynomial::one());

        assert_eq!(ring.compare(&x0, &x1), Ordering::Greater);
        assert_eq!(ring.compare(&x0, &x0_plus_1), Ordering::Less);
        assert_eq!(ring.compare(&x0, &x0), Ordering::Equal);
        assert_eq!(ring.compare(&Polynomial::zero(), &Polynomial::one()), Ordering::Less);
    }
}
