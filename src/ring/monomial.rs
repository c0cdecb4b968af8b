/*!
Monomials of a Boolean ring.

As `x² = x` in a Boolean ring, a monomial is determined by the set of variables occurring in the monomial.
So, a monomial is represented as a strictly increasing vector of [ring variables](RingVar), with the empty vector representing `1`.

```rust
# use otter_gb::ring::monomial::Monomial;
let a = Monomial::from_variables([2, 0]);
let b = Monomial::from_variables([0, 1]);

assert_eq!(a.variables(), &[0, 2]);
assert_eq!(a.lcm(&b).variables(), &[0, 1, 2]);
assert!(Monomial::variable(0).divides(&a));
assert!(!b.divides(&a));
```

Monomials are not ordered by themselves, as the order of monomials depends on the [order](crate::ring::order::MonomialOrder) of a ring.
*/

use super::RingVar;

/// A product of distinct ring variables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Monomial {
    variables: Vec<RingVar>,
}

impl Monomial {
    /// The monomial `1`.
    pub fn one() -> Self {
        Monomial::default()
    }

    /// The monomial of a single variable.
    pub fn variable(var: RingVar) -> Self {
        Monomial {
            variables: vec![var],
        }
    }

    /// The monomial of the product of the given variables.
    /// Repeated variables are idempotent.
    pub fn from_variables(variables: impl IntoIterator<Item = RingVar>) -> Self {
        let mut variables = variables.into_iter().collect::<Vec<_>>();
        variables.sort_unstable();
        variables.dedup();
        Monomial { variables }
    }

    /// The variables of the monomial, in increasing order.
    pub fn variables(&self) -> &[RingVar] {
        &self.variables
    }

    /// The degree of the monomial.
    pub fn degree(&self) -> usize {
        self.variables.len()
    }

    /// Whether the monomial is `1`.
    pub fn is_one(&self) -> bool {
        self.variables.is_empty()
    }

    /// Whether `var` occurs in the monomial.
    pub fn contains(&self, var: RingVar) -> bool {
        self.variables.binary_search(&var).is_ok()
    }

    /// Whether the monomial divides `other`, i.e. every variable of the monomial occurs in `other`.
    pub fn divides(&self, other: &Monomial) -> bool {
        if self.degree() > other.degree() {
            return false;
        }

        let mut others = other.variables.iter();
        'variable_loop: for var in &self.variables {
            for other_var in others.by_ref() {
                match other_var.cmp(var) {
                    std::cmp::Ordering::Less => continue,
                    std::cmp::Ordering::Equal => continue 'variable_loop,
                    std::cmp::Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// The product of two monomials, which is also their least common multiple.
    pub fn lcm(&self, other: &Monomial) -> Monomial {
        let mut variables = Vec::with_capacity(self.degree() + other.degree());

        let (mut i, mut j) = (0, 0);
        while i < self.variables.len() && j < other.variables.len() {
            match self.variables[i].cmp(&other.variables[j]) {
                std::cmp::Ordering::Less => {
                    variables.push(self.variables[i]);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    variables.push(other.variables[j]);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    variables.push(self.variables[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        variables.extend_from_slice(&self.variables[i..]);
        variables.extend_from_slice(&other.variables[j..]);

        Monomial { variables }
    }

    /// The monomial of variables in the monomial but not in `other`.
    ///
    /// If `other` divides the monomial this is the quotient of the monomial by `other`.
    pub fn without(&self, other: &Monomial) -> Monomial {
        Monomial {
            variables: self
                .variables
                .iter()
                .copied()
                .filter(|var| !other.contains(*var))
                .collect(),
        }
    }

    /// The value of the monomial on a valuation of the variables, with `1` as true.
    pub fn evaluate(&self, valuation: impl Fn(RingVar) -> bool) -> bool {
        self.variables.iter().all(|var| valuation(*var))
    }

    /// The monomial with `var` removed, if present.
    pub fn remove(&self, var: RingVar) -> Monomial {
        Monomial {
            variables: self.variables.iter().copied().filter(|v| *v != var).collect(),
        }
    }
}

impl std::fmt::Display for Monomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.variables.as_slice() {
            [] => write!(f, "1"),
            [first, rest @ ..] => {
                write!(f, "x{first}")?;
                for var in rest {
                    write!(f, "*x{var}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod monomial_tests {
    use super::*;

    #[test]
    fn division() {
        let x0x2 = Monomial::from_variables([0, 2]);
        let x0x1x2 = Monomial::from_variables([0, 1, 2]);

        assert!(x0x2.divides(&x0x1x2));
        assert!(!x0x1x2.divides(&x0x2));
        assert!(Monomial::one().divides(&x0x2));
        assert!(!Monomial::variable(3).divides(&x0x1x2));
        assert_eq!(x0x1x2.without(&x0x2), Monomial::variable(1));
    }

    #[test]
    fn idempotent_variables() {
        let m = Monomial::from_variables([4, 1, 4, 1]);
        assert_eq!(m.variables(), &[1, 4]);
        assert_eq!(m.lcm(&m), m);
    }

    #[test]
    fn display() {
        assert_eq!(Monomial::one().to_string(), "1");
        assert_eq!(Monomial::from_variables([3, 1]).to_string(), "x1*x3");
    }
}
