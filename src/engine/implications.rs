/*!
Implications of a single polynomial.

The 'full implications' of a polynomial `p` are a small collection of polynomials in the ideal generated by `p` which are easier to work with than `p`:
- `1`, if `p` has no zero.
- `x` or `x + 1`, for each variable `x` with the same value on every zero of `p`.
- `x + y` or `x + y + 1`, for each pair of variables `x`, `y` without a fixed value and with equal (respectively different) values on every zero of `p`.
- `p`, itself.

As ideals of a Boolean ring are radical, a polynomial which vanishes on every zero of `p` is in the ideal generated by `p`.

Implications are found by enumerating the valuations of the variables of `p`, and so are only computed for polynomials with few variables.
The implications of any other polynomial are the polynomial itself.
*/

use crate::ring::{polynomial::Polynomial, BooleRing, RingVar};

/// The full implications of `p`, for polynomials with at most `limit` variables.
pub fn full_implications(ring: &BooleRing, p: &Polynomial, limit: usize) -> Vec<Polynomial> {
    if p.is_constant() {
        return vec![p.clone()];
    }

    let variables = p.used_variables().into_iter().collect::<Vec<RingVar>>();
    if variables.len() > limit || variables.len() >= u32::BITS as usize {
        return vec![p.clone()];
    }

    let position = |var: RingVar| variables.binary_search(&var).unwrap_or(0);
    let zeros = (0..(1_u32 << variables.len()))
        .filter(|bits| !p.evaluate(|var| (bits >> position(var)) & 1 == 1))
        .collect::<Vec<u32>>();

    let Some(first_zero) = zeros.first().copied() else {
        return vec![Polynomial::one()];
    };

    let bit = |zero: u32, index: usize| (zero >> index) & 1 == 1;
    let mut implications = Vec::default();
    let mut fixed = vec![false; variables.len()];

    for (index, var) in variables.iter().enumerate() {
        let value = bit(first_zero, index);
        if zeros.iter().all(|zero| bit(*zero, index) == value) {
            fixed[index] = true;
            // The variable occurs in p, and so is a variable of the ring.
            if let Ok(x) = ring.variable(*var) {
                implications.push(match value {
                    false => x,
                    true => ring.add(&x, &Polynomial::one()),
                });
            }
        }
    }

    for i in 0..variables.len() {
        for j in (i + 1)..variables.len() {
            if fixed[i] || fixed[j] {
                continue;
            }

            let same = bit(first_zero, i) == bit(first_zero, j);
            if zeros
                .iter()
                .all(|zero| (bit(*zero, i) == bit(*zero, j)) == same)
            {
                if let (Ok(x), Ok(y)) = (ring.variable(variables[i]), ring.variable(variables[j])) {
                    let sum = ring.add(&x, &y);
                    implications.push(match same {
                        true => sum,
                        false => ring.add(&sum, &Polynomial::one()),
                    });
                }
            }
        }
    }

    implications.push(p.clone());
    implications
}

#[cfg(test)]
mod implication_tests {
    use super::*;
    use crate::ring::order::MonomialOrder;

    fn ring() -> BooleRing {
        BooleRing::new(4, MonomialOrder::DegLex).unwrap()
    }

    #[test]
    fn implied_literal() {
        let ring = ring();
        // x0 * x1 + (x0 + 1) * x1 = x1
        let p = ring.add(
            &ring.literal_product([(0, true), (1, true)]).unwrap(),
            &ring.literal_product([(0, false), (1, true)]).unwrap(),
        );
        assert_eq!(full_implications(&ring, &p, 8), vec![p.clone(), p]);
    }

    #[test]
    fn no_zero() {
        let ring = ring();
        // x2 + (x2 + 1) = 1
        let one = ring.add(
            &ring.literal_product([(2, true)]).unwrap(),
            &ring.literal_product([(2, false)]).unwrap(),
        );
        assert!(one.is_one());
        assert_eq!(full_implications(&ring, &one, 8), vec![Polynomial::one()]);

        // x0 * x1 + 1 is zero only when both are 1.
        let p = ring.add(&ring.literal_product([(0, true), (1, true)]).unwrap(), &Polynomial::one());
        let implications = full_implications(&ring, &p, 8);
        let x0_plus_1 = ring.add(&ring.variable(0).unwrap(), &Polynomial::one());
        let x1_plus_1 = ring.add(&ring.variable(1).unwrap(), &Polynomial::one());
        assert_eq!(implications, vec![x0_plus_1, x1_plus_1, p]);
    }

    #[test]
    fn equivalence() {
        let ring = ring();
        // x0 + x1 + 1 is zero exactly when x0 and x1 differ.
        let sum = ring.add(&ring.variable(0).unwrap(), &ring.variable(1).unwrap());
        let p = ring.add(&sum, &Polynomial::one());

        let implications = full_implications(&ring, &p, 8);
        assert_eq!(implications, vec![p.clone(), p]);
    }

    #[test]
    fn beyond_the_limit() {
        let ring = ring();
        let p = ring.literal_product([(0, true), (1, true), (2, true)]).unwrap();
        assert_eq!(full_implications(&ring, &p, 2), vec![p]);
    }
}
