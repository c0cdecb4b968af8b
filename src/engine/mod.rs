/*!
The algebra engine, for constructing a reduced Gröbner basis of an ideal of a [Boolean ring](crate::ring).

A [GroebnerStrategy] is built over a ring with some [configuration](crate::config::strategy) and holds a growing collection of generators.
Generators are added one at a time, typically after taking the [normal form](GroebnerStrategy::normal_form) of a polynomial with respect to the current generators.
When all generators have been added, [completion](GroebnerStrategy::complete) closes the generators under reduction of S-polynomials, and [minimalization](GroebnerStrategy::minimalize_and_tail_reduce) returns the reduced basis.

As the ring is Boolean, the field equations `x² + x` are implicit in each ideal, and so completion considers, alongside the usual critical pairs, a field pair for each variable in the leading monomial of a generator (see [pairs]).

The reduced basis of an ideal is unique, and so the basis returned by a strategy does not depend on the configuration of the strategy or the order in which generators were added.
Though, the configuration may have a significant impact on the work done to obtain the basis.

# Example

```rust
# use otter_gb::config::strategy::StrategyConfig;
# use otter_gb::engine::GroebnerStrategy;
# use otter_gb::ring::{BooleRing, order::MonomialOrder};
let ring = BooleRing::new(2, MonomialOrder::DegLex).unwrap();
let mut strategy = GroebnerStrategy::new(&ring, StrategyConfig::default());

// The clauses x0 ∨ x1 and ¬x0 ∨ x1.
let x0_or_x1 = ring.literal_product([(0, true), (1, true)]).unwrap();
let not_x0_or_x1 = ring.literal_product([(0, false), (1, true)]).unwrap();

strategy.add_generator(x0_or_x1).unwrap();

let normal_form = strategy.normal_form(&not_x0_or_x1);
strategy.add_generator(normal_form).unwrap();

strategy.complete();
assert_eq!(strategy.minimalize_and_tail_reduce(), vec![ring.variable(1).unwrap()]);
```

For a fixed ring, implications of polynomials may be cached across strategies with a [CacheManager].
*/

pub mod cache;
pub mod implications;
pub mod linear_algebra;
pub mod pairs;

pub use cache::CacheManager;

use pairs::{Pair, PairQueue, QueuedPair};

use crate::{
    config::strategy::StrategyConfig,
    misc::log::targets::{self},
    ring::{monomial::Monomial, polynomial::Polynomial, BooleRing},
    types::err::StrategyError,
};

/// A generator of the ideal of a strategy.
struct Generator {
    polynomial: Polynomial,

    lead: Monomial,

    /// Whether the generator remains part of the basis.
    /// Inactive generators have been superseded by some other generator.
    active: bool,
}

/// A strategy for basis construction over some ring.
pub struct GroebnerStrategy<'r> {
    ring: &'r BooleRing,

    config: StrategyConfig,

    generators: Vec<Generator>,

    pairs: PairQueue,

    /// Polynomials of the ideal which are not yet reflected in the generators.
    requeued: Vec<Polynomial>,

    /// Whether `1` has been added as a generator.
    contradiction: bool,
}

impl<'r> GroebnerStrategy<'r> {
    /// A fresh strategy over `ring`, without any generators.
    pub fn new(ring: &'r BooleRing, config: StrategyConfig) -> Self {
        GroebnerStrategy {
            ring,
            config,
            generators: Vec::default(),
            pairs: PairQueue::default(),
            requeued: Vec::default(),
            contradiction: false,
        }
    }

    /// The ring of the strategy.
    pub fn ring(&self) -> &BooleRing {
        self.ring
    }

    /// The configuration of the strategy.
    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Whether `1` is known to be in the ideal of the strategy.
    pub fn contradiction(&self) -> bool {
        self.contradiction
    }

    /// A count of the active generators of the strategy.
    pub fn generator_count(&self) -> usize {
        self.generators.iter().filter(|g| g.active).count()
    }

    /// The active generators of the strategy, in order of addition.
    pub fn generators(&self) -> impl Iterator<Item = &Polynomial> {
        self.generators
            .iter()
            .filter(|g| g.active)
            .map(|g| &g.polynomial)
    }

    /// The full implications of `p`, with the cache manager consulted for previous results.
    ///
    /// The implications of `p` are independent of the generators of the strategy, and so are typically [normalized](GroebnerStrategy::normal_form) before being added.
    pub fn full_implications(&self, p: &Polynomial, cache: &mut CacheManager) -> Vec<Polynomial> {
        let limit = self.config.implication_limit.value;
        cache.implications_with(p, || implications::full_implications(self.ring, p, limit))
    }

    /// The normal form of `p` with respect to the active generators.
    ///
    /// That is, `p` with each monomial divisible by the leading monomial of some generator reduced away.
    pub fn normal_form(&self, p: &Polynomial) -> Polynomial {
        let mut remaining = p.clone();
        let mut irreducible = Vec::default();

        while let Some(lead) = remaining.lead() {
            match self.reduction_of(&remaining, lead) {
                Some(reduced) => remaining = reduced,
                None => {
                    irreducible.push(lead.clone());
                    remaining = remaining.tail();
                }
            }
        }

        self.ring.from_terms(irreducible)
    }

    /// The result of reducing the leading monomial of `p` until the leading monomial is not divisible by the leading monomial of any active generator.
    pub fn lead_reduce(&self, p: &Polynomial) -> Polynomial {
        let mut remaining = p.clone();
        while let Some(lead) = remaining.lead() {
            match self.reduction_of(&remaining, lead) {
                Some(reduced) => remaining = reduced,
                None => break,
            }
        }
        remaining
    }

    /// Adds `p` as a generator of the strategy.
    ///
    /// The leading monomial of `p` should not be divisible by the leading monomial of any active generator, and so `p` should be the normal form of some polynomial.
    /// Otherwise, `p` is reduced before being added.
    pub fn add_generator(&mut self, p: Polynomial) -> Result<(), StrategyError> {
        let p = match self.config.lazy.value {
            true => self.lead_reduce(&p),
            false => self.normal_form(&p),
        };

        let Some(lead) = p.lead().cloned() else {
            return Err(StrategyError::ZeroGenerator);
        };

        if self.config.log.value {
            log::debug!(target: targets::ENGINE, "Generator {}: {p}", self.generators.len());
        }

        if p.is_one() {
            self.contradiction = true;
        }

        if self.config.recursion.value {
            for index in 0..self.generators.len() {
                let generator = &mut self.generators[index];
                if generator.active && lead.divides(&generator.lead) {
                    generator.active = false;
                    self.requeued.push(generator.polynomial.clone());
                    self.pairs.forget(index);
                }
            }
        }

        let index = self.generators.len();

        for (other_index, other) in self.generators.iter().enumerate() {
            if other.active {
                self.pairs
                    .push(Pair::Critical(other_index, index), other.lead.lcm(&lead));
            }
        }
        for var in lead.variables() {
            self.pairs.push(Pair::Field(index, *var), lead.clone());
        }

        self.generators.push(Generator {
            polynomial: p,
            lead,
            active: true,
        });

        Ok(())
    }

    /// Completes the generators of the strategy, so that every S-polynomial of a pair of generators reduces to zero.
    ///
    /// Completion stops early if `1` is found to be in the ideal.
    pub fn complete(&mut self) {
        loop {
            if self.contradiction {
                return;
            }

            if let Some(p) = self.requeued.pop() {
                let reduced = self.reduce(&p);
                if !reduced.is_zero() {
                    let _ = self.add_generator(reduced);
                }
                continue;
            }

            if self.pairs.is_empty() {
                return;
            }

            let use_linear_algebra = self.config.modified_linear_algebra.value;
            let batch = match use_linear_algebra {
                true => self.pairs.pop_lowest_batch(),
                false => self.pairs.pop_lowest().into_iter().collect(),
            };

            let last_block_start = self.ring.order().last_block_start();
            let in_last_block = batch.iter().all(|queued| {
                queued
                    .lcm
                    .variables()
                    .iter()
                    .all(|var| *var >= last_block_start)
            });

            let reduced = batch
                .iter()
                .filter_map(|queued| self.s_polynomial(queued))
                .map(|s| self.reduce(&s))
                .filter(|s| !s.is_zero())
                .collect::<Vec<_>>();

            let reduced = match use_linear_algebra
                && (in_last_block || !self.config.ll_on_last_block.value)
            {
                true => {
                    if self.config.draw_matrices.value {
                        log::trace!(target: targets::ENGINE, "Matrix:\n{}", linear_algebra::draw(self.ring, &reduced));
                    }
                    linear_algebra::row_reduce(self.ring, reduced)
                }
                false => reduced,
            };

            for s in reduced {
                let s = self.reduce(&s);
                if !s.is_zero() {
                    let _ = self.add_generator(s);
                }
            }
        }
    }

    /// The reduced basis of the ideal of the strategy.
    ///
    /// Generators whose leading monomial is divisible by the leading monomial of some other generator are removed, and the tail of each remaining generator is reduced.
    /// The basis is returned in increasing (canonical) order.
    ///
    /// The basis is only the reduced basis of the ideal if the strategy is [complete](GroebnerStrategy::complete).
    pub fn minimalize_and_tail_reduce(&self) -> Vec<Polynomial> {
        if self.contradiction {
            return vec![Polynomial::one()];
        }

        let active = self
            .generators
            .iter()
            .filter(|g| g.active)
            .collect::<Vec<_>>();

        let minimal = active
            .iter()
            .enumerate()
            .filter(|(index, g)| {
                !active.iter().enumerate().any(|(other_index, other)| {
                    other_index != *index
                        && other.lead.divides(&g.lead)
                        && (other.lead != g.lead || other_index < *index)
                })
            })
            .map(|(_, g)| *g)
            .collect::<Vec<_>>();

        let mut basis = minimal
            .iter()
            .map(|g| {
                let tail = self.normal_form_by(&g.polynomial.tail(), &minimal);
                self.ring
                    .add(&self.ring.from_terms(vec![g.lead.clone()]), &tail)
            })
            .collect::<Vec<_>>();

        basis.sort_by(|a, b| self.ring.compare(a, b));
        basis
    }
}

impl GroebnerStrategy<'_> {
    /// Reduces `p`, lazily or fully according to the configuration.
    fn reduce(&self, p: &Polynomial) -> Polynomial {
        match self.config.lazy.value {
            true => self.lead_reduce(p),
            false => self.normal_form(p),
        }
    }

    /// The result of a single reduction of the leading monomial `lead` of `p` by some active generator, if possible.
    fn reduction_of(&self, p: &Polynomial, lead: &Monomial) -> Option<Polynomial> {
        let generator = self
            .generators
            .iter()
            .find(|g| g.active && g.lead.divides(lead))?;

        let cofactor = lead.without(&generator.lead);
        Some(self.ring.add(
            p,
            &self.ring.multiply_monomial(&generator.polynomial, &cofactor),
        ))
    }

    /// The normal form of `p` with respect to some given generators.
    fn normal_form_by(&self, p: &Polynomial, generators: &[&Generator]) -> Polynomial {
        let mut remaining = p.clone();
        let mut irreducible = Vec::default();

        while let Some(lead) = remaining.lead() {
            match generators.iter().find(|g| g.lead.divides(lead)) {
                Some(generator) => {
                    let cofactor = lead.without(&generator.lead);
                    remaining = self.ring.add(
                        &remaining,
                        &self.ring.multiply_monomial(&generator.polynomial, &cofactor),
                    );
                }
                None => {
                    irreducible.push(lead.clone());
                    remaining = remaining.tail();
                }
            }
        }

        self.ring.from_terms(irreducible)
    }

    /// The S-polynomial of a pair, if both generators of the pair remain active.
    fn s_polynomial(&self, queued: &QueuedPair) -> Option<Polynomial> {
        match queued.pair {
            Pair::Critical(i, j) => {
                let (f, g) = (&self.generators[i], &self.generators[j]);
                if !f.active || !g.active {
                    return None;
                }

                if self.config.log.value {
                    log::debug!(target: targets::ENGINE, "Pair ({i}, {j}) at {}", queued.lcm);
                }

                let f_part = self
                    .ring
                    .multiply_monomial(&f.polynomial, &queued.lcm.without(&f.lead));
                let g_part = self
                    .ring
                    .multiply_monomial(&g.polynomial, &queued.lcm.without(&g.lead));
                Some(self.ring.add(&f_part, &g_part))
            }

            Pair::Field(i, var) => {
                let f = &self.generators[i];
                if !f.active {
                    return None;
                }

                if self.config.log.value {
                    log::debug!(target: targets::ENGINE, "Field pair ({i}, x{var})");
                }

                Some(
                    self.ring
                        .multiply_monomial(&f.polynomial, &Monomial::variable(var)),
                )
            }
        }
    }
}

#[cfg(test)]
mod strategy_tests {
    use super::*;
    use crate::ring::order::MonomialOrder;

    fn all_configs() -> Vec<StrategyConfig> {
        let mut configs = Vec::default();
        for lazy in [true, false] {
            for linear_algebra in [true, false] {
                for recursion in [true, false] {
                    let mut config = StrategyConfig::default();
                    config.lazy.value = lazy;
                    config.modified_linear_algebra.value = linear_algebra;
                    config.recursion.value = recursion;
                    configs.push(config);
                }
            }
        }
        configs
    }

    fn basis_of(ring: &BooleRing, config: StrategyConfig, polys: &[Polynomial]) -> Vec<Polynomial> {
        let mut strategy = GroebnerStrategy::new(ring, config);
        for p in polys {
            let p = strategy.normal_form(p);
            if !p.is_zero() {
                strategy.add_generator(p).unwrap();
            }
        }
        strategy.complete();
        strategy.minimalize_and_tail_reduce()
    }

    #[test]
    fn inconsistent() {
        let ring = BooleRing::new(1, MonomialOrder::DegLex).unwrap();
        let x = ring.literal_product([(0, true)]).unwrap();
        let not_x = ring.literal_product([(0, false)]).unwrap();

        for config in all_configs() {
            assert_eq!(basis_of(&ring, config, &[x.clone(), not_x.clone()]), vec![Polynomial::one()]);
        }
    }

    #[test]
    fn implied_literals() {
        let ring = BooleRing::new(2, MonomialOrder::DegLex).unwrap();
        let x0x1 = ring.literal_product([(0, true), (1, true)]).unwrap();
        let p = ring.add(&x0x1, &ring.literal_product([(1, false)]).unwrap());

        for config in all_configs() {
            let basis = basis_of(&ring, config, &[x0x1.clone(), p.clone()]);
            // x0*x1 = 0 and x1 = 1, and so x0 = 0.
            assert_eq!(
                basis,
                vec![
                    ring.literal_product([(1, false)]).unwrap(),
                    ring.variable(0).unwrap(),
                ]
            );
        }
    }

    #[test]
    fn field_pairs() {
        // x0*x1 + x1 + 1 is zero only when x0 is 0 and x1 is 1.
        // With a single generator there are no critical pairs, and so this is found through field pairs alone.
        let ring = BooleRing::new(2, MonomialOrder::DegLex).unwrap();
        let p = ring.add(
            &ring.literal_product([(0, true), (1, true)]).unwrap(),
            &ring.literal_product([(1, false)]).unwrap(),
        );

        for config in all_configs() {
            let basis = basis_of(&ring, config, &[p.clone()]);
            assert_eq!(
                basis,
                vec![
                    ring.literal_product([(1, false)]).unwrap(),
                    ring.variable(0).unwrap(),
                ]
            );
        }
    }

    #[test]
    fn basis_is_independent_of_configuration() {
        let ring = BooleRing::new(4, MonomialOrder::DegLex).unwrap();
        let polys = vec![
            ring.literal_product([(0, true), (1, false), (2, true)]).unwrap(),
            ring.literal_product([(0, false), (3, true)]).unwrap(),
            ring.literal_product([(1, true), (3, false)]).unwrap(),
            ring.literal_product([(2, false), (3, true)]).unwrap(),
        ];

        let expected = basis_of(&ring, StrategyConfig::default(), &polys);
        for config in all_configs() {
            assert_eq!(basis_of(&ring, config, &polys), expected);
        }
    }

    #[test]
    fn zero_generator() {
        let ring = BooleRing::new(1, MonomialOrder::DegLex).unwrap();
        let mut strategy = GroebnerStrategy::new(&ring, StrategyConfig::default());
        assert_eq!(
            strategy.add_generator(Polynomial::zero()),
            Err(StrategyError::ZeroGenerator)
        );
    }
}
