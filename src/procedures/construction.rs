/*!
Construction of a reduced Gröbner basis from the polynomials of a batch.

For the method, see: [construct_basis](Analyzer::construct_basis).

# Overview

The inputs are first [prepared](prepare_inputs): zero polynomials (encodings of tautologies) are dropped, and the remaining polynomials are sorted in increasing (canonical) order with duplicates removed.
As the basis does not depend on the order in which generators are added, sorting only serves to make the work done on a batch independent of the order of the reasons of the batch.

Then, for each input:
- The [full implications](crate::engine::implications) of the input are found, with the cache manager of the analyzer consulted.
- Each implication is brought to [normal form](crate::engine::GroebnerStrategy::normal_form) with respect to the generators found so far.
  + If the normal form is `1` the batch is inconsistent, and construction stops immediately.
  + If the normal form is `0` the implication is already part of the ideal, and is discarded.
  + Otherwise, the normal form is added as a generator.

If no generator was added the batch is redundant.
Otherwise, the generators are [completed](crate::engine::GroebnerStrategy::complete), and the reduced basis is returned.
*/

use crate::{
    analyzer::Analyzer,
    engine::GroebnerStrategy,
    misc::log::targets::{self},
    ring::{polynomial::Polynomial, BooleRing},
    types::err::{self},
};

/// Possible 'Ok' results from basis construction.
#[derive(Debug, PartialEq, Eq)]
pub enum ConstructionOk {
    /// `1` was found in the ideal of the batch.
    Contradiction,

    /// Every input was zero, or reduced to zero, and so the batch carries no information.
    Redundant,

    /// The reduced basis of the ideal of the batch, in increasing (canonical) order.
    Basis(Vec<Polynomial>),
}

/// The given polynomials without zeros, in increasing (canonical) order, and without duplicates.
pub fn prepare_inputs(ring: &BooleRing, mut polynomials: Vec<Polynomial>) -> Vec<Polynomial> {
    polynomials.retain(|p| !p.is_zero());
    polynomials.sort_by(|a, b| ring.compare(a, b));
    polynomials.dedup();
    polynomials
}

impl Analyzer {
    /// For details on basis construction see the [construction](crate::procedures::construction) procedure.
    pub fn construct_basis(
        &mut self,
        inputs: Vec<Polynomial>,
    ) -> Result<ConstructionOk, err::ErrorKind> {
        let inputs = prepare_inputs(&self.ring, inputs);
        log::debug!(target: targets::CONSTRUCTION, "Construction over {} inputs", inputs.len());

        let mut strategy = GroebnerStrategy::new(&self.ring, self.config.strategy.clone());
        let mut added = 0;

        for input in &inputs {
            for implication in strategy.full_implications(input, &mut self.cache) {
                let normal_form = strategy.normal_form(&implication);

                if normal_form.is_one() {
                    log::debug!(target: targets::CONSTRUCTION, "Contradiction from {input}");
                    return Ok(ConstructionOk::Contradiction);
                }

                if normal_form.is_zero() {
                    log::trace!(target: targets::CONSTRUCTION, "Discarded {implication}");
                    continue;
                }

                strategy.add_generator(normal_form)?;
                added += 1;
            }
        }

        if added == 0 {
            log::debug!(target: targets::CONSTRUCTION, "No generators");
            return Ok(ConstructionOk::Redundant);
        }

        strategy.complete();
        log::trace!(target: targets::CONSTRUCTION, "Completed with {} generators", strategy.generator_count());
        let basis = strategy.minimalize_and_tail_reduce();

        log::debug!(target: targets::CONSTRUCTION, "Basis of {} polynomials from {added} generators", basis.len());
        Ok(ConstructionOk::Basis(basis))
    }
}
