//! Pairs of generators, whose S-polynomials are to be reduced during completion.
//!
//! Two kinds of pair are relevant to a Boolean ring:
//! - A critical pair of two generators, as in any polynomial ring.
//! - A field pair of a generator `g` and a variable `x` of the leading monomial of `g`.
//!   In effect, this is the pair of `g` and the field equation `x² + x`, and the S-polynomial of the pair is `x·g`.
//!
//! Pairs are taken from the queue in order of the degree of the least common multiple of their leading monomials, and then in order of addition.

use crate::ring::{monomial::Monomial, RingVar};

/// A pair of generators, identified by their index in a strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pair {
    Critical(usize, usize),
    Field(usize, RingVar),
}

/// A pair, along with the least common multiple of the leading monomials of the pair.
#[derive(Clone, Debug)]
pub struct QueuedPair {
    pub pair: Pair,
    pub lcm: Monomial,
}

/// A queue of pairs.
#[derive(Default)]
pub struct PairQueue {
    pairs: Vec<QueuedPair>,
}

impl PairQueue {
    pub fn push(&mut self, pair: Pair, lcm: Monomial) {
        self.pairs.push(QueuedPair { pair, lcm })
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// The lowest degree of a queued pair.
    pub fn lowest_degree(&self) -> Option<usize> {
        self.pairs.iter().map(|queued| queued.lcm.degree()).min()
    }

    /// Removes and returns the first pair of the lowest degree.
    pub fn pop_lowest(&mut self) -> Option<QueuedPair> {
        let degree = self.lowest_degree()?;
        let index = self
            .pairs
            .iter()
            .position(|queued| queued.lcm.degree() == degree)?;
        Some(self.pairs.remove(index))
    }

    /// Removes and returns every pair of the lowest degree, in order of addition.
    pub fn pop_lowest_batch(&mut self) -> Vec<QueuedPair> {
        let Some(degree) = self.lowest_degree() else {
            return Vec::default();
        };
        let (batch, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pairs)
            .into_iter()
            .partition(|queued| queued.lcm.degree() == degree);
        self.pairs = rest;
        batch
    }

    /// Removes every pair involving the generator at `index`.
    pub fn forget(&mut self, index: usize) {
        self.pairs.retain(|queued| match queued.pair {
            Pair::Critical(i, j) => i != index && j != index,
            Pair::Field(i, _) => i != index,
        })
    }
}

#[cfg(test)]
mod pair_tests {
    use super::*;

    #[test]
    fn lowest_degree_first() {
        let mut queue = PairQueue::default();
        queue.push(Pair::Critical(0, 1), Monomial::from_variables([0, 1, 2]));
        queue.push(Pair::Field(0, 1), Monomial::from_variables([0, 1]));
        queue.push(Pair::Field(1, 2), Monomial::from_variables([1, 2]));

        assert_eq!(queue.lowest_degree(), Some(2));
        assert_eq!(queue.pop_lowest().map(|q| q.pair), Some(Pair::Field(0, 1)));

        let batch = queue.pop_lowest_batch();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].pair, Pair::Field(1, 2));
        assert_eq!(queue.len(), 1);

        queue.forget(1);
        assert!(queue.is_empty());
    }
}
