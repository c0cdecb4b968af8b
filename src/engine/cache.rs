/*!
A cache manager, for results which depend only on the ring and not on the state of some strategy.

At present, the cache holds the [full implications](super::implications) of polynomials.

The implications of a polynomial depend only on the polynomial (and the order of the ring), and so a cache manager may be kept across many strategies.
In particular, an [analyzer](crate::analyzer::Analyzer) keeps a single cache manager for each of its analyses, as polynomials of recently learnt clauses tend to recur.

When the count of cached entries reaches the capacity of the manager the cache is cleared.
*/

use std::collections::HashMap;

use crate::ring::polynomial::Polynomial;

/// A cache of implications, keyed by polynomial.
pub struct CacheManager {
    implications: HashMap<Polynomial, Vec<Polynomial>>,

    capacity: usize,

    /// A count of lookups which found a cached entry.
    pub hits: usize,

    /// A count of lookups which did not find a cached entry.
    pub misses: usize,
}

impl CacheManager {
    pub fn new(capacity: usize) -> Self {
        CacheManager {
            implications: HashMap::default(),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// The implications of `p`, computed by `f` if not already cached.
    pub fn implications_with(
        &mut self,
        p: &Polynomial,
        f: impl FnOnce() -> Vec<Polynomial>,
    ) -> Vec<Polynomial> {
        if let Some(implications) = self.implications.get(p) {
            self.hits += 1;
            return implications.clone();
        }

        self.misses += 1;
        let implications = f();

        if self.capacity > 0 {
            if self.implications.len() >= self.capacity {
                self.implications.clear();
            }
            self.implications.insert(p.clone(), implications.clone());
        }

        implications
    }

    /// A count of cached entries.
    pub fn len(&self) -> usize {
        self.implications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.implications.is_empty()
    }

    pub fn clear(&mut self) {
        self.implications.clear()
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        CacheManager::new(4096)
    }
}

#[cfg(test)]
mod cache_tests {
    use super::*;

    #[test]
    fn hits_and_capacity() {
        let mut cache = CacheManager::new(1);
        let one = Polynomial::one();
        let zero = Polynomial::zero();

        assert_eq!(cache.implications_with(&one, || vec![Polynomial::one()]).len(), 1);
        assert_eq!(cache.implications_with(&one, || panic!("cached")).len(), 1);
        assert_eq!((cache.hits, cache.misses), (1, 1));

        cache.implications_with(&zero, Vec::default);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.misses, 2);
    }
}
