#![allow(dead_code)]

use otter_gb::structures::{
    atom::Atom,
    clause::{CClause, Clause},
    literal::{CLiteral, Literal},
};
use rand::{Rng, SeedableRng};
use rand_core::{impls, RngCore};

/// A translation of the minimal C PCG32 implementation from <https://www.pcg-random.org/>.
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        ((self.next_u32() as u64) << 32) | (self.next_u32() as u64)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        const INCREMENT: u64 = 3215534235932367345;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A clause from DIMACS-style integers, with `-n` the negative literal on atom `n`.
pub fn clause(literals: &[i32]) -> CClause {
    literals
        .iter()
        .map(|literal| CLiteral::new(literal.unsigned_abs(), literal.is_positive()))
        .collect()
}

/// A batch of `reason_count` random clauses over atoms `0..atom_count`, each with between one and `max_length` literals.
pub fn random_batch(
    rng: &mut impl Rng,
    atom_count: Atom,
    reason_count: usize,
    max_length: usize,
) -> Vec<CClause> {
    (0..reason_count)
        .map(|_| {
            let length = rng.random_range(1..=max_length);
            (0..length)
                .map(|_| CLiteral::new(rng.random_range(0..atom_count), rng.random_bool(0.5)))
                .collect()
        })
        .collect()
}

/// Whether `clause` is true on the valuation whose true atoms are the set bits of `valuation`.
pub fn satisfied(clause: &impl Clause, valuation: u32) -> bool {
    clause
        .literals()
        .any(|literal| ((valuation >> literal.atom()) & 1 == 1) == literal.polarity())
}

/// Every valuation of atoms `0..atom_count` on which every clause of `batch` is true.
pub fn models(batch: &[CClause], atom_count: Atom) -> Vec<u32> {
    (0..(1_u32 << atom_count))
        .filter(|valuation| batch.iter().all(|clause| satisfied(clause, *valuation)))
        .collect()
}

/// Whether `clause` is true on every model of `batch`.
pub fn entailed(batch: &[CClause], atom_count: Atom, clause: &CClause) -> bool {
    models(batch, atom_count)
        .into_iter()
        .all(|valuation| satisfied(clause, valuation))
}
