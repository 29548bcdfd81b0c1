//! Uniform tile selection from candidate sets

use crate::algorithm::bitset::TileBitset;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random source for reproducible patterns
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw one member of `candidates` uniformly at random
///
/// Consumes exactly one `random_range` draw whenever the set is non-empty,
/// single-member sets included, so the random stream advances once per
/// cell regardless of how constrained the cell is. Returns `None` without
/// drawing when the set is empty.
pub fn select_uniform<R: Rng>(candidates: &TileBitset, rng: &mut R) -> Option<usize> {
    let count = candidates.count();
    if count == 0 {
        return None;
    }

    let choice = rng.random_range(0..count);
    candidates.nth(choice)
}
