// Batch generation for dataset building.
//
// The core generates one layout per call; producing a dataset means picking
// many distinct seeds and generating them all. `seed_tokens` derives the seed
// list deterministically from a base seed, so a whole batch is reproducible
// from one string. `generate_batch` fans the seeds out over rayon's pool;
// each call builds its own RNG, so the work is independent and the output
// order matches the seed order.

use crate::config::Constraints;
use crate::generate::generate;
use crate::prng::SeedRng;
use crate::types::Layout;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Default number of layouts per batch.
pub const DEFAULT_GENERATION_COUNT: usize = 15;

/// Smallest batch the generator accepts.
pub const MIN_GENERATION_COUNT: usize = 15;

/// Largest batch the generator accepts.
pub const MAX_GENERATION_COUNT: usize = 150;

/// Length of a generated seed token.
const TOKEN_LEN: usize = 6;

const TOKEN_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Clamp a requested batch size into the accepted range.
pub fn clamp_generation_count(requested: usize) -> usize {
    requested.clamp(MIN_GENERATION_COUNT, MAX_GENERATION_COUNT)
}

/// `count` distinct base-36 seed tokens derived from `base_seed`.
///
/// The same base seed always yields the same tokens in the same order, and a
/// longer list extends a shorter one.
pub fn seed_tokens(base_seed: &str, count: usize) -> Vec<String> {
    let mut rng = SeedRng::new(base_seed);
    let mut seen = BTreeSet::new();
    let mut tokens = Vec::with_capacity(count);

    while tokens.len() < count {
        let token: String = (0..TOKEN_LEN)
            .map(|_| char::from(*rng.choice(TOKEN_ALPHABET)))
            .collect();
        if seen.insert(token.clone()) {
            tokens.push(token);
        }
    }
    tokens
}

/// Generate one layout per seed, in parallel, preserving seed order.
pub fn generate_batch(seeds: &[String], constraints: &Constraints) -> Vec<Layout> {
    tracing::debug!(count = seeds.len(), "generating batch");
    seeds
        .par_iter()
        .map(|seed| generate(seed, constraints))
        .collect()
}
