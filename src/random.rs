//! Seedable random number streams.
//!
//! Every operator takes an explicit `&mut R: Rng`; nothing in the crate
//! touches thread-local randomness once a run has started.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a 64-bit seed.
///
/// Two streams built from the same seed yield identical draws.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from an optional seed, drawing a fresh seed when `None`.
///
/// Returns the seed actually used so callers can log or replay it.
pub fn rng_from_seed(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (create_rng(seed), seed)
}
