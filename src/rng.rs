use rand::{rngs::StdRng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Create a [`StdRng`] seeded from the `SEED` environment variable.
///
/// Each call derives a unique seed from the base seed and an incrementing
/// counter so that multiple samplers get deterministic yet distinct streams.
/// Without `SEED` the generator is seeded from OS entropy.
pub fn rng_from_env() -> StdRng {
    match std::env::var("SEED").ok().and_then(|s| s.parse::<u64>().ok()) {
        Some(base) => {
            let idx = COUNTER.fetch_add(1, Ordering::SeqCst);
            StdRng::seed_from_u64(base.wrapping_add(idx))
        }
        None => StdRng::from_entropy(),
    }
}
