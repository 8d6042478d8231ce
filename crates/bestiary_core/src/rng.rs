use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generator used for a whole run.
pub type GenRng = ChaCha8Rng;

/// Seed used when neither the config nor the caller provides one.
pub const DEFAULT_SEED: u64 = 420;

pub fn seeded(seed: u64) -> GenRng {
    ChaCha8Rng::seed_from_u64(seed)
}
