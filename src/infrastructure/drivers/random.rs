use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Random source for the prefix coin flips
///
/// `seed` should come from the hardware RNG, the sequence is reproducible
/// for a given seed.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
