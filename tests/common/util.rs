use rand::SeedableRng;
use rand_core::RngCore;

/// A fixed-seed PRNG for property-style tests that just need reproducible,
/// well-distributed bits.
pub fn test_rng() -> impl RngCore {
    rand_pcg::Lcg128Xsl64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}

/// The PRNG used by the seed=1 end-to-end scenarios.
pub fn scenario_rng() -> impl RngCore {
    rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1)
}
