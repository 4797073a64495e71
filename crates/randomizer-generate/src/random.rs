use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform random draws used at every stochastic decision point.
///
/// Implemented for every [`RngCore`], so callers pass the per-thread
/// `rand::rng()` handle in production and a seeded generator in tests.
pub trait RandomSource {
    /// Integer drawn uniformly from `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics when `bound` is zero.
    fn uniform_int(&mut self, bound: usize) -> usize;

    /// True with probability `threshold / 100`.
    fn percent_check(&mut self, threshold: u32) -> bool {
        self.uniform_int(100) < threshold as usize
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn uniform_int(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Deterministic source for reproducible runs.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
