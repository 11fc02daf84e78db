//! Random number sources for rendering.
//!
//! Every random decision in the pipeline goes through [`RandomSource`], so a
//! fixed seed reproduces an image byte for byte.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Bounded integer generator.
///
/// `next(min, max)` returns a value in the half-open range `[min, max)`.
/// When `max <= min` the range is empty and `min` is returned.
pub trait RandomSource {
    fn next(&mut self, min: i32, max: i32) -> i32;
}

/// Adapts any `rand` generator to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    #[must_use]
    pub const fn from_rng(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.0.random_range(min..max)
    }
}

/// Thread-local generator. One per render call.
pub type ThreadRandom = RngSource<ThreadRng>;

/// Seeded generator for reproducible output.
pub type SeededRandom = RngSource<StdRng>;

impl ThreadRandom {
    #[must_use]
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl SeededRandom {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}
