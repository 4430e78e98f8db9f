//! Uniform index sampling seam for the random walk.
//!
//! The walk never talks to a random number generator directly; it asks an
//! [`IndexSampler`] for a uniform index into the materialized neighbor
//! snapshot. Production callers use [`default_sampler`] (thread-local RNG)
//! or [`seeded`] for reproducible runs; tests substitute [`FixedSampler`]
//! or [`ScriptedSampler`].
//!
//! Samplers are not thread-safe by contract: use one per concurrent call.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::collections::VecDeque;

/// Source of uniform indices for random draws.
pub trait IndexSampler {
    /// Draw an index uniformly from `[0, n)`.
    ///
    /// The walk only calls this with `n >= 1`. A draw outside `[0, n)` is
    /// reported by the walk as [`crate::Error::SampleOutOfRange`] rather
    /// than causing a panic.
    fn draw(&mut self, n: usize) -> usize;
}

/// Adapter making any [`rand::Rng`] an [`IndexSampler`].
#[derive(Debug, Clone)]
pub struct RngSampler<R>(pub R);

impl<R: Rng> IndexSampler for RngSampler<R> {
    fn draw(&mut self, n: usize) -> usize {
        self.0.random_range(0..n)
    }
}

/// Sampler backed by a seeded xorshift generator; same seed, same draws.
pub type SeededSampler = RngSampler<XorShiftRng>;

/// Create a reproducible sampler from a seed.
#[must_use]
pub fn seeded(seed: u64) -> SeededSampler {
    RngSampler(XorShiftRng::seed_from_u64(seed))
}

/// Default production sampler, backed by the thread-local RNG.
#[must_use]
pub fn default_sampler() -> RngSampler<ThreadRng> {
    RngSampler(rand::rng())
}

/// Deterministic sampler that always returns the same index.
///
/// Draws are not clamped to `[0, n)`; an out-of-range value surfaces from
/// the walk as [`crate::Error::SampleOutOfRange`].
#[derive(Debug, Clone, Copy)]
pub struct FixedSampler(pub usize);

impl IndexSampler for FixedSampler {
    fn draw(&mut self, _n: usize) -> usize {
        self.0
    }
}

/// Replays a fixed script of draws, then returns 0 once exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSampler {
    draws: VecDeque<usize>,
}

impl ScriptedSampler {
    /// Create a sampler that replays `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

impl IndexSampler for ScriptedSampler {
    fn draw(&mut self, _n: usize) -> usize {
        self.draws.pop_front().unwrap_or(0)
    }
}
