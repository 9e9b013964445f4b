/// Sources of uniform draws in `[0, 1)`.
///
/// Every function that needs randomness takes a `&mut impl RandomSource`;
/// nothing in this crate reaches for a global generator.
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Supplies uniform floating values in `[0, 1)`.
pub trait RandomSource {
    fn next_uniform(&mut self) -> f64;
}

/// Adapter from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Non-reproducible source backed by the thread-local generator.
    pub fn from_entropy() -> Self {
        RngSource::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible source: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        // `random::<f64>()` samples the half-open interval [0, 1).
        self.rng.random::<f64>()
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub f64);

impl RandomSource for FixedSource {
    fn next_uniform(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    /// Panics on an empty list: there would be nothing to replay.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "SequenceSource requires at least one value");
        SequenceSource { values, position: 0 }
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
