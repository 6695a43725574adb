//! Random sources and RNG provisioning.
//!
//! The engine never reaches for a hidden global generator. Every draw goes
//! through a [`RandomSource`] handed in by the caller, which lets tests
//! inject fixed sequences and lets concurrent callers decide how the source
//! is shared.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::{Arc, Mutex};

/// Uniform random primitive consumed by the engine
pub trait RandomSource {
    /// Draw an integer uniformly from `[lo, hi]`. Callers guarantee `lo <= hi`.
    fn int_inclusive(&mut self, lo: i64, hi: i64) -> i64;

    /// Draw a fair boolean
    fn coin(&mut self) -> bool {
        self.int_inclusive(0, 1) == 1
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn int_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        (**self).int_inclusive(lo, hi)
    }

    fn coin(&mut self) -> bool {
        (**self).coin()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn int_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        (**self).int_inclusive(lo, hi)
    }

    fn coin(&mut self) -> bool {
        (**self).coin()
    }
}

/// Wrapper to make any `rand` RNG usable as a [`RandomSource`]
#[derive(Debug)]
pub struct RngSource<R> {
    inner: R,
}

impl<R> RngSource<R> {
    /// Create a new RNG-backed source
    pub fn new(rng: R) -> Self {
        Self { inner: rng }
    }

    /// Get a mutable reference to the inner RNG
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Consume the source, returning the inner RNG
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl RngSource<StdRng> {
    /// Source seeded for reproducible output
    pub fn seeded(seed: u64) -> Self {
        Self::new(DefaultRngProvider.create_rng(Some(seed)))
    }

    /// Source seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(DefaultRngProvider.create_random_rng())
    }
}

impl<R: rand::RngCore> RandomSource for RngSource<R> {
    fn int_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        self.inner.gen_range(lo..=hi)
    }

    fn coin(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}

impl<R: Clone> Clone for RngSource<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Deterministic source that cycles through a fixed list of offsets.
///
/// Each draw over `[lo, hi]` takes the next offset `o` and yields
/// `lo + o mod (hi - lo + 1)`, so an offset of `3` drawn against the digit
/// pool selects `'3'`. Once the list is exhausted it starts over. An empty
/// list always yields `lo`.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    offsets: Vec<u64>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source from a list of offsets
    pub fn new(offsets: impl Into<Vec<u64>>) -> Self {
        Self {
            offsets: offsets.into(),
            cursor: 0,
        }
    }

    /// Number of draws made so far
    pub fn draws(&self) -> usize {
        self.cursor
    }

    fn next_offset(&mut self) -> u64 {
        if self.offsets.is_empty() {
            return 0;
        }
        let offset = self.offsets[self.cursor % self.offsets.len()];
        self.cursor += 1;
        offset
    }
}

impl RandomSource for SequenceSource {
    fn int_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        let offset = self.next_offset();
        let span = (i128::from(hi) - i128::from(lo) + 1) as u128;
        let step = u128::from(offset) % span;
        (i128::from(lo) + step as i128) as i64
    }
}

/// Cloneable handle over a single RNG shared between threads.
///
/// Every draw takes the lock, so concurrent callers consume one sequence
/// without repeating or correlating values. A poisoned lock is recovered;
/// the RNG state cannot be left half-updated by a panicking holder.
#[derive(Debug, Clone)]
pub struct SharedSource {
    rng: Arc<Mutex<StdRng>>,
}

impl SharedSource {
    /// Wrap an existing RNG
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Shared source with an optional seed
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self::new(DefaultRngProvider.create_rng(seed))
    }
}

impl RandomSource for SharedSource {
    fn int_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(lo..=hi)
    }
}

/// Trait for providing random number generators
pub trait RngProvider: Send + Sync {
    /// The type of RNG this provider creates
    type Rng: rand::RngCore + Clone + Send;

    /// Create a new RNG instance with an optional seed
    fn create_rng(&self, seed: Option<u64>) -> Self::Rng;

    /// Create a new RNG instance with a random seed
    fn create_random_rng(&self) -> Self::Rng {
        self.create_rng(None)
    }

    /// Create the RNG for one worker of a parallel batch.
    ///
    /// Seeded batches draw worker `i`'s seed as the `i`-th output of a
    /// `StdRng` seeded with the batch seed, so neither workers of one batch
    /// nor workers of batches with nearby seeds share a sequence. Unseeded
    /// batches draw fresh entropy.
    fn fork(&self, seed: Option<u64>, worker: usize) -> Self::Rng {
        self.create_rng(seed.map(|seed| worker_seed(seed, worker)))
    }
}

fn worker_seed(seed: u64, worker: usize) -> u64 {
    let mut root = StdRng::seed_from_u64(seed);
    for _ in 0..worker {
        root.next_u64();
    }
    root.next_u64()
}

/// Default RNG provider using the standard library's StdRng
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRngProvider;

impl RngProvider for DefaultRngProvider {
    type Rng = StdRng;

    fn create_rng(&self, seed: Option<u64>) -> Self::Rng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
