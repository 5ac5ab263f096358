//! Injectable randomness for challenge generation.
//!
//! Generation only ever needs uniform discrete choices, so the seam is a
//! single `[0, 1)` sample with index selection layered on top. Hosts use
//! [`ThreadRandom`]; reproducible drills use [`SeededRandom`]; tests replay
//! fixed samples through [`SequenceRandom`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot choose from an empty range");
        let scaled = (self.next_f64() * len as f64) as usize;
        scaled.min(len.saturating_sub(1))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of samples, wrapping around when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Builds a source whose successive `choose_index` calls return the given
    /// `(index, len)` picks.
    pub fn from_picks(picks: &[(usize, usize)]) -> Self {
        Self::new(
            picks
                .iter()
                .map(|&(index, len)| Self::sample_for(index, len))
                .collect(),
        )
    }

    /// Midpoint sample that maps to `index` when choosing from `len` items.
    pub fn sample_for(index: usize, len: usize) -> f64 {
        (index as f64 + 0.5) / len.max(1) as f64
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
