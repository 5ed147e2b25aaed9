//! Random source for serves
//!
//! The simulation only asks for uniform floats in a range, so tests can swap
//! in a scripted source.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform float source
pub trait RandomSource {
    /// Uniform sample in `[min, max]`
    fn next_float_range(&mut self, min: f32, max: f32) -> f32;
}

impl RandomSource for Pcg32 {
    fn next_float_range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.random_range(min..=max)
    }
}

/// Seeded PCG generator
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Scripted source returning a repeating sequence of unit samples
///
/// Each stored value `t` in `[0, 1]` is mapped onto the requested range as
/// `min + t * (max - min)`. An empty sequence behaves like `[0.5]`
/// (always the middle of the range).
#[derive(Debug, Clone)]
pub struct SequenceRng {
    samples: Vec<f32>,
    next: usize,
}

impl SequenceRng {
    pub fn new(samples: Vec<f32>) -> Self {
        let samples = if samples.is_empty() { vec![0.5] } else { samples };
        Self { samples, next: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_float_range(&mut self, min: f32, max: f32) -> f32 {
        let t = self.samples[self.next % self.samples.len()].clamp(0.0, 1.0);
        self.next += 1;
        min + t * (max - min)
    }
}
