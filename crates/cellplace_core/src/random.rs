//! Seedable uniform random numbers for move proposal and initial placement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The random stream shared by floorplan construction and annealing.
///
/// A run seeded with the same value, parameters, and input makes exactly the
/// same draws and therefore produces the same placement.
#[derive(Debug, Clone)]
pub struct Randomness {
    rng: StdRng,
}

impl Randomness {
    /// Creates a reproducible stream from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a stream seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Returns a uniform integer in `[min, max]`.
    ///
    /// An empty or single-valued range yields `min`.
    pub fn uniform_int(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Returns a uniform float in `[min, max)`.
    pub fn uniform_float(&mut self, min: f64, max: f64) -> f64 {
        min + self.rng.gen::<f64>() * (max - min)
    }

    /// Returns two different uniform integers in `[min, max]`.
    ///
    /// Draws the second value until it differs from the first. Returns `None`
    /// when the range holds fewer than two values, where no such pair exists.
    pub fn two_distinct_ints(&mut self, min: u32, max: u32) -> Option<(u32, u32)> {
        if max <= min {
            return None;
        }
        let a = self.uniform_int(min, max);
        loop {
            let b = self.uniform_int(min, max);
            if b != a {
                return Some((a, b));
            }
        }
    }
}
