//! Sleeps and randomness behind one seam.
//!
//! Configured pauses are jittered by a multiplicative ±20% so repeated
//! runs never produce mechanically identical timing. Routing every sleep
//! and random draw through [`Pacer`] keeps that jitter deterministic in
//! tests via a seeded or recording implementation.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use markpilot_protocols::{Point, Rect};

pub trait Pacer: Send {
    /// Blocks the calling thread for `duration`.
    fn sleep(&mut self, duration: Duration);

    /// `base` scaled by a uniform factor in `[0.8, 1.2]`.
    fn jitter(&mut self, base: Duration) -> Duration;

    /// A uniform duration in `[lo, hi]`.
    fn between(&mut self, lo: Duration, hi: Duration) -> Duration;

    /// A uniform random point inside `rect`.
    fn point_in(&mut self, rect: &Rect) -> Point;

    /// Sleeps a jittered `base`; zero base skips the sleep entirely.
    fn pause(&mut self, base: Duration) {
        let duration = self.jitter(base);
        if !duration.is_zero() {
            self.sleep(duration);
        }
    }
}

/// Production pacer: thread sleeps and a [`StdRng`] source.
pub struct RandomPacer {
    rng: StdRng,
}

impl RandomPacer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible pacing for diagnostics and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pacer for RandomPacer {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn jitter(&mut self, base: Duration) -> Duration {
        if base.is_zero() {
            return Duration::ZERO;
        }
        base.mul_f64(self.rng.gen_range(0.8..=1.2))
    }

    fn between(&mut self, lo: Duration, hi: Duration) -> Duration {
        if hi <= lo {
            return lo;
        }
        Duration::from_secs_f64(self.rng.gen_range(lo.as_secs_f64()..=hi.as_secs_f64()))
    }

    fn point_in(&mut self, rect: &Rect) -> Point {
        rect.random_point(&mut self.rng)
    }
}

#[cfg(test)]
#[path = "pacing_tests.rs"]
mod tests;
