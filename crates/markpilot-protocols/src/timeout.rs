//! Wall-clock deadline tracking for polling loops.

use std::time::{Duration, Instant};

/// Tracks a deadline of `start + budget` and counts how many times the
/// deadline has been consulted, for loop diagnostics.
#[derive(Debug)]
pub struct Timeout {
    started: Instant,
    deadline: Instant,
    checks: u64,
}

impl Timeout {
    /// Starts the clock now.
    pub fn new(budget: Duration) -> Self {
        let started = Instant::now();
        Self {
            started,
            deadline: started + budget,
            checks: 0,
        }
    }

    /// True once the deadline has passed. Bumps the check counter.
    pub fn is_expired(&mut self) -> bool {
        self.checks += 1;
        Instant::now() >= self.deadline
    }

    /// Loop guard form of [`Timeout::is_expired`].
    pub fn not_expired(&mut self) -> bool {
        !self.is_expired()
    }

    /// How many times the deadline has been consulted.
    pub fn checks(&self) -> u64 {
        self.checks
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
#[path = "timeout_tests.rs"]
mod tests;
