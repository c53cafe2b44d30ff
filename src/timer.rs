//! Time sources for deadline checks.
//!
//! The driver measures its budget through [`Clock`] so tests can substitute
//! a deterministic clock for the wall clock.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Elapsed time since a decision started.
pub trait Clock {
    fn elapsed(&self) -> Duration;

    /// Whether `budget` has been used up.
    fn expired(&self, budget: Duration) -> bool {
        self.elapsed() >= budget
    }
}

/// Real time, measured from construction.
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    #[must_use]
    pub fn start() -> Self {
        WallClock {
            start: Instant::now(),
        }
    }
}

impl Clock for WallClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// A clock that advances by a fixed step every time it is read.
///
/// Reading it is the only way time passes, so a search driven by it is
/// fully reproducible: the n-th deadline check always sees `n * step`
/// (counting from zero).
#[derive(Debug)]
pub struct StepClock {
    step: Duration,
    reads: Cell<u32>,
}

impl StepClock {
    #[must_use]
    pub fn new(step: Duration) -> Self {
        StepClock {
            step,
            reads: Cell::new(0),
        }
    }

    /// A clock that never advances.
    #[must_use]
    pub fn frozen() -> Self {
        Self::new(Duration::ZERO)
    }

    /// How many times the clock has been read.
    #[must_use]
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl Clock for StepClock {
    fn elapsed(&self) -> Duration {
        let reads = self.reads.get();
        self.reads.set(reads.saturating_add(1));
        self.step.saturating_mul(reads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clock_advances_per_read() {
        let clock = StepClock::new(Duration::from_millis(10));
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(clock.elapsed(), Duration::from_millis(10));
        assert!(!clock.expired(Duration::from_millis(30)));
        assert!(clock.expired(Duration::from_millis(30)));
        assert_eq!(clock.reads(), 4);
    }

    #[test]
    fn test_frozen_clock_never_expires() {
        let clock = StepClock::frozen();
        for _ in 0..100 {
            assert!(!clock.expired(Duration::from_nanos(1)));
        }
    }

    #[test]
    fn test_wall_clock_zero_budget_is_expired() {
        let clock = WallClock::start();
        assert!(clock.expired(Duration::ZERO));
        assert!(!clock.expired(Duration::from_secs(3600)));
    }
}
