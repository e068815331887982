#![forbid(unsafe_code)]

//! Monotonic time sources.
//!
//! The controller never reads a wall clock itself. Hosts hand it a
//! [`Clock`] (or a raw reading) and it schedules against that, so a browser
//! `performance.now()` and a test script drive identical state machines.

use core::time::Duration;

/// Monotonic time measured from a host-chosen origin.
pub trait Clock {
    fn now_mono(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_mono(&self) -> Duration {
        (**self).now_mono()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Start at `ms` milliseconds after the origin.
    #[must_use]
    pub const fn at_ms(ms: u64) -> Self {
        Self {
            now: Duration::from_millis(ms),
        }
    }

    /// Move forward by `ms` milliseconds and return the new reading.
    /// Saturates instead of wrapping.
    pub fn tick_ms(&mut self, ms: u64) -> Duration {
        self.now = self.now.saturating_add(Duration::from_millis(ms));
        self.now
    }

    /// Jump to `now`. Earlier readings are ignored so time never runs
    /// backwards.
    pub fn jump_to(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Clock for ManualClock {
    fn now_mono(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ticks_accumulate() {
        let mut clock = ManualClock::at_ms(10);
        assert_eq!(clock.tick_ms(5), Duration::from_millis(15));
        assert_eq!(clock.now_mono(), Duration::from_millis(15));
    }

    #[test]
    fn never_runs_backwards() {
        let mut clock = ManualClock::at_ms(500);
        clock.jump_to(Duration::from_millis(100));
        assert_eq!(clock.now_mono(), Duration::from_millis(500));
        clock.jump_to(Duration::MAX);
        assert_eq!(clock.tick_ms(1), Duration::MAX);
    }

    #[test]
    fn references_are_clocks() {
        fn read(clock: impl Clock) -> Duration {
            clock.now_mono()
        }
        let clock = ManualClock::at_ms(42);
        assert_eq!(read(&clock), Duration::from_millis(42));
    }
}
