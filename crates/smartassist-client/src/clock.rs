//! # Clock
//!
//! Source of "now" for the plan gate, reminders and record timestamps.
//! Injected so tests can pin time to a known billing period.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Current time in nanoseconds since the Unix epoch.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now_nanos(&self) -> i64;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_nanos(&self) -> i64 {
        smartassist_core::time::now_nanos()
    }
}

/// A settable clock for tests.
#[derive(Debug, Default)]
pub struct FixedClock {
    nanos: AtomicI64,
}

impl FixedClock {
    pub fn new(nanos: i64) -> Self {
        FixedClock {
            nanos: AtomicI64::new(nanos),
        }
    }

    pub fn set(&self, nanos: i64) {
        self.nanos.store(nanos, Ordering::SeqCst);
    }

    /// Moves the clock forward by `nanos`.
    pub fn advance(&self, nanos: i64) {
        self.nanos.fetch_add(nanos, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_nanos(&self) -> i64 {
        self.nanos.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(1_000);
        assert_eq!(clock.now_nanos(), 1_000);

        clock.advance(500);
        assert_eq!(clock.now_nanos(), 1_500);

        clock.set(7);
        assert_eq!(clock.now_nanos(), 7);
    }

    #[test]
    fn test_system_clock_is_after_2024() {
        // 2024-01-01T00:00:00Z
        assert!(SystemClock.now_nanos() > 1_704_067_200_000_000_000);
    }
}
