//! Time sources
//!
//! Timing state samples a clock on demand instead of being pinned to a frame
//! boundary. [`MonotonicClock`] is what a running compositor uses;
//! [`ManualClock`] only moves when told to, which makes timing logic
//! reproducible in tests and headless tools.

use std::cell::Cell;
use std::fmt;
use std::time::{Duration, Instant};

/// A source of monotonic instants
pub trait Clock {
    /// Sample the current instant
    fn now(&self) -> Instant;
}

/// The process-wide monotonic clock
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that stands still until advanced explicitly
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    /// Move the clock forward by `ms` milliseconds
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Move the clock forward by an arbitrary amount
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("now", &self.now.get())
            .finish()
    }
}
