//! Wall-clock abstraction for determinism.
//!
//! Statistics submissions carry creation timestamps; injecting the clock
//! keeps those deterministic in tests. The wall clock is distinct from the
//! logical timeline of [`crate::scheduler::Scheduler`].

use chrono::{DateTime, Utc};

/// Abstraction over system time.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
