//! Time mocking for deterministic tests
//!
//! A [`MockClock`] implements the production [`Clock`] trait but is driven
//! manually, so tests can advance time without waiting and can even move it
//! backward to exercise fail-safe clamping behavior.

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;

use crate::time::Clock;

/// Mock clock for deterministic testing
///
/// Starts at a caller-chosen instant and only moves when told to.
/// `advance` and `rewind` take effect for every subsequent `now` call,
/// including through clones (clones share the same underlying time).
#[derive(Debug)]
pub struct MockClock {
    now: Mutex<DateTime<Utc>>,
}

impl MockClock {
    /// Create a mock clock pinned at the given instant
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(start) }
    }

    /// Create a mock clock at the given seconds since the UNIX epoch
    pub fn at_epoch_secs(secs: i64) -> Self {
        Self::new(Utc.timestamp_opt(secs, 0).single().unwrap_or_default())
    }

    /// Move the clock forward
    pub fn advance(&self, delta: Duration) {
        let mut guard = self.now.lock();
        *guard += chrono::Duration::from_std(delta).unwrap_or(chrono::Duration::zero());
    }

    /// Move the clock backward (for clock-adjustment scenarios)
    pub fn rewind(&self, delta: Duration) {
        let mut guard = self.now.lock();
        *guard -= chrono::Duration::from_std(delta).unwrap_or(chrono::Duration::zero());
    }

    /// Pin the clock to an exact instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock() = instant;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}
