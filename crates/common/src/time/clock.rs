//! Wall-clock abstraction for testability
//!
//! Services that derive state from the current time read it through the
//! [`Clock`] trait instead of calling `Utc::now()` directly, so tests can
//! drive them with a deterministic clock (see
//! [`crate::testing::MockClock`]).
//!
//! # Examples
//!
//! ```
//! use marquee_common::time::{Clock, SystemClock};
//!
//! let clock = SystemClock;
//! let now = clock.now();
//! assert!(now.timestamp() > 0);
//! ```

use chrono::{DateTime, Utc};

/// Trait for reading the current wall-clock time
pub trait Clock: Send + Sync {
    /// Get the current wall-clock time
    fn now(&self) -> DateTime<Utc>;
}

/// Real system clock implementation
///
/// Use this in production code.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
