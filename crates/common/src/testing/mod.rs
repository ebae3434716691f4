//! Testing utilities and helpers
//!
//! This module provides test tooling shared by the workspace:
//! - **[`time`]**: deterministic clock for time-dependent tests
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//!
//! use marquee_common::testing::MockClock;
//! use marquee_common::time::Clock;
//!
//! let clock = MockClock::at_epoch_secs(1_000);
//! clock.advance(Duration::from_secs(5));
//! assert_eq!(clock.now().timestamp(), 1_005);
//! ```

pub mod time;

pub use time::MockClock;
