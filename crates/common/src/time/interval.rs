//! Recurring intervals
//!
//! Thin wrapper over the tokio interval with an explicit missed-tick
//! policy. A tick is only handed out after the previous caller finished
//! awaiting it, so driving loops built on this never overlap their work.

use std::time::Duration;

use tokio::time::{Instant, Interval as TokioInterval, MissedTickBehavior};

/// Configuration for an interval
#[derive(Debug, Clone)]
pub struct IntervalConfig {
    /// Base duration for the interval
    pub period: Duration,

    /// Whether to skip missed ticks instead of bursting to catch up
    pub skip_missed_ticks: bool,
}

impl IntervalConfig {
    /// Create a new interval configuration
    pub fn new(period: Duration) -> Self {
        Self { period, skip_missed_ticks: false }
    }

    /// Set whether to skip missed ticks
    pub fn skip_missed_ticks(mut self, skip: bool) -> Self {
        self.skip_missed_ticks = skip;
        self
    }
}

/// A recurring interval with an explicit missed-tick policy
pub struct Interval {
    inner: TokioInterval,
}

impl Interval {
    /// Create a new interval
    pub fn new(config: IntervalConfig) -> Self {
        let mut inner = tokio::time::interval(config.period);
        inner.set_missed_tick_behavior(if config.skip_missed_ticks {
            MissedTickBehavior::Skip
        } else {
            MissedTickBehavior::Delay
        });
        Self { inner }
    }

    /// Create a simple interval with the delay policy
    pub fn simple(period: Duration) -> Self {
        Self::new(IntervalConfig::new(period))
    }

    /// Wait for the next tick
    pub async fn tick(&mut self) -> Instant {
        self.inner.tick().await
    }

    /// Reset the interval to start counting from now
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

/// Create a simple interval
pub fn interval(period: Duration) -> Interval {
    Interval::simple(period)
}
