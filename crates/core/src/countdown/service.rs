//! Countdown service - latching wrapper around the engine

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use marquee_common::time::Clock;
use marquee_domain::CountdownState;
use tracing::info;

use super::engine::compute_countdown;

/// Countdown service
///
/// Reads time through the injected [`Clock`] and latches completion:
/// once a tick observes the target as reached, every later tick reports
/// `Complete`, even if the clock is adjusted backward. Fail-safe - clamp,
/// never uncount.
pub struct CountdownService {
    clock: Arc<dyn Clock>,
    target: DateTime<Utc>,
    completed: AtomicBool,
}

impl CountdownService {
    /// Create a new countdown service for the given target moment
    pub fn new(clock: Arc<dyn Clock>, target: DateTime<Utc>) -> Self {
        Self { clock, target, completed: AtomicBool::new(false) }
    }

    /// Recompute the countdown state from the current time
    pub fn tick(&self) -> CountdownState {
        if self.completed.load(Ordering::Acquire) {
            return CountdownState::Complete;
        }

        let state = compute_countdown(self.clock.now(), self.target);
        if state.is_complete() {
            self.completed.store(true, Ordering::Release);
            info!(target = %self.target, "Countdown reached its target");
        }
        state
    }

    /// The moment being counted down to
    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Whether a tick has already observed the target as reached
    pub fn is_complete(&self) -> bool {
        self.completed.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::TimeZone;
    use marquee_common::testing::MockClock;
    use marquee_domain::RemainingDuration;

    use super::*;

    fn target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 15, 17, 0, 0).single().unwrap()
    }

    fn service_at(start: DateTime<Utc>) -> (Arc<MockClock>, CountdownService) {
        let clock = Arc::new(MockClock::new(start));
        let service = CountdownService::new(clock.clone(), target());
        (clock, service)
    }

    #[test]
    fn counts_down_while_target_is_ahead() {
        let (_clock, service) = service_at(target() - chrono::Duration::hours(1));
        assert_eq!(
            service.tick().remaining(),
            Some(RemainingDuration { days: 0, hours: 1, minutes: 0, seconds: 0 })
        );
        assert!(!service.is_complete());
    }

    #[test]
    fn ticks_track_the_advancing_clock() {
        let (clock, service) = service_at(target() - chrono::Duration::seconds(3));
        assert_eq!(service.tick().remaining().unwrap().seconds, 3);
        clock.advance(Duration::from_secs(1));
        assert_eq!(service.tick().remaining().unwrap().seconds, 2);
    }

    #[test]
    fn completes_at_target() {
        let (clock, service) = service_at(target() - chrono::Duration::seconds(1));
        assert!(!service.tick().is_complete());
        clock.advance(Duration::from_secs(1));
        assert!(service.tick().is_complete());
    }

    #[test]
    fn completion_survives_clock_rewind() {
        let (clock, service) = service_at(target() + chrono::Duration::seconds(5));
        assert!(service.tick().is_complete());

        // Wall clock adjusted backward below the target
        clock.rewind(Duration::from_secs(3_600));
        assert!(service.tick().is_complete());
        assert!(service.is_complete());
    }
}
