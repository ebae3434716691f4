//! Countdown engine - pure state computation
//!
//! Converts the current time and the fixed target moment into a
//! [`CountdownState`]. No side effects; the driving loop lives in the
//! infra layer.

use chrono::{DateTime, Utc};
use marquee_domain::{CountdownState, RemainingDuration};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Compute the countdown state for `now` against `target`
///
/// Each unit is derived independently from the total millisecond
/// difference by integer division and modulo, not by cascading
/// subtraction, so rounding never compounds across units. A difference of
/// zero or less is `Complete`.
pub fn compute_countdown(now: DateTime<Utc>, target: DateTime<Utc>) -> CountdownState {
    let diff_ms = target.signed_duration_since(now).num_milliseconds();

    if diff_ms <= 0 {
        return CountdownState::Complete;
    }

    CountdownState::Counting {
        remaining: RemainingDuration {
            days: diff_ms / MS_PER_DAY,
            hours: (diff_ms / MS_PER_HOUR) % 24,
            minutes: (diff_ms / MS_PER_MINUTE) % 60,
            seconds: (diff_ms / MS_PER_SECOND) % 60,
        },
    }
}
