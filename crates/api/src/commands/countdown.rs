//! Countdown commands

use std::time::{Duration, Instant};

use marquee_common::time::format::format_duration;
use marquee_domain::CountdownState;
use tracing::debug;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Get the latest countdown state
pub fn get_countdown(ctx: &AppContext) -> CountdownState {
    let command_name = "countdown::get_countdown";
    let start = Instant::now();

    let state = ctx.countdown_state();
    match state.remaining() {
        Some(remaining) => debug!(
            command = command_name,
            days = remaining.days,
            hours = remaining.hours,
            minutes = remaining.minutes,
            seconds = remaining.seconds,
            "Countdown snapshot"
        ),
        None => debug!(command = command_name, "Countdown snapshot: complete"),
    }

    log_command_execution(command_name, start.elapsed(), true);
    state
}

/// Human-readable time until the event, or `None` once it has started
pub fn time_until_event(ctx: &AppContext) -> Option<String> {
    ctx.countdown_state()
        .remaining()
        .map(|r| format_duration(Duration::from_secs(r.total_seconds().max(0) as u64)))
}
