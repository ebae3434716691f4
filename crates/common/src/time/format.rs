//! Human-readable duration formatting
//!
//! Provides utilities to format durations into human-readable strings.

use std::time::Duration;

/// Format a duration into a human-readable string
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use marquee_common::time::format::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(5)), "5s");
/// assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
/// assert_eq!(format_duration(Duration::from_secs(90065)), "1d 1h 1m 5s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();

    if total_secs == 0 {
        return format!("{}ms", duration.as_millis());
    }

    let days = total_secs / 86400;
    let hours = (total_secs % 86400) / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    let components = [(days, "d"), (hours, "h"), (minutes, "m"), (seconds, "s")];
    let start_index =
        components.iter().position(|(value, _)| *value > 0).unwrap_or(components.len() - 1);

    components[start_index..]
        .iter()
        .map(|(value, suffix)| format!("{value}{suffix}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a duration with milliseconds precision
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use marquee_common::time::format::format_duration_ms;
///
/// assert_eq!(format_duration_ms(Duration::from_millis(1500)), "1s 500ms");
/// assert_eq!(format_duration_ms(Duration::from_millis(500)), "500ms");
/// ```
pub fn format_duration_ms(duration: Duration) -> String {
    let total_millis = duration.as_millis();
    let seconds = total_millis / 1000;
    let millis = total_millis % 1000;

    if seconds == 0 {
        return format!("{millis}ms");
    }

    let formatted = format_duration(Duration::from_secs(seconds as u64));

    if millis > 0 {
        format!("{formatted} {millis}ms")
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for time::format.
    use super::*;

    /// Validates `format_duration` behavior across unit boundaries.
    ///
    /// Assertions:
    /// - Confirms sub-second durations render as milliseconds.
    /// - Confirms leading zero components are omitted.
    #[test]
    fn test_format_duration_boundaries() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_secs(59)), "59s");
        assert_eq!(format_duration(Duration::from_secs(60)), "1m 0s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h 0m 0s");
        assert_eq!(format_duration(Duration::from_secs(86400)), "1d 0h 0m 0s");
    }

    /// Validates `format_duration_ms` behavior for mixed precision.
    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration_ms(Duration::from_millis(1000)), "1s");
        assert_eq!(format_duration_ms(Duration::from_millis(61001)), "1m 1s 1ms");
    }
}
