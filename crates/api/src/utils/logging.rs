//! Command execution logging

use std::time::Duration;

use marquee_common::time::format::format_duration_ms;
use marquee_domain::MarqueeError;
use tracing::{info, warn};

/// Log the outcome of a view command with its elapsed time
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    if success {
        info!(command, elapsed = %format_duration_ms(elapsed), "Command completed");
    } else {
        warn!(command, elapsed = %format_duration_ms(elapsed), "Command failed");
    }
}

/// Stable label for an error variant, for structured log fields
pub fn error_label(err: &MarqueeError) -> &'static str {
    match err {
        MarqueeError::Config(_) => "config",
        MarqueeError::InvalidInput(_) => "invalid_input",
        MarqueeError::NotFound(_) => "not_found",
        MarqueeError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(error_label(&MarqueeError::NotFound("x".into())), "not_found");
        assert_eq!(error_label(&MarqueeError::Internal("x".into())), "internal");
    }
}
