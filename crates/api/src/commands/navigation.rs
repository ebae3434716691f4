//! Navigation commands

use std::time::Instant;

use marquee_core::NavigationOutcome;
use marquee_domain::{Result, SectionId};
use tracing::{debug, info, warn};

use crate::utils::logging::{error_label, log_command_execution};
use crate::AppContext;

/// Scroll the page to a named section
///
/// On success the active section is updated immediately (optimistic; the
/// next scroll signal recomputes from real geometry) and any open menu is
/// closed. An unrendered target leaves everything unchanged.
pub async fn navigate_to_section(ctx: &AppContext, id: SectionId) -> NavigationOutcome {
    let command_name = "navigation::navigate_to_section";
    let start = Instant::now();

    info!(command = command_name, section = %id, "Navigating to section");
    let outcome = ctx.navigation.scroll_to_section(id).await;

    if outcome == NavigationOutcome::Scrolled {
        ctx.section_tracker.set_current(id);
        ctx.publish_active_section(id);
        ctx.ui.lock().close_menu();
        if ctx.scroll_signal().is_err() {
            debug!(command = command_name, "Listener offline; optimistic state stands");
        }
    }

    log_command_execution(command_name, start.elapsed(), true);
    outcome
}

/// Scroll the page back to the top
pub async fn scroll_to_top(ctx: &AppContext) {
    let command_name = "navigation::scroll_to_top";
    let start = Instant::now();

    ctx.navigation.scroll_to_top().await;
    if ctx.scroll_signal().is_err() {
        debug!(command = command_name, "Listener offline; scroll not recomputed");
    }

    log_command_execution(command_name, start.elapsed(), true);
}

/// Report a new scroll position from the rendering collaborator
///
/// Moves the simulated viewport and hands the listener a scroll signal.
/// Fails only when the engine has been shut down.
pub fn report_scroll(ctx: &AppContext, offset: f64) -> Result<()> {
    let command_name = "navigation::report_scroll";
    let start = Instant::now();

    ctx.viewport.set_scroll_offset(offset);
    let result = ctx.scroll_signal();
    let success = result.is_ok();

    if let Err(ref err) = result {
        warn!(command = command_name, error = error_label(err), "Scroll signal rejected");
    }

    log_command_execution(command_name, start.elapsed(), success);
    result
}
