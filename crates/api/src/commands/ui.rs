//! UI state commands

use std::time::Instant;

use marquee_domain::SectionId;
use serde::Serialize;
use tracing::debug;

use crate::ui::ConfettiPhase;
use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Everything the renderer needs to paint the page chrome
#[derive(Debug, Clone, Serialize)]
pub struct UiSnapshot {
    pub loading: bool,
    pub menu_open: bool,
    pub confetti_phase: ConfettiPhase,
    pub confetti_pieces: u32,
    pub confetti_recycles: bool,
    pub back_to_top_visible: bool,
    pub active_section: SectionId,
}

/// Toggle the navigation menu, returning the new state
pub fn toggle_menu(ctx: &AppContext) -> bool {
    let command_name = "ui::toggle_menu";
    let start = Instant::now();

    let open = ctx.ui.lock().toggle_menu();
    debug!(command = command_name, open, "Menu toggled");

    log_command_execution(command_name, start.elapsed(), true);
    open
}

/// Snapshot the view-owned flags and derived visibility state
pub fn ui_snapshot(ctx: &AppContext) -> UiSnapshot {
    let command_name = "ui::ui_snapshot";
    let start = Instant::now();

    let (loading, menu_open, confetti) = {
        let ui = ctx.ui.lock();
        (ui.is_loading(), ui.is_menu_open(), ui.confetti())
    };

    let snapshot = UiSnapshot {
        loading,
        menu_open,
        confetti_phase: confetti,
        confetti_pieces: confetti.piece_count(),
        confetti_recycles: confetti.recycles(),
        back_to_top_visible: ctx.back_to_top_visible(),
        active_section: ctx.active_section(),
    };

    log_command_execution(command_name, start.elapsed(), true);
    snapshot
}
