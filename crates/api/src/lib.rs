//! # Marquee App
//!
//! Application layer - view-facing commands and wiring.
//!
//! This crate contains:
//! - View commands (render layer → engine bridge)
//! - Application context (dependency injection)
//! - View-owned UI state (splash, confetti, menu, back-to-top)
//! - Main entry point and setup
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Exposes state streams and commands for a rendering collaborator

pub mod commands;
pub mod context;
pub mod ui;
pub mod utils;

// Re-export for convenience
pub use commands::countdown::get_countdown;
pub use commands::navigation::{navigate_to_section, report_scroll, scroll_to_top};
pub use commands::ui::{toggle_menu, ui_snapshot};
pub use context::AppContext;
pub use ui::{ConfettiPhase, UiState};
