//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Countdown configuration
pub const DEFAULT_EVENT_TARGET: &str = "2025-05-15T17:00:00Z";
pub const TICK_INTERVAL_MS: u64 = 1000;

// Section tracking geometry (viewport units)
pub const PROBE_OFFSET_PX: f64 = 100.0;
pub const HEADER_OFFSET_PX: f64 = 70.0;
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

// Startup splash
pub const SPLASH_DURATION_MS: u64 = 2000;

// Confetti lifecycle
pub const CONFETTI_FULL_DURATION_MS: u64 = 5000;
pub const CONFETTI_FADE_DURATION_MS: u64 = 3000;
pub const CONFETTI_FULL_PIECES: u32 = 200;
pub const CONFETTI_FADING_PIECES: u32 = 50;
