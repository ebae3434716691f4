//! Configuration management
//!
//! The event target and the engine's fixed offsets are injected
//! configuration rather than literals baked into logic. Defaults mirror
//! the original event page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EVENT_TARGET, HEADER_OFFSET_PX, PROBE_OFFSET_PX, TICK_INTERVAL_MS,
};
use crate::errors::{MarqueeError, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub event: EventConfig,
    pub countdown: CountdownConfig,
    pub viewport: ViewportConfig,
}

/// The event being counted down to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Absolute moment of the event (RFC 3339 in config files)
    pub target: DateTime<Utc>,
}

/// Countdown engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    pub tick_interval_ms: u64,
}

/// Section tracking geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Probe line offset from the viewport top used by the in-view test
    pub probe_offset: f64,
    /// Fixed header height subtracted when scrolling to a section
    pub header_offset: f64,
}

fn default_target() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(DEFAULT_EVENT_TARGET)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

impl Default for EventConfig {
    fn default() -> Self {
        Self { target: default_target() }
    }
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self { tick_interval_ms: TICK_INTERVAL_MS }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { probe_offset: PROBE_OFFSET_PX, header_offset: HEADER_OFFSET_PX }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event: EventConfig::default(),
            countdown: CountdownConfig::default(),
            viewport: ViewportConfig::default(),
        }
    }
}

impl Config {
    /// Check cross-field invariants after loading
    ///
    /// # Errors
    /// Returns `MarqueeError::Config` when a value would make the engine
    /// inoperable (zero tick period, negative geometry).
    pub fn validate(&self) -> Result<()> {
        if self.countdown.tick_interval_ms == 0 {
            return Err(MarqueeError::Config("tick_interval_ms must be positive".into()));
        }
        if self.viewport.probe_offset < 0.0 {
            return Err(MarqueeError::Config("probe_offset must not be negative".into()));
        }
        if self.viewport.header_offset < 0.0 {
            return Err(MarqueeError::Config("header_offset must not be negative".into()));
        }
        Ok(())
    }
}
