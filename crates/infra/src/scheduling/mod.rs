//! Scheduling infrastructure for the engine's driving signals
//!
//! This module wires the pure state computations to their triggers:
//! - Tick scheduling (1-second countdown recomputation)
//! - Scroll listening (active-section recomputation per scroll signal)
//!
//! All schedulers follow the same runtime rules:
//! - Explicit lifecycle management (start/stop)
//! - Join handles for spawned tasks
//! - Cancellation token support
//! - Timeout wrapping on async shutdown operations
//! - Structured tracing

pub mod error;
pub mod scroll_listener;
pub mod tick_scheduler;

pub use error::{SchedulerError, SchedulerResult};
pub use scroll_listener::{ScrollListener, ScrollListenerConfig};
pub use tick_scheduler::{TickJob, TickScheduler, TickSchedulerConfig};
