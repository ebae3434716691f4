//! Common error types and utilities
//!
//! Standardized error patterns that appear across multiple modules, so that
//! module-specific error enums can compose with them instead of duplicating
//! the same variants.
//!
//! Module-specific errors should **compose** with `CommonError` rather than
//! redefining common patterns:
//!
//! ```rust,ignore
//! #[derive(Debug, Error)]
//! pub enum SchedulerError {
//!     #[error("Scheduler already running")]
//!     AlreadyRunning,
//!
//!     // Embed common errors
//!     #[error(transparent)]
//!     Common(#[from] CommonError),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Cross-cutting error patterns shared by all modules
#[derive(Debug, Error)]
pub enum CommonError {
    /// An operation exceeded its deadline
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// A lock could not be acquired or was poisoned
    #[error("Lock error: {0}")]
    Lock(String),

    /// Encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invariant violation or bug
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Severity levels for monitoring and log-level selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Expected, recoverable conditions
    Info,
    /// Degraded but functional
    Warning,
    /// Operation failed
    Error,
    /// Requires immediate attention
    Critical,
}

impl CommonError {
    /// Classify the error for monitoring and log-level selection
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Timeout(_) => ErrorSeverity::Warning,
            Self::Lock(_) | Self::Serialization(_) | Self::Config(_) => ErrorSeverity::Error,
            Self::Internal(_) => ErrorSeverity::Critical,
        }
    }

    /// Whether retrying the failed operation can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Lock(_))
    }
}
