//! Scheduler error types

use marquee_common::CommonError;
use marquee_domain::MarqueeError;
use thiserror::Error;

use crate::errors::InfraError;

/// Scheduler-specific errors
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Scheduler is already running
    #[error("Scheduler already running")]
    AlreadyRunning,

    /// Scheduler is not running
    #[error("Scheduler not running")]
    NotRunning,

    /// Task join failed
    #[error("Task join failed: {0}")]
    TaskJoinFailed(String),

    /// Cross-cutting failure (timeout, lock)
    #[error(transparent)]
    Common(#[from] CommonError),
}

impl From<SchedulerError> for InfraError {
    fn from(err: SchedulerError) -> Self {
        let domain_err = match err {
            SchedulerError::AlreadyRunning | SchedulerError::NotRunning => {
                MarqueeError::InvalidInput(err.to_string())
            }
            _ => MarqueeError::Internal(err.to_string()),
        };
        InfraError(domain_err)
    }
}

impl From<SchedulerError> for MarqueeError {
    fn from(err: SchedulerError) -> Self {
        InfraError::from(err).into()
    }
}

/// Convenience type alias for scheduler operations
pub type SchedulerResult<T> = Result<T, SchedulerError>;
