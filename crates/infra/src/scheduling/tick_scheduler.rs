//! Tick scheduler for the countdown recomputation.
//!
//! Runs a user-supplied job on a fixed period from a single task: the next
//! tick is only awaited after the current job finishes, so invocations are
//! strictly sequential and a slow job can never overlap the next one. Join
//! handles are tracked, cancellation is explicit, and shutdown operations
//! are wrapped in timeouts.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use marquee_infra::scheduling::{SchedulerResult, TickJob, TickScheduler};
//!
//! struct NoopJob;
//!
//! #[async_trait]
//! impl TickJob for NoopJob {
//!     async fn run(&self) -> Result<(), marquee_infra::InfraError> {
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> SchedulerResult<()> {
//! let mut scheduler = TickScheduler::new(Arc::new(NoopJob));
//! scheduler.start()?;
//! // ... application runs ...
//! scheduler.stop().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use marquee_common::time::format::format_duration_ms;
use marquee_common::time::{Interval, IntervalConfig};
use marquee_common::CommonError;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::errors::InfraError;
use crate::scheduling::error::{SchedulerError, SchedulerResult};

/// Trait representing the work executed on every tick.
#[async_trait]
pub trait TickJob: Send + Sync {
    /// Execute the job.
    async fn run(&self) -> Result<(), InfraError>;
}

/// Configuration for the tick scheduler.
#[derive(Debug, Clone)]
pub struct TickSchedulerConfig {
    /// Period between job executions.
    pub tick_interval: Duration,
    /// Timeout applied to a single job execution.
    pub job_timeout: Duration,
    /// Timeout for awaiting the loop task join handle on stop.
    pub join_timeout: Duration,
}

impl Default for TickSchedulerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1000),
            job_timeout: Duration::from_secs(5),
            join_timeout: Duration::from_secs(5),
        }
    }
}

/// Tick scheduler with explicit lifecycle management.
pub struct TickScheduler {
    config: TickSchedulerConfig,
    job: Arc<dyn TickJob>,
    loop_handle: Option<JoinHandle<()>>,
    cancellation: CancellationToken,
}

impl TickScheduler {
    /// Create a scheduler with the default configuration.
    pub fn new(job: Arc<dyn TickJob>) -> Self {
        Self::with_config(TickSchedulerConfig::default(), job)
    }

    /// Create a scheduler with a custom configuration.
    pub fn with_config(config: TickSchedulerConfig, job: Arc<dyn TickJob>) -> Self {
        Self { config, job, loop_handle: None, cancellation: CancellationToken::new() }
    }

    /// Start the scheduler, spawning the tick loop.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        self.cancellation = CancellationToken::new();
        let cancel = self.cancellation.clone();
        let config = self.config.clone();
        let job = self.job.clone();

        let handle = tokio::spawn(async move {
            Self::tick_loop(config, job, cancel).await;
        });

        self.loop_handle = Some(handle);
        info!(period = ?self.config.tick_interval, "Tick scheduler started");
        Ok(())
    }

    /// Stop the scheduler and wait for the tick loop to finish.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        self.cancellation.cancel();

        if let Some(handle) = self.loop_handle.take() {
            let join_timeout = self.config.join_timeout;
            match tokio::time::timeout(join_timeout, handle).await {
                Ok(join_result) => {
                    join_result.map_err(|e| SchedulerError::TaskJoinFailed(e.to_string()))?;
                }
                Err(_) => {
                    let err = CommonError::Timeout(join_timeout);
                    warn!(severity = ?err.severity(), "Tick loop join timed out");
                    return Err(err.into());
                }
            }
        }

        info!("Tick scheduler stopped");
        self.cancellation = CancellationToken::new();
        Ok(())
    }

    /// Returns true when the tick loop task is active.
    pub fn is_running(&self) -> bool {
        self.loop_handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    async fn tick_loop(config: TickSchedulerConfig, job: Arc<dyn TickJob>, cancel: CancellationToken) {
        // Skip missed ticks rather than bursting to catch up after a stall
        let mut interval =
            Interval::new(IntervalConfig::new(config.tick_interval).skip_missed_ticks(true));

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Tick loop cancelled");
                    break;
                }
                _ = interval.tick() => {
                    let started = Instant::now();

                    match tokio::time::timeout(config.job_timeout, job.run()).await {
                        Ok(Ok(())) => {
                            debug!(elapsed = %format_duration_ms(started.elapsed()), "Tick finished");
                        }
                        Ok(Err(err)) => {
                            error!(error = ?err, "Tick job failed");
                        }
                        Err(elapsed) => {
                            warn!(timeout = ?config.job_timeout, "Tick job timed out");
                            debug!(elapsed = ?elapsed, "Timeout details");
                        }
                    }
                }
            }
        }
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        if self.is_running() {
            warn!("TickScheduler dropped while running; cancelling tasks");
            self.cancellation.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingJob {
        runs: AtomicUsize,
    }

    impl CountingJob {
        fn new() -> Self {
            Self { runs: AtomicUsize::new(0) }
        }

        fn run_count(&self) -> usize {
            self.runs.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TickJob for CountingJob {
        async fn run(&self) -> Result<(), InfraError> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn fast_config() -> TickSchedulerConfig {
        TickSchedulerConfig {
            tick_interval: Duration::from_millis(20),
            job_timeout: Duration::from_secs(2),
            join_timeout: Duration::from_secs(2),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn lifecycle_runs_successfully() {
        let job = Arc::new(CountingJob::new());
        let mut scheduler = TickScheduler::with_config(fast_config(), job.clone());

        scheduler.start().expect("start succeeds");
        tokio::time::sleep(Duration::from_millis(100)).await;
        scheduler.stop().await.expect("stop succeeds");

        assert!(job.run_count() >= 2);
        assert!(!scheduler.is_running());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn double_start_is_rejected() {
        let job = Arc::new(CountingJob::new());
        let mut scheduler = TickScheduler::with_config(fast_config(), job);

        scheduler.start().expect("first start");
        let err = scheduler.start().expect_err("second start fails");
        assert!(matches!(err, SchedulerError::AlreadyRunning));
        scheduler.stop().await.expect("stop succeeds");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn stop_without_start_is_rejected() {
        let job = Arc::new(CountingJob::new());
        let mut scheduler = TickScheduler::with_config(fast_config(), job);

        let err = scheduler.stop().await.expect_err("stop fails");
        assert!(matches!(err, SchedulerError::NotRunning));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn restart_after_stop_succeeds() {
        let job = Arc::new(CountingJob::new());
        let mut scheduler = TickScheduler::with_config(fast_config(), job);

        scheduler.start().expect("start succeeds");
        scheduler.stop().await.expect("stop succeeds");
        assert!(!scheduler.is_running());

        scheduler.start().expect("start again");
        scheduler.stop().await.expect("stop again");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn ticks_stop_after_shutdown() {
        let job = Arc::new(CountingJob::new());
        let mut scheduler = TickScheduler::with_config(fast_config(), job.clone());

        scheduler.start().expect("start succeeds");
        tokio::time::sleep(Duration::from_millis(60)).await;
        scheduler.stop().await.expect("stop succeeds");

        let after_stop = job.run_count();
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(job.run_count(), after_stop);
    }
}
