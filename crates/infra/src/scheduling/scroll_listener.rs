//! Scroll listener for the active-section recomputation.
//!
//! Consumes scroll signals from the embedding view layer and recomputes
//! the active section and the back-to-top visibility on every signal.
//! Signals carry no payload; the listener reads fresh geometry from the
//! viewport, the same way a browser scroll handler re-queries the DOM.
//! There is no debouncing: each recomputation is O(six sections).
//!
//! Same lifecycle rules as the tick scheduler: start/stop, cancellation
//! token, tracked join handle, timeout-wrapped shutdown.

use std::sync::Arc;
use std::time::Duration;

use marquee_common::CommonError;
use marquee_core::{SectionTrackerService, ViewportGateway};
use marquee_domain::constants::BACK_TO_TOP_THRESHOLD_PX;
use marquee_domain::SectionId;
use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::scheduling::error::{SchedulerError, SchedulerResult};

/// Configuration for the scroll listener.
#[derive(Debug, Clone)]
pub struct ScrollListenerConfig {
    /// Scroll offset beyond which the back-to-top control is shown.
    pub back_to_top_threshold: f64,
    /// Timeout for awaiting the listener task join handle on stop.
    pub join_timeout: Duration,
}

impl Default for ScrollListenerConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD_PX,
            join_timeout: Duration::from_secs(5),
        }
    }
}

/// Scroll listener with explicit lifecycle management.
pub struct ScrollListener {
    config: ScrollListenerConfig,
    tracker: Arc<SectionTrackerService>,
    viewport: Arc<dyn ViewportGateway>,
    section_tx: Arc<watch::Sender<SectionId>>,
    back_to_top_tx: Arc<watch::Sender<bool>>,
    signals: Arc<Mutex<mpsc::UnboundedReceiver<()>>>,
    listener_handle: Option<JoinHandle<()>>,
    cancellation: CancellationToken,
}

impl ScrollListener {
    /// Create a listener publishing over the given watch channels.
    pub fn new(
        config: ScrollListenerConfig,
        tracker: Arc<SectionTrackerService>,
        viewport: Arc<dyn ViewportGateway>,
        signals: mpsc::UnboundedReceiver<()>,
        section_tx: Arc<watch::Sender<SectionId>>,
        back_to_top_tx: Arc<watch::Sender<bool>>,
    ) -> Self {
        Self {
            config,
            tracker,
            viewport,
            section_tx,
            back_to_top_tx,
            signals: Arc::new(Mutex::new(signals)),
            listener_handle: None,
            cancellation: CancellationToken::new(),
        }
    }

    /// Start the listener, spawning the signal loop.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        self.cancellation = CancellationToken::new();
        let cancel = self.cancellation.clone();
        let config = self.config.clone();
        let tracker = self.tracker.clone();
        let viewport = self.viewport.clone();
        let section_tx = self.section_tx.clone();
        let back_to_top_tx = self.back_to_top_tx.clone();
        let signals = self.signals.clone();

        let handle = tokio::spawn(async move {
            let mut rx = signals.lock().await;
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!("Scroll listener cancelled");
                        break;
                    }
                    signal = rx.recv() => {
                        match signal {
                            Some(()) => {
                                let section = tracker.on_scroll().await;
                                let offset = viewport.scroll_offset().await;
                                let visible = offset > config.back_to_top_threshold;
                                // Back-to-top first so a section observer
                                // never reads a stale visibility flag
                                back_to_top_tx.send_replace(visible);
                                section_tx.send_replace(section);
                                debug!(section = %section, offset, "Scroll signal processed");
                            }
                            None => {
                                debug!("Scroll signal channel closed");
                                break;
                            }
                        }
                    }
                }
            }
        });

        self.listener_handle = Some(handle);
        info!("Scroll listener started");
        Ok(())
    }

    /// Stop the listener and wait for the signal loop to finish.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        self.cancellation.cancel();

        if let Some(handle) = self.listener_handle.take() {
            let join_timeout = self.config.join_timeout;
            match tokio::time::timeout(join_timeout, handle).await {
                Ok(join_result) => {
                    join_result.map_err(|e| SchedulerError::TaskJoinFailed(e.to_string()))?;
                }
                Err(_) => {
                    let err = CommonError::Timeout(join_timeout);
                    warn!(severity = ?err.severity(), "Scroll listener join timed out");
                    return Err(err.into());
                }
            }
        }

        // Stop listening for good: senders see the channel as closed
        self.signals.lock().await.close();

        info!("Scroll listener stopped");
        self.cancellation = CancellationToken::new();
        Ok(())
    }

    /// Returns true when the listener task is active.
    pub fn is_running(&self) -> bool {
        self.listener_handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if self.is_running() {
            warn!("ScrollListener dropped while running; cancelling tasks");
            self.cancellation.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use marquee_domain::constants::PROBE_OFFSET_PX;

    use super::*;
    use crate::platform::SimulatedViewport;

    struct Harness {
        listener: ScrollListener,
        viewport: Arc<SimulatedViewport>,
        signal_tx: mpsc::UnboundedSender<()>,
        section_rx: watch::Receiver<SectionId>,
        back_to_top_rx: watch::Receiver<bool>,
    }

    fn harness() -> Harness {
        let viewport = Arc::new(SimulatedViewport::with_default_layout());
        let tracker =
            Arc::new(SectionTrackerService::new(viewport.clone(), PROBE_OFFSET_PX));
        let (signal_tx, signal_rx) = mpsc::unbounded_channel();
        let (section_tx, section_rx) = watch::channel(SectionId::Home);
        let (back_to_top_tx, back_to_top_rx) = watch::channel(false);

        let listener = ScrollListener::new(
            ScrollListenerConfig::default(),
            tracker,
            viewport.clone(),
            signal_rx,
            Arc::new(section_tx),
            Arc::new(back_to_top_tx),
        );

        Harness { listener, viewport, signal_tx, section_rx, back_to_top_rx }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn scroll_signal_updates_watch_channels() {
        let mut h = harness();
        h.listener.start().expect("start succeeds");

        // Venue starts at document offset 2240
        h.viewport.set_scroll_offset(2240.0);
        h.signal_tx.send(()).expect("signal sent");

        h.section_rx.changed().await.expect("section update");
        assert_eq!(*h.section_rx.borrow(), SectionId::Venue);
        assert!(*h.back_to_top_rx.borrow());

        h.listener.stop().await.expect("stop succeeds");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn top_of_page_hides_back_to_top() {
        let mut h = harness();
        h.listener.start().expect("start succeeds");

        h.viewport.set_scroll_offset(0.0);
        h.signal_tx.send(()).expect("signal sent");

        h.section_rx.changed().await.ok();
        assert_eq!(*h.section_rx.borrow(), SectionId::Home);
        assert!(!*h.back_to_top_rx.borrow());

        h.listener.stop().await.expect("stop succeeds");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn double_start_is_rejected() {
        let mut h = harness();
        h.listener.start().expect("first start");
        let err = h.listener.start().expect_err("second start fails");
        assert!(matches!(err, SchedulerError::AlreadyRunning));
        h.listener.stop().await.expect("stop succeeds");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn signals_after_stop_are_rejected() {
        let mut h = harness();
        h.listener.start().expect("start succeeds");
        h.listener.stop().await.expect("stop succeeds");

        h.viewport.set_scroll_offset(5_000.0);
        assert!(h.signal_tx.send(()).is_err(), "stopped listener should reject signals");
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(*h.section_rx.borrow(), SectionId::Home);
    }
}
