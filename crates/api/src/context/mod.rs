//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use marquee_common::time::{Clock, SystemClock};
use marquee_core::{CountdownService, NavigationService, SectionTrackerService};
use marquee_domain::constants::{
    CONFETTI_FADE_DURATION_MS, CONFETTI_FULL_DURATION_MS, SPLASH_DURATION_MS,
};
use marquee_domain::{Config, CountdownState, MarqueeError, Result, SectionId};
use marquee_infra::scheduling::tick_scheduler::TickJob;
use marquee_infra::{
    InfraError, ScrollListener, ScrollListenerConfig, SimulatedViewport, TickScheduler,
    TickSchedulerConfig,
};
use parking_lot::Mutex;
use tokio::sync::{mpsc, watch, Mutex as AsyncMutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::ui::UiState;

/// Timeout for awaiting the reveal task on shutdown
const REVEAL_JOIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Tick job publishing fresh countdown state to the view layer
struct CountdownTickJob {
    service: Arc<CountdownService>,
    countdown_tx: Arc<watch::Sender<CountdownState>>,
}

#[async_trait]
impl TickJob for CountdownTickJob {
    async fn run(&self) -> std::result::Result<(), InfraError> {
        self.countdown_tx.send_replace(self.service.tick());
        Ok(())
    }
}

/// Application context - holds all services and dependencies
pub struct AppContext {
    // Core services
    pub config: Config,
    pub countdown_service: Arc<CountdownService>,
    pub section_tracker: Arc<SectionTrackerService>,
    pub navigation: Arc<NavigationService>,
    pub viewport: Arc<SimulatedViewport>,

    // View-owned flags
    pub ui: Arc<Mutex<UiState>>,

    // State streams
    countdown_rx: watch::Receiver<CountdownState>,
    section_tx: Arc<watch::Sender<SectionId>>,
    section_rx: watch::Receiver<SectionId>,
    back_to_top_rx: watch::Receiver<bool>,
    scroll_signal_tx: mpsc::UnboundedSender<()>,

    // Drivers
    tick_scheduler: AsyncMutex<TickScheduler>,
    scroll_listener: AsyncMutex<ScrollListener>,
    reveal_handle: AsyncMutex<Option<JoinHandle<()>>>,
    cancellation: CancellationToken,
}

impl AppContext {
    /// Create a context with the system clock and the default page layout
    pub fn new(config: Config) -> Result<Self> {
        Self::with_components(
            config,
            Arc::new(SystemClock),
            Arc::new(SimulatedViewport::with_default_layout()),
        )
    }

    /// Create a context with explicit clock and viewport
    ///
    /// Tests inject a mock clock and a custom layout here; production code
    /// goes through [`AppContext::new`].
    pub fn with_components(
        config: Config,
        clock: Arc<dyn Clock>,
        viewport: Arc<SimulatedViewport>,
    ) -> Result<Self> {
        config.validate()?;

        let countdown_service =
            Arc::new(CountdownService::new(clock, config.event.target));
        let section_tracker = Arc::new(SectionTrackerService::new(
            viewport.clone(),
            config.viewport.probe_offset,
        ));
        let navigation =
            Arc::new(NavigationService::new(viewport.clone(), config.viewport.header_offset));

        // State reinitializes from the true current time on every start
        let (countdown_tx, countdown_rx) = watch::channel(countdown_service.tick());
        let countdown_tx = Arc::new(countdown_tx);
        let (section_tx, section_rx) = watch::channel(section_tracker.current());
        let section_tx = Arc::new(section_tx);
        let (back_to_top_tx, back_to_top_rx) = watch::channel(false);
        let (scroll_signal_tx, scroll_signal_rx) = mpsc::unbounded_channel();

        let tick_scheduler = TickScheduler::with_config(
            TickSchedulerConfig {
                tick_interval: Duration::from_millis(config.countdown.tick_interval_ms),
                ..TickSchedulerConfig::default()
            },
            Arc::new(CountdownTickJob {
                service: countdown_service.clone(),
                countdown_tx,
            }),
        );

        let scroll_listener = ScrollListener::new(
            ScrollListenerConfig::default(),
            section_tracker.clone(),
            viewport.clone(),
            scroll_signal_rx,
            section_tx.clone(),
            Arc::new(back_to_top_tx),
        );

        Ok(Self {
            config,
            countdown_service,
            section_tracker,
            navigation,
            viewport,
            ui: Arc::new(Mutex::new(UiState::new())),
            countdown_rx,
            section_tx,
            section_rx,
            back_to_top_rx,
            scroll_signal_tx,
            tick_scheduler: AsyncMutex::new(tick_scheduler),
            scroll_listener: AsyncMutex::new(scroll_listener),
            reveal_handle: AsyncMutex::new(None),
            cancellation: CancellationToken::new(),
        })
    }

    /// Start the drivers: tick loop, scroll listener, reveal sequence
    pub async fn start(&self) -> Result<()> {
        self.tick_scheduler.lock().await.start().map_err(MarqueeError::from)?;
        self.scroll_listener.lock().await.start().map_err(MarqueeError::from)?;

        let ui = self.ui.clone();
        let cancel = self.cancellation.clone();
        let handle = tokio::spawn(async move {
            Self::run_reveal_sequence(ui, cancel).await;
        });
        *self.reveal_handle.lock().await = Some(handle);

        info!("Marquee engine started");
        Ok(())
    }

    /// Stop the drivers and release every background task
    pub async fn shutdown(&self) -> Result<()> {
        self.cancellation.cancel();

        self.tick_scheduler.lock().await.stop().await.map_err(MarqueeError::from)?;
        self.scroll_listener.lock().await.stop().await.map_err(MarqueeError::from)?;

        if let Some(handle) = self.reveal_handle.lock().await.take() {
            match tokio::time::timeout(REVEAL_JOIN_TIMEOUT, handle).await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => warn!(error = %err, "Reveal task join failed"),
                Err(_) => warn!("Reveal task did not finish in time"),
            }
        }

        info!("Marquee engine stopped");
        Ok(())
    }

    /// One sequential task walks splash and confetti through their phases
    async fn run_reveal_sequence(ui: Arc<Mutex<UiState>>, cancel: CancellationToken) {
        let steps =
            [SPLASH_DURATION_MS, CONFETTI_FULL_DURATION_MS, CONFETTI_FADE_DURATION_MS];
        for millis in steps {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Reveal sequence cancelled");
                    return;
                }
                _ = tokio::time::sleep(Duration::from_millis(millis)) => {}
            }
            ui.lock().advance_reveal();
        }
        debug!("Reveal sequence finished");
    }

    /// Latest published countdown state
    pub fn countdown_state(&self) -> CountdownState {
        *self.countdown_rx.borrow()
    }

    /// Latest published active section
    pub fn active_section(&self) -> SectionId {
        *self.section_rx.borrow()
    }

    /// Latest published back-to-top visibility
    pub fn back_to_top_visible(&self) -> bool {
        *self.back_to_top_rx.borrow()
    }

    /// Subscribe to countdown updates
    pub fn subscribe_countdown(&self) -> watch::Receiver<CountdownState> {
        self.countdown_rx.clone()
    }

    /// Subscribe to active-section updates
    pub fn subscribe_active_section(&self) -> watch::Receiver<SectionId> {
        self.section_rx.clone()
    }

    /// Subscribe to back-to-top visibility updates
    pub fn subscribe_back_to_top(&self) -> watch::Receiver<bool> {
        self.back_to_top_rx.clone()
    }

    /// Publish an active section directly (optimistic navigation update)
    pub(crate) fn publish_active_section(&self, id: SectionId) {
        self.section_tx.send_replace(id);
    }

    /// Hand a scroll signal to the listener
    pub(crate) fn scroll_signal(&self) -> Result<()> {
        self.scroll_signal_tx
            .send(())
            .map_err(|_| MarqueeError::Internal("scroll listener is not accepting signals".into()))
    }
}
