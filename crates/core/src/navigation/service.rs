//! Navigation service - scroll commands over the viewport port

use std::sync::Arc;

use marquee_domain::SectionId;
use tracing::{debug, warn};

use crate::section::ports::ViewportGateway;

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The viewport was commanded to scroll
    Scrolled,
    /// The requested section is not rendered; nothing happened
    SectionUnavailable,
}

/// Navigation service
///
/// Requests are total: an unrendered target is a logged no-op, never an
/// error, so a half-mounted page can never wedge navigation.
pub struct NavigationService {
    viewport: Arc<dyn ViewportGateway>,
    header_offset: f64,
}

impl NavigationService {
    /// Create a navigation service with the fixed header height
    pub fn new(viewport: Arc<dyn ViewportGateway>, header_offset: f64) -> Self {
        Self { viewport, header_offset }
    }

    /// Scroll the viewport so `id` sits just below the fixed header
    pub async fn scroll_to_section(&self, id: SectionId) -> NavigationOutcome {
        match self.viewport.section_offset_top(id).await {
            Some(offset_top) => {
                let destination = (offset_top - self.header_offset).max(0.0);
                debug!(section = %id, destination, "Scrolling to section");
                self.viewport.scroll_to(destination).await;
                NavigationOutcome::Scrolled
            }
            None => {
                warn!(section = %id, "Navigation target not rendered; ignoring");
                NavigationOutcome::SectionUnavailable
            }
        }
    }

    /// Scroll the viewport back to the top of the document
    pub async fn scroll_to_top(&self) {
        self.viewport.scroll_to(0.0).await;
    }
}
