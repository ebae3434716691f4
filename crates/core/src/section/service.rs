//! Section tracking service - core business logic

use std::collections::HashMap;
use std::sync::Arc;

use marquee_domain::{Rect, SectionId};
use parking_lot::Mutex;

use super::engine::compute_active_section;
use super::ports::ViewportGateway;

/// Section tracking service
///
/// Holds the previously selected section (seeded with the first section)
/// and recomputes the selection from fresh viewport geometry on every
/// scroll signal.
pub struct SectionTrackerService {
    viewport: Arc<dyn ViewportGateway>,
    probe_offset: f64,
    current: Mutex<SectionId>,
}

impl SectionTrackerService {
    /// Create a new tracker reading geometry through the given gateway
    pub fn new(viewport: Arc<dyn ViewportGateway>, probe_offset: f64) -> Self {
        Self { viewport, probe_offset, current: Mutex::new(SectionId::Home) }
    }

    /// Recompute the active section from current viewport geometry
    pub async fn on_scroll(&self) -> SectionId {
        let mut rects: HashMap<SectionId, Rect> = HashMap::new();
        for id in SectionId::ORDERED {
            if let Some(rect) = self.viewport.section_rect(id).await {
                rects.insert(id, rect);
            }
        }

        let previous = *self.current.lock();
        let next = compute_active_section(&rects, previous, self.probe_offset);
        *self.current.lock() = next;
        next
    }

    /// The most recently selected section
    pub fn current(&self) -> SectionId {
        *self.current.lock()
    }

    /// Overwrite the selection (optimistic update from navigation)
    ///
    /// The next scroll signal recomputes from real geometry and wins.
    pub fn set_current(&self, id: SectionId) {
        *self.current.lock() = id;
    }
}
