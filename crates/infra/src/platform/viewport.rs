//! Simulated viewport adapter
//!
//! An in-process model of the rendered page: an ordered stack of section
//! blocks with heights, a scroll offset, and a viewport height. Geometry
//! queries answer the same way `getBoundingClientRect` would for a real
//! page, which lets the engine run and be tested without a renderer.

use async_trait::async_trait;
use marquee_core::ViewportGateway;
use marquee_domain::{Rect, SectionId};
use parking_lot::RwLock;
use tracing::debug;

/// A rendered section and its layout height
#[derive(Debug, Clone, Copy)]
pub struct SectionBlock {
    pub id: SectionId,
    pub height: f64,
}

struct ViewportModel {
    blocks: Vec<SectionBlock>,
    scroll_offset: f64,
    viewport_height: f64,
}

impl ViewportModel {
    fn offset_top(&self, id: SectionId) -> Option<f64> {
        let mut cursor = 0.0;
        for block in &self.blocks {
            if block.id == id {
                return Some(cursor);
            }
            cursor += block.height;
        }
        None
    }

    fn document_height(&self) -> f64 {
        self.blocks.iter().map(|b| b.height).sum()
    }

    fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport_height).max(0.0)
    }
}

/// Simulated viewport
///
/// Sections stack from document offset zero in the order given; an absent
/// section is simply unmounted and reports no geometry.
pub struct SimulatedViewport {
    model: RwLock<ViewportModel>,
}

impl SimulatedViewport {
    /// Default viewport height of the simulation
    pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;

    /// Create a viewport over the given section stack
    pub fn new(blocks: Vec<SectionBlock>) -> Self {
        Self {
            model: RwLock::new(ViewportModel {
                blocks,
                scroll_offset: 0.0,
                viewport_height: Self::DEFAULT_VIEWPORT_HEIGHT,
            }),
        }
    }

    /// Create a viewport with all six sections at typical page heights
    pub fn with_default_layout() -> Self {
        Self::new(vec![
            SectionBlock { id: SectionId::Home, height: 960.0 },
            SectionBlock { id: SectionId::Details, height: 1280.0 },
            SectionBlock { id: SectionId::Venue, height: 1100.0 },
            SectionBlock { id: SectionId::Dress, height: 1040.0 },
            SectionBlock { id: SectionId::Menu, height: 980.0 },
            SectionBlock { id: SectionId::Rsvp, height: 860.0 },
        ])
    }

    /// Move the scroll position, clamped to the scrollable range
    pub fn set_scroll_offset(&self, offset: f64) {
        let mut model = self.model.write();
        let clamped = offset.clamp(0.0, model.max_scroll());
        model.scroll_offset = clamped;
    }

    /// Remove a section from the layout (simulates an unmounted region)
    pub fn unmount(&self, id: SectionId) {
        let mut model = self.model.write();
        model.blocks.retain(|b| b.id != id);
        debug!(section = %id, "Section unmounted from simulated viewport");
    }

    /// Total document height of the current layout
    pub fn document_height(&self) -> f64 {
        self.model.read().document_height()
    }
}

#[async_trait]
impl ViewportGateway for SimulatedViewport {
    async fn scroll_offset(&self) -> f64 {
        self.model.read().scroll_offset
    }

    async fn section_rect(&self, id: SectionId) -> Option<Rect> {
        let model = self.model.read();
        model.offset_top(id).map(|top| {
            let viewport_top = top - model.scroll_offset;
            let height = model
                .blocks
                .iter()
                .find(|b| b.id == id)
                .map(|b| b.height)
                .unwrap_or_default();
            Rect { top: viewport_top, bottom: viewport_top + height }
        })
    }

    async fn section_offset_top(&self, id: SectionId) -> Option<f64> {
        self.model.read().offset_top(id)
    }

    async fn scroll_to(&self, offset: f64) {
        // Smooth scrolling collapses to an immediate jump in the simulation
        self.set_scroll_offset(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sections_stack_in_order() {
        let viewport = SimulatedViewport::with_default_layout();
        assert_eq!(viewport.section_offset_top(SectionId::Home).await, Some(0.0));
        assert_eq!(viewport.section_offset_top(SectionId::Details).await, Some(960.0));
        assert_eq!(viewport.section_offset_top(SectionId::Venue).await, Some(2240.0));
    }

    #[tokio::test]
    async fn rect_tracks_scroll_offset() {
        let viewport = SimulatedViewport::with_default_layout();
        viewport.set_scroll_offset(1000.0);

        let rect = viewport.section_rect(SectionId::Details).await.unwrap();
        assert_eq!(rect.top, -40.0);
        assert_eq!(rect.bottom, 1240.0);
    }

    #[tokio::test]
    async fn scroll_is_clamped_to_document() {
        let viewport = SimulatedViewport::new(vec![
            SectionBlock { id: SectionId::Home, height: 500.0 },
            SectionBlock { id: SectionId::Rsvp, height: 500.0 },
        ]);

        viewport.set_scroll_offset(-50.0);
        assert_eq!(viewport.scroll_offset().await, 0.0);

        viewport.set_scroll_offset(10_000.0);
        let max = 1000.0 - SimulatedViewport::DEFAULT_VIEWPORT_HEIGHT;
        assert_eq!(viewport.scroll_offset().await, max);
    }

    #[tokio::test]
    async fn unmounted_section_reports_no_geometry() {
        let viewport = SimulatedViewport::with_default_layout();
        viewport.unmount(SectionId::Dress);

        assert_eq!(viewport.section_rect(SectionId::Dress).await, None);
        assert_eq!(viewport.section_offset_top(SectionId::Dress).await, None);
        // Later sections shift up to fill the gap
        assert_eq!(viewport.section_offset_top(SectionId::Menu).await, Some(3340.0));
    }

    #[tokio::test]
    async fn scroll_to_jumps_immediately() {
        let viewport = SimulatedViewport::with_default_layout();
        viewport.scroll_to(2240.0).await;
        assert_eq!(viewport.scroll_offset().await, 2240.0);

        let rect = viewport.section_rect(SectionId::Venue).await.unwrap();
        assert_eq!(rect.top, 0.0);
    }
}
