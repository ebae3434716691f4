//! Port interfaces for viewport access
//!
//! These traits define the boundary between core business logic and the
//! rendering collaborator that owns scroll state and section geometry.

use async_trait::async_trait;
use marquee_domain::{Rect, SectionId};

/// Trait for reading and commanding the viewport
///
/// Rendered sections report a bounding rectangle relative to the viewport
/// top; sections that are not mounted report nothing.
#[async_trait]
pub trait ViewportGateway: Send + Sync {
    /// Current scroll offset from the top of the document
    async fn scroll_offset(&self) -> f64;

    /// Viewport-relative bounding rectangle of a section, if rendered
    async fn section_rect(&self, id: SectionId) -> Option<Rect>;

    /// Document offset of a section's top edge, if rendered
    async fn section_offset_top(&self, id: SectionId) -> Option<f64>;

    /// Smoothly scroll the document to the given offset
    async fn scroll_to(&self, offset: f64);
}
