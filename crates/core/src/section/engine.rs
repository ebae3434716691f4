//! Active-section tracker - pure state computation
//!
//! Selects which named region is "in view" by testing each section's
//! rectangle against a fixed probe line near the viewport top.

use std::collections::HashMap;

use marquee_domain::{Rect, SectionId};

/// Compute the active section for the given section rectangles
///
/// Iterates the fixed reading order and selects the **last** section whose
/// rectangle spans the probe line (`top <= probe && bottom >= probe`).
/// Last match wins when layouts overlap at the probe line. When nothing
/// matches, the previous selection is retained.
pub fn compute_active_section(
    rects: &HashMap<SectionId, Rect>,
    previous: SectionId,
    probe_offset: f64,
) -> SectionId {
    let mut current = previous;
    for id in SectionId::ORDERED {
        if let Some(rect) = rects.get(&id) {
            if rect.contains_probe(probe_offset) {
                current = id;
            }
        }
    }
    current
}
