//! Domain types and models

use serde::{Deserialize, Serialize};

/// Identifier of a named content region on the event page
///
/// The set is fixed and ordered; [`SectionId::ORDERED`] is the reading
/// order used by the active-section tracker's last-match-wins rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Home,
    Details,
    Venue,
    Dress,
    Menu,
    Rsvp,
}

impl SectionId {
    /// All sections in reading order
    pub const ORDERED: [Self; 6] =
        [Self::Home, Self::Details, Self::Venue, Self::Dress, Self::Menu, Self::Rsvp];

    /// Stable lowercase name, matching the page anchor ids
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Details => "details",
            Self::Venue => "venue",
            Self::Dress => "dress",
            Self::Menu => "menu",
            Self::Rsvp => "rsvp",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Viewport-relative bounding box of a rendered section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    /// Whether the probe line at `offset` units from the viewport top
    /// falls within this rectangle
    pub fn contains_probe(&self, offset: f64) -> bool {
        self.top <= offset && self.bottom >= offset
    }
}

/// Decomposed time remaining until the event target
///
/// Each unit is derived independently from the total difference, so the
/// fields always satisfy `hours < 24`, `minutes < 60`, `seconds < 60` and
/// are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingDuration {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl RemainingDuration {
    /// Reconstruct the total number of seconds this breakdown represents
    pub fn total_seconds(&self) -> i64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

/// Observable countdown status
///
/// Transitions once, irreversibly, from `Counting` to `Complete` when the
/// current time reaches the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CountdownState {
    /// Target is still in the future
    Counting { remaining: RemainingDuration },
    /// Target has been reached
    Complete,
}

impl CountdownState {
    /// Whether the countdown has reached the target
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// The remaining breakdown, if still counting
    pub fn remaining(&self) -> Option<RemainingDuration> {
        match self {
            Self::Counting { remaining } => Some(*remaining),
            Self::Complete => None,
        }
    }
}
