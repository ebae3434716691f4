//! Navigation intents
//!
//! Thin outward commands to the viewport: jump to a named section or back
//! to the top of the page.

pub mod service;

pub use service::{NavigationOutcome, NavigationService};
