//! Active-section tracking
//!
//! Maps the scroll position of the viewport to the named content region
//! currently in view. [`engine`] holds the pure computation;
//! [`SectionTrackerService`] holds the previous selection and reads the
//! viewport through its port.

pub mod engine;
pub mod ports;
pub mod service;

pub use service::SectionTrackerService;
