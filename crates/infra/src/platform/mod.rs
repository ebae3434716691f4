//! Platform adapters
//!
//! Concrete implementations of the core's viewport port. The only
//! adapter here is the simulated viewport; a browser-backed adapter
//! would slot in behind the same trait.

pub mod viewport;

pub use viewport::{SectionBlock, SimulatedViewport};
