//! Ports layer: Trait definitions at the engine boundary.
//!
//! Following Hexagonal Architecture, these traits define the seam between
//! the gateway adapter and the scoring engine.

mod scorer;

pub use scorer::ViabilityScorer;
