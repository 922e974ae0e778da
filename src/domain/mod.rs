//! Domain layer: Core business types.
//!
//! This module contains pure Rust types with no framework dependencies.
//! All types are serializable; their field names are the wire contract
//! shared with the interactive client.

mod assessment;
mod viability;

pub use assessment::OrganAssessment;
pub use viability::{Classification, ViabilityResult};
