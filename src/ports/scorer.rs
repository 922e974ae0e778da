//! Scoring port: the contract the gateway consumes.

use crate::domain::{OrganAssessment, ViabilityResult};

/// A viability scorer maps one assessment to one result.
///
/// Implementations must be pure: identical input yields identical output,
/// with no I/O and no shared mutable state, so a single instance can be
/// invoked concurrently from any number of requests. Scoring is total over
/// structurally valid input and never fails; malformed input is the
/// gateway's problem, rejected before this trait is reached.
pub trait ViabilityScorer: Send + Sync {
    /// Score a single donor organ assessment.
    fn score(&self, assessment: &OrganAssessment) -> ViabilityResult;
}
