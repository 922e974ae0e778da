//! Application layer: The scoring engine.
//!
//! This module owns the normalization rules, weight table, classification
//! bands, and risk-factor rules that turn an `OrganAssessment` into a
//! `ViabilityResult`.

pub mod risk;
mod scoring;

pub use scoring::{
    ClassificationBands, FeatureRange, FeatureWeights, NormalizationRanges, ScoringConfig,
    ScoringEngine,
};
