//! Viability assessment result types.
//!
//! Represents the output of the organ viability scoring engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Banded transplant decision derived from the viability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Score below 40: organ not recommended for transplant
    Decline,
    /// Score 40-69: usable under extended criteria, clinical judgement required
    Marginal,
    /// Score 70 and above: organ recommended for transplant
    Accept,
}

impl Classification {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Decline => "Decline - High-risk features, not recommended",
            Self::Marginal => "Marginal - Extended criteria, review advised",
            Self::Accept => "Accept - Suitable for transplant",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decline => write!(f, "Decline"),
            Self::Marginal => write!(f, "Marginal"),
            Self::Accept => write!(f, "Accept"),
        }
    }
}

/// Result of scoring one `OrganAssessment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViabilityResult {
    /// Aggregate viability score, 0-100
    pub viability_score: u8,

    /// Banded decision derived from the score
    pub classification: Classification,

    /// Model confidence. A fixed design constant, not derived per request.
    pub confidence: f64,

    /// Triggered risk-factor descriptions, in rule order. Never empty: a
    /// sentinel entry is emitted when no rule fires.
    pub risk_factors: Vec<String>,

    /// The engine's design weights keyed by feature name. A declaration of
    /// the model, not a per-request attribution.
    pub feature_contributions: BTreeMap<String, f64>,
}
