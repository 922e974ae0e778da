//! Viability scoring engine.
//!
//! The engine is a pure function over an `OrganAssessment`: each raw
//! measurement is rescaled onto a common [0,1] "goodness" axis (1.0 best),
//! the goodness values are combined as a fixed weighted sum, and the
//! resulting score is banded into a transplant decision. All tables live in
//! `ScoringConfig` so the reference values can be swapped out in tests.

use std::collections::BTreeMap;

use crate::application::risk;
use crate::domain::{Classification, OrganAssessment, ViabilityResult};
use crate::ports::ViabilityScorer;

/// Inclusive raw-value window for one feature, with scaling direction.
#[derive(Debug, Clone, Copy)]
pub struct FeatureRange {
    pub lo: f64,
    pub hi: f64,
    /// When set, a raw value at `lo` maps to goodness 1.0 instead of 0.0.
    pub lower_is_better: bool,
}

impl FeatureRange {
    const fn new(lo: f64, hi: f64, lower_is_better: bool) -> Self {
        Self {
            lo,
            hi,
            lower_is_better,
        }
    }

    /// Clamped min-max rescaling of a raw measurement onto [0,1] goodness.
    ///
    /// Values outside [lo, hi] are clamped first, so malformed or extreme
    /// readings degrade to boundary goodness instead of corrupting the
    /// aggregate. This never fails and never leaves [0,1] for finite input.
    #[must_use]
    pub fn goodness(&self, raw: f64) -> f64 {
        let scaled = ((raw - self.lo) / (self.hi - self.lo)).clamp(0.0, 1.0);
        if self.lower_is_better {
            1.0 - scaled
        } else {
            scaled
        }
    }
}

/// Per-feature normalization windows.
#[derive(Debug, Clone, Copy)]
pub struct NormalizationRanges {
    pub stiffness: FeatureRange,
    pub resistive_index: FeatureRange,
    pub perfusion_uniformity: FeatureRange,
    pub echogenicity: FeatureRange,
    pub edema_index: FeatureRange,
    pub kdpi: FeatureRange,
    pub cold_ischemia_time: FeatureRange,
    pub donor_age: FeatureRange,
}

impl Default for NormalizationRanges {
    fn default() -> Self {
        Self {
            stiffness: FeatureRange::new(0.0, 50.0, true),
            resistive_index: FeatureRange::new(0.4, 1.0, true),
            perfusion_uniformity: FeatureRange::new(0.0, 100.0, false),
            echogenicity: FeatureRange::new(1.0, 5.0, true),
            edema_index: FeatureRange::new(0.2, 0.6, true),
            kdpi: FeatureRange::new(0.0, 100.0, true),
            cold_ischemia_time: FeatureRange::new(0.0, 48.0, true),
            donor_age: FeatureRange::new(0.0, 90.0, true),
        }
    }
}

/// Design weights of the linear model. Sum to 1.0 so the aggregate stays
/// inside [0,1].
#[derive(Debug, Clone, Copy)]
pub struct FeatureWeights {
    pub stiffness: f64,
    pub resistive_index: f64,
    pub perfusion_uniformity: f64,
    pub echogenicity: f64,
    pub edema_index: f64,
    pub kdpi: f64,
    pub cold_ischemia_time: f64,
    pub donor_age: f64,
    pub cause_of_death: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            stiffness: 0.28,
            resistive_index: 0.22,
            perfusion_uniformity: 0.15,
            echogenicity: 0.10,
            edema_index: 0.05,
            kdpi: 0.10,
            cold_ischemia_time: 0.06,
            donor_age: 0.03,
            cause_of_death: 0.01,
        }
    }
}

impl FeatureWeights {
    /// The weight table keyed by feature name, as reported to clients in
    /// `feature_contributions`. These are the model's design weights, not a
    /// per-request attribution.
    #[must_use]
    pub fn as_table(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("stiffness".to_string(), self.stiffness),
            ("resistive_index".to_string(), self.resistive_index),
            (
                "perfusion_uniformity".to_string(),
                self.perfusion_uniformity,
            ),
            ("echogenicity".to_string(), self.echogenicity),
            ("edema_index".to_string(), self.edema_index),
            ("kdpi".to_string(), self.kdpi),
            ("cold_ischemia_time".to_string(), self.cold_ischemia_time),
            ("donor_age".to_string(), self.donor_age),
            ("cause_of_death".to_string(), self.cause_of_death),
        ])
    }
}

/// Score thresholds for the decision bands. Lower band edges are inclusive.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationBands {
    /// Scores below this are Decline
    pub marginal_at: u8,
    /// Scores at or above this are Accept
    pub accept_at: u8,
}

impl Default for ClassificationBands {
    fn default() -> Self {
        Self {
            marginal_at: 40,
            accept_at: 70,
        }
    }
}

impl ClassificationBands {
    /// Band an integer score into a decision. Deterministic, no overlap,
    /// no gaps.
    #[must_use]
    pub fn classify(&self, score: u8) -> Classification {
        if score < self.marginal_at {
            Classification::Decline
        } else if score < self.accept_at {
            Classification::Marginal
        } else {
            Classification::Accept
        }
    }
}

/// Immutable engine configuration, injected at construction.
#[derive(Debug, Clone, Copy)]
pub struct ScoringConfig {
    pub ranges: NormalizationRanges,
    pub weights: FeatureWeights,
    pub bands: ClassificationBands,
    /// Reported model confidence. A design constant, not derived.
    pub confidence: f64,
    /// Neutral KDPI percentile assumed when the field is absent
    pub kdpi_default: f64,
    /// Cause of death is not mapped to a score; it contributes this fixed
    /// neutral goodness regardless of value.
    pub cause_of_death_neutral: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            ranges: NormalizationRanges::default(),
            weights: FeatureWeights::default(),
            bands: ClassificationBands::default(),
            confidence: 0.85,
            kdpi_default: 50.0,
            cause_of_death_neutral: 0.5,
        }
    }
}

/// Per-feature goodness values after normalization, each in [0,1].
#[derive(Debug, Clone, Copy)]
struct NormalizedFeatures {
    stiffness: f64,
    resistive_index: f64,
    perfusion_uniformity: f64,
    echogenicity: f64,
    edema_index: f64,
    kdpi: f64,
    cold_ischemia_time: f64,
    donor_age: f64,
    cause_of_death: f64,
}

/// The canonical viability scoring engine.
///
/// Stateless and pure: identical input always yields identical output, and
/// a single instance can be shared across any number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Create an engine with the reference configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an alternate configuration.
    #[must_use]
    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    fn normalize(&self, assessment: &OrganAssessment) -> NormalizedFeatures {
        let ranges = &self.config.ranges;
        let kdpi_raw = assessment
            .kdpi_percentile
            .map_or(self.config.kdpi_default, f64::from);

        NormalizedFeatures {
            stiffness: ranges.stiffness.goodness(assessment.tissue_stiffness_kpa),
            resistive_index: ranges.resistive_index.goodness(assessment.resistive_index),
            perfusion_uniformity: ranges
                .perfusion_uniformity
                .goodness(assessment.perfusion_uniformity_pct),
            echogenicity: ranges
                .echogenicity
                .goodness(f64::from(assessment.echogenicity_grade)),
            edema_index: ranges.edema_index.goodness(assessment.edema_index),
            kdpi: ranges.kdpi.goodness(kdpi_raw),
            cold_ischemia_time: ranges
                .cold_ischemia_time
                .goodness(assessment.cold_ischemia_hours),
            donor_age: ranges.donor_age.goodness(f64::from(assessment.donor_age)),
            cause_of_death: self.config.cause_of_death_neutral,
        }
    }

    fn aggregate(&self, features: &NormalizedFeatures) -> f64 {
        let w = &self.config.weights;
        features.stiffness * w.stiffness
            + features.resistive_index * w.resistive_index
            + features.perfusion_uniformity * w.perfusion_uniformity
            + features.echogenicity * w.echogenicity
            + features.edema_index * w.edema_index
            + features.kdpi * w.kdpi
            + features.cold_ischemia_time * w.cold_ischemia_time
            + features.donor_age * w.donor_age
            + features.cause_of_death * w.cause_of_death
    }
}

impl ViabilityScorer for ScoringEngine {
    fn score(&self, assessment: &OrganAssessment) -> ViabilityResult {
        let normalized = self.normalize(assessment);
        let raw_score = self.aggregate(&normalized);

        // Truncation toward zero, not rounding. The reference behavior
        // truncates, which shifts fractional scores at band edges; `as`
        // truncates and saturates, and raw_score is within [0,1] anyway.
        let viability_score = (raw_score * 100.0) as u8;
        let classification = self.config.bands.classify(viability_score);
        let risk_factors = risk::detect_risk_factors(assessment);

        tracing::debug!(
            organ_type = %assessment.organ_type,
            score = viability_score,
            classification = %classification,
            "assessment scored"
        );

        ViabilityResult {
            viability_score,
            classification,
            confidence: self.config.confidence,
            risk_factors,
            feature_contributions: self.config.weights.as_table(),
        }
    }
}
