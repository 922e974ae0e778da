//! Donor organ assessment input.
//!
//! One record per scoring call: created, scored, and discarded. There is no
//! identity beyond the call itself and nothing is persisted.

use serde::{Deserialize, Serialize};

/// Raw clinical and ultrasound measurements for a single donor organ.
///
/// Field names are the wire contract with the interactive client; renaming
/// a field is a breaking API change. Out-of-range numeric values are
/// accepted here and clamped by the engine's normalizer; only structurally
/// invalid input (non-finite floats) is rejected, and only at the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganAssessment {
    /// Organ type, e.g. "Kidney", "Liver", "Heart", "Lung". Metadata only,
    /// not used in the scoring math.
    pub organ_type: String,

    /// Elastography tissue stiffness in kPa (clinically 0-50+)
    pub tissue_stiffness_kpa: f64,

    /// Doppler resistive index (clinically 0.0-1.2)
    pub resistive_index: f64,

    /// Shear wave velocity in m/s. Informational only, not scored.
    pub shear_wave_velocity_ms: f64,

    /// Perfusion uniformity as a percentage (0-100)
    pub perfusion_uniformity_pct: f64,

    /// Echogenicity grade (1-5, higher is more abnormal)
    pub echogenicity_grade: u8,

    /// Parenchymal edema index (clinically 0.0-1.0)
    pub edema_index: f64,

    /// Cold ischemia time in hours (0-48+)
    pub cold_ischemia_hours: f64,

    /// Donor age in years
    pub donor_age: u32,

    /// KDPI percentile (0-100, lower is better). Absent means unknown and
    /// scores as the neutral 50th percentile.
    #[serde(default)]
    pub kdpi_percentile: Option<u8>,

    /// Free-form cause of death, e.g. "Trauma", "CVA", "Anoxia"
    pub cause_of_death: String,

    /// Warm ischemia time in minutes. Captured for the clinical narrative,
    /// not scored.
    pub warm_ischemia_minutes: f64,
}

impl OrganAssessment {
    /// Validate that the assessment is structurally sound.
    ///
    /// Range checks are deliberately absent: the engine clamps extreme
    /// readings to boundary goodness instead of rejecting them. Only
    /// non-finite floats are refused, since they would poison the
    /// aggregate.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let floats = [
            ("tissue_stiffness_kpa", self.tissue_stiffness_kpa),
            ("resistive_index", self.resistive_index),
            ("shear_wave_velocity_ms", self.shear_wave_velocity_ms),
            ("perfusion_uniformity_pct", self.perfusion_uniformity_pct),
            ("edema_index", self.edema_index),
            ("cold_ischemia_hours", self.cold_ischemia_hours),
            ("warm_ischemia_minutes", self.warm_ischemia_minutes),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                errors.push(format!("{name} must be finite, got {value}"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
