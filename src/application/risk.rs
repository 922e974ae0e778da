//! Rule-based risk-factor detection.
//!
//! Rules run against the raw measurements, not the normalized goodness
//! values, and are deliberately decoupled from the scoring weights: a
//! feature can dominate the score yet carry no rule (perfusion, KDPI) and
//! vice versa. The score is a continuous aggregate; these flags mark
//! clinically actionable thresholds.

use crate::domain::OrganAssessment;

/// Sentinel entry emitted when no rule fires, keeping `risk_factors`
/// non-empty for the client.
pub const NO_RISK_FACTORS: &str = "No significant risk factors identified";

/// Evaluate the risk rules against one assessment.
///
/// Rules are independent and the output preserves rule order. Thresholds
/// are strict inequalities: a reading exactly at a threshold does not flag.
#[must_use]
pub fn detect_risk_factors(assessment: &OrganAssessment) -> Vec<String> {
    let mut factors = Vec::new();

    if assessment.resistive_index > 0.8 {
        factors.push("High Vascular Resistance (RI > 0.8)".to_string());
    }
    if assessment.tissue_stiffness_kpa > 28.0 {
        factors.push("Critical Tissue Stiffness (> 28 kPa)".to_string());
    }
    if assessment.edema_index > 0.39 {
        factors.push("Significant Edema (> 0.39)".to_string());
    }
    if assessment.cold_ischemia_hours > 24.0 {
        factors.push("Extended Cold Ischemia (> 24h)".to_string());
    }
    if assessment.donor_age > 60 {
        factors.push("Advanced Donor Age (> 60)".to_string());
    }

    if factors.is_empty() {
        factors.push(NO_RISK_FACTORS.to_string());
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_assessment() -> OrganAssessment {
        OrganAssessment {
            organ_type: "Kidney".to_string(),
            tissue_stiffness_kpa: 12.0,
            resistive_index: 0.65,
            shear_wave_velocity_ms: 2.0,
            perfusion_uniformity_pct: 92.0,
            echogenicity_grade: 1,
            edema_index: 0.22,
            cold_ischemia_hours: 10.0,
            donor_age: 35,
            kdpi_percentile: Some(20),
            cause_of_death: "Trauma".to_string(),
            warm_ischemia_minutes: 18.0,
        }
    }

    #[test]
    fn test_sentinel_when_no_rule_fires() {
        let factors = detect_risk_factors(&clean_assessment());
        assert_eq!(factors, vec![NO_RISK_FACTORS.to_string()]);
    }

    #[test]
    fn test_single_rule() {
        let mut assessment = clean_assessment();
        assessment.cold_ischemia_hours = 26.5;
        let factors = detect_risk_factors(&assessment);
        assert_eq!(factors, vec!["Extended Cold Ischemia (> 24h)".to_string()]);
    }

    #[test]
    fn test_rules_preserve_table_order() {
        let mut assessment = clean_assessment();
        assessment.donor_age = 71;
        assessment.resistive_index = 0.85;
        let factors = detect_risk_factors(&assessment);
        // RI rule precedes the age rule regardless of severity.
        assert_eq!(
            factors,
            vec![
                "High Vascular Resistance (RI > 0.8)".to_string(),
                "Advanced Donor Age (> 60)".to_string(),
            ]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut assessment = clean_assessment();
        assessment.resistive_index = 0.8;
        assessment.tissue_stiffness_kpa = 28.0;
        assessment.edema_index = 0.39;
        assessment.cold_ischemia_hours = 24.0;
        assessment.donor_age = 60;
        let factors = detect_risk_factors(&assessment);
        assert_eq!(factors, vec![NO_RISK_FACTORS.to_string()]);
    }

    #[test]
    fn test_warm_ischemia_never_flags() {
        let mut assessment = clean_assessment();
        assessment.warm_ischemia_minutes = 500.0;
        let factors = detect_risk_factors(&assessment);
        assert_eq!(factors, vec![NO_RISK_FACTORS.to_string()]);
    }
}
