//! Rule-based cardiovascular risk stratification
//!
//! Implements the SELECT I decision table over four keyword-derived factors
//! and the lifestyle advice attached to each tier.

use crate::domain::models::{RiskAssessment, RiskFactors, RiskLevel};

const STROKE: &str = "stroke";
const HEART_ATTACK: &str = "heart attack";
const BLOOD_PRESSURE: &str = "blood pressure";
const DIABETES: &str = "diabetes";

impl RiskFactors {
    /// Derive factors from a free-text message (case-insensitive substring match)
    pub fn from_message(message: &str) -> Self {
        let lowered = message.to_lowercase();
        Self {
            history_of_stroke: lowered.contains(STROKE),
            history_of_mi: lowered.contains(HEART_ATTACK),
            hypertension: lowered.contains(BLOOD_PRESSURE),
            diabetes: lowered.contains(DIABETES),
        }
    }
}

/// Classify participants into low, medium, or high CVD risk
pub fn classify(factors: &RiskFactors) -> RiskLevel {
    if factors.history_of_stroke || factors.history_of_mi {
        RiskLevel::High
    } else if factors.hypertension || factors.diabetes {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Lifestyle advice for a risk level
pub fn advice(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "You are at high risk for cardiovascular disease. Please schedule a teleconsultation with a doctor immediately.",
        RiskLevel::Medium => "You are at moderate risk. Consider lifestyle changes such as reducing salt intake, exercising regularly, and quitting smoking.",
        RiskLevel::Low => "You are at low risk. Maintain a healthy lifestyle with a balanced diet and regular physical activity.",
    }
}

/// Run the full pipeline for one message
pub fn assess(message: &str) -> RiskAssessment {
    let factors = RiskFactors::from_message(message);
    let level = classify(&factors);
    RiskAssessment {
        factors,
        level,
        advice: advice(level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_risk_keywords() {
        assert_eq!(assess("I had a stroke last year").level, RiskLevel::High);
        assert_eq!(assess("My father had a HEART ATTACK").level, RiskLevel::High);
        // High wins over the medium-tier factors
        assert_eq!(
            assess("Stroke, diabetes and high blood pressure").level,
            RiskLevel::High
        );
    }

    #[test]
    fn test_medium_risk_keywords() {
        assert_eq!(
            assess("I have high blood pressure").level,
            RiskLevel::Medium
        );
        assert_eq!(assess("Type 2 Diabetes").level, RiskLevel::Medium);
    }

    #[test]
    fn test_low_risk_default() {
        assert_eq!(assess("I feel fine").level, RiskLevel::Low);
        assert_eq!(assess("").level, RiskLevel::Low);
        // Keywords must appear as contiguous substrings
        assert_eq!(assess("my heart, after the attack").level, RiskLevel::Low);
        assert_eq!(assess("blood and pressure").level, RiskLevel::Low);
    }

    #[test]
    fn test_substring_match_inside_words() {
        let factors = RiskFactors::from_message("heatstroke");
        assert!(factors.history_of_stroke);
        assert_eq!(classify(&factors), RiskLevel::High);
    }

    #[test]
    fn test_factor_extraction() {
        let factors = RiskFactors::from_message("Blood Pressure and diabetes");
        assert_eq!(
            factors,
            RiskFactors {
                history_of_stroke: false,
                history_of_mi: false,
                hypertension: true,
                diabetes: true,
            }
        );
    }

    #[test]
    fn test_decision_table_exhaustive() {
        for bits in 0u8..16 {
            let factors = RiskFactors {
                history_of_stroke: bits & 1 != 0,
                history_of_mi: bits & 2 != 0,
                hypertension: bits & 4 != 0,
                diabetes: bits & 8 != 0,
            };
            let expected = if bits & 0b0011 != 0 {
                RiskLevel::High
            } else if bits & 0b1100 != 0 {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            };
            assert_eq!(classify(&factors), expected, "factors: {:?}", factors);
        }
    }

    #[test]
    fn test_advice_depends_only_on_level() {
        assert_eq!(assess("stroke").advice, assess("heart attack").advice);
        assert_eq!(assess("stroke").advice, advice(RiskLevel::High));
        assert!(advice(RiskLevel::Medium).starts_with("You are at moderate risk."));
        assert!(advice(RiskLevel::Low).starts_with("You are at low risk."));
    }
}
