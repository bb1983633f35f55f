// ABOUTME: Lifestyle recommendation generation from assessment thresholds
// ABOUTME: Produces typed recommendation entries and the deterministic insight strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! Threshold-driven recommendation and insight generation.
//!
//! Every string here is deterministic; the only free-text content in the API
//! comes from the optional insight service in the server layer.

use serde::{Deserialize, Serialize};

use vitalis_core::models::AssessmentInput;

use crate::constants::{lifestyle, status};
use crate::evaluator::{is_healthy_sleep, BmiCategory};

/// How strongly acting on a recommendation would move the assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    /// Largest expected effect
    High,
    /// Moderate expected effect
    Medium,
    /// Small expected effect
    Low,
}

/// A single lifestyle recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Area of life the recommendation targets
    pub category: String,
    /// Actionable guidance text
    pub recommendation: String,
    /// Expected effect of acting on it
    pub impact: ImpactLevel,
}

impl Recommendation {
    fn new(category: &str, recommendation: String, impact: ImpactLevel) -> Self {
        Self {
            category: category.to_owned(),
            recommendation,
            impact,
        }
    }
}

/// Build the recommendation list for an assessment
#[must_use]
pub fn build(input: &AssessmentInput, bmi: f64, category: BmiCategory) -> Vec<Recommendation> {
    let mut entries = vec![weight_management(bmi, category)];

    if input.exercise_frequency < lifestyle::ACTIVE_SESSIONS_PER_WEEK {
        entries.push(Recommendation::new(
            "Physical Activity",
            "Aim for at least 3 exercise sessions per week to slow biological aging.".to_owned(),
            if input.exercise_frequency == 0.0 {
                ImpactLevel::High
            } else {
                ImpactLevel::Medium
            },
        ));
    }

    if !is_healthy_sleep(input.sleep_hours) {
        entries.push(Recommendation::new(
            "Sleep Hygiene",
            format!(
                "You average {:.1} hours of sleep; keeping it between 7 and 9 hours supports recovery.",
                input.sleep_hours
            ),
            ImpactLevel::Medium,
        ));
    }

    if input.stress_level > lifestyle::STRESS_HIGH_LIMIT {
        entries.push(Recommendation::new(
            "Stress Management",
            "Your stress level is high; daily relaxation practice would measurably lower your biological age.".to_owned(),
            ImpactLevel::High,
        ));
    }

    if input.smoking {
        entries.push(Recommendation::new(
            "Smoking",
            "Quitting smoking is the single largest improvement available to your projection.".to_owned(),
            ImpactLevel::High,
        ));
    }

    if input.diet_quality < lifestyle::DIET_ADEQUATE_LEVEL {
        entries.push(Recommendation::new(
            "Nutrition",
            "Improving diet quality toward whole foods adds points directly to your health score.".to_owned(),
            ImpactLevel::Medium,
        ));
    }

    entries
}

/// The BMI-derived entry present in every assessment
fn weight_management(bmi: f64, category: BmiCategory) -> Recommendation {
    let impact = match category {
        BmiCategory::Underweight | BmiCategory::Obese => ImpactLevel::High,
        BmiCategory::Overweight => ImpactLevel::Medium,
        BmiCategory::Normal => ImpactLevel::Low,
    };

    Recommendation::new(
        "Weight Management",
        format!(
            "Your BMI ({bmi:.1}) indicates you're {}. Consider maintaining a balanced diet.",
            category.label()
        ),
        impact,
    )
}

/// Cognition-focused observations for the extended assessment
#[must_use]
pub fn cognitive_insights(input: &AssessmentInput) -> Vec<String> {
    let mut insights = Vec::new();

    if input.mental_activity >= 3.0 {
        insights.push(
            "Regular mental activity is keeping your cognitive age below your calendar age."
                .to_owned(),
        );
    } else {
        insights.push(
            "Adding mental challenges like reading or puzzles can lower your cognitive age."
                .to_owned(),
        );
    }

    if input.stress_level > lifestyle::STRESS_HIGH_LIMIT {
        insights.push(
            "Sustained high stress accelerates cognitive aging; relaxation practice has outsized benefit here.".to_owned(),
        );
    }

    if !is_healthy_sleep(input.sleep_hours) {
        insights.push(
            "Sleep outside the 7-9 hour band reduces overnight memory consolidation.".to_owned(),
        );
    }

    insights
}

/// Whole-profile guidance strings for the extended assessment
#[must_use]
pub fn health_guidance(input: &AssessmentInput, health_score: f64) -> Vec<String> {
    let mut guidance = Vec::new();

    if health_score >= status::GOOD_THRESHOLD {
        guidance.push("Your overall profile is strong; keep your current routine.".to_owned());
    } else if health_score >= status::FAIR_THRESHOLD {
        guidance.push(
            "Your profile is fair; one or two habit changes would move you into the good band."
                .to_owned(),
        );
    } else {
        guidance.push(
            "Your profile has significant room to improve; start with the highest-impact recommendations.".to_owned(),
        );
    }

    if input.smoking {
        guidance.push("Smoking cessation would remove the largest single penalty on your score.".to_owned());
    }
    if input.alcohol_frequency > lifestyle::ALCOHOL_RISK_LIMIT {
        guidance
            .push("Reducing alcohol below three occasions per week lifts your projection.".to_owned());
    }

    guidance
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_weight_management_always_first() {
        let entries = build(&AssessmentInput::default(), 24.2, BmiCategory::Normal);
        assert_eq!(entries[0].category, "Weight Management");
        assert!(entries[0].recommendation.contains("24.2"));
        assert!(entries[0].recommendation.contains("normal"));
        assert_eq!(entries[0].impact, ImpactLevel::Low);
    }

    #[test]
    fn test_obese_bmi_is_high_impact() {
        let entry = weight_management(32.0, BmiCategory::Obese);
        assert_eq!(entry.impact, ImpactLevel::High);
        assert!(entry.recommendation.contains("obese"));
    }

    #[test]
    fn test_risky_profile_collects_entries() {
        let input = AssessmentInput {
            exercise_frequency: 0.0,
            sleep_hours: 5.0,
            stress_level: 9.0,
            smoking: true,
            diet_quality: 1.0,
            ..AssessmentInput::default()
        };
        let entries = build(&input, 24.2, BmiCategory::Normal);
        let categories: Vec<&str> = entries.iter().map(|e| e.category.as_str()).collect();

        assert_eq!(
            categories,
            vec![
                "Weight Management",
                "Physical Activity",
                "Sleep Hygiene",
                "Stress Management",
                "Smoking",
                "Nutrition"
            ]
        );
    }

    #[test]
    fn test_impact_serializes_as_label() {
        let json = serde_json::to_value(ImpactLevel::High).unwrap();
        assert_eq!(json, "High");
    }

    #[test]
    fn test_guidance_follows_score_band() {
        let good = health_guidance(&AssessmentInput::default(), 85.0);
        assert!(good[0].contains("strong"));

        let poor = health_guidance(&AssessmentInput::default(), 30.0);
        assert!(poor[0].contains("room to improve"));
    }
}
