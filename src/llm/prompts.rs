// ABOUTME: Prompt construction for the narrative insight completion
// ABOUTME: Builds the system framing and the per-assessment user prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! Prompt text for the insight service.

use vitalis_intelligence::ExtendedAssessment;

/// System framing for the insight completion
#[must_use]
pub const fn insight_system_prompt() -> &'static str {
    "You are a concise health coach. Given a user's computed age and longevity \
     metrics, write a short encouraging narrative (3-4 sentences) highlighting \
     their strongest factor and the single change with the most impact. Do not \
     repeat raw numbers back verbatim, do not give medical diagnoses, and do \
     not mention that you are an AI."
}

/// Render an assessment into the user prompt for the insight completion
#[must_use]
pub fn build_insight_prompt(assessment: &ExtendedAssessment) -> String {
    let base = &assessment.base;
    let longevity = &assessment.longevity_analysis;

    format!(
        "Assessment summary:\n\
         - chronological age: {}\n\
         - biological age: {}\n\
         - cognitive age: {}\n\
         - health score: {} ({:?})\n\
         - BMI: {} ({:?})\n\
         - exercise level: {:?}, stress impact: {:?}, sleep quality: {:?}\n\
         - projected biological age in 5 years: {}\n\
         - potential improvement: {} years\n\
         - longevity factors: genetic risk {:.2}, lifestyle quality {:.2}, \
         environmental impact {:.2}, stress resilience {:.2}",
        base.chronological_age,
        base.biological_age,
        base.cognitive_age,
        base.health_score,
        base.health_status,
        base.metrics.bmi,
        base.metrics.bmi_category,
        base.metrics.exercise_level,
        base.metrics.stress_impact,
        base.metrics.sleep_quality,
        base.age_prediction.biological_age_in_5_years,
        base.age_prediction.potential_improvement,
        longevity.genetic_risk,
        longevity.lifestyle_quality,
        longevity.environmental_impact,
        longevity.stress_resilience,
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::NaiveDate;
    use vitalis_core::models::AssessmentInput;
    use vitalis_intelligence::AssessmentEvaluator;

    #[test]
    fn test_prompt_carries_key_metrics() {
        let input = AssessmentInput {
            birth_date: Some("1990-01-01".into()),
            ..AssessmentInput::default()
        };
        let evaluator = AssessmentEvaluator::with_reference_date(
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        );
        let assessment = evaluator.evaluate_extended(&input).unwrap();

        let prompt = build_insight_prompt(&assessment);
        assert!(prompt.contains("chronological age: 35"));
        assert!(prompt.contains("longevity factors"));
    }
}
