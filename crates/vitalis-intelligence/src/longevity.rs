// ABOUTME: Longevity factor analysis for the extended assessment payload
// ABOUTME: Four bounded [0,1] weighted sums over the questionnaire fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! Longevity factor scores.
//!
//! Each factor is a weighted sum of questionnaire fields clamped to [0, 1]
//! and monotone in the obvious direction: more exercise never raises genetic
//! risk, more stress never raises resilience.

use serde::{Deserialize, Serialize};

use vitalis_core::models::AssessmentInput;

use crate::constants::{lifestyle, longevity};
use crate::evaluator::is_healthy_sleep;

/// Bounded [0, 1] longevity factor scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LongevityAnalysis {
    /// Genetic-equivalent risk from current habits; lower is better
    pub genetic_risk: f64,
    /// Composite quality of daily habits; higher is better
    pub lifestyle_quality: f64,
    /// Environmental exposure score; higher is better
    pub environmental_impact: f64,
    /// Capacity to absorb stress; higher is better
    pub stress_resilience: f64,
}

impl LongevityAnalysis {
    /// Compute all four factors from a questionnaire record
    #[must_use]
    pub fn from_input(input: &AssessmentInput) -> Self {
        let smoking = if input.smoking { 1.0 } else { 0.0 };
        let excess_alcohol = (input.alcohol_frequency - lifestyle::ALCOHOL_RISK_LIMIT).max(0.0);
        let sleep_in_range = if is_healthy_sleep(input.sleep_hours) {
            1.0
        } else {
            0.0
        };
        let exercise = input.exercise_frequency.min(longevity::EXERCISE_CEILING);
        let diet = input.diet_quality.min(longevity::DIET_CEILING);
        let calm = 1.0 - input.stress_level.min(longevity::STRESS_CEILING) / longevity::STRESS_CEILING;
        let mental = input.mental_activity.min(longevity::MENTAL_ACTIVITY_CEILING)
            / longevity::MENTAL_ACTIVITY_CEILING;

        let genetic_risk = longevity::GENETIC_RISK_BASE
            - longevity::GENETIC_EXERCISE_RELIEF * exercise
            - longevity::GENETIC_DIET_RELIEF * diet
            + longevity::GENETIC_SMOKING_RISK * smoking
            + longevity::GENETIC_ALCOHOL_RISK * excess_alcohol;

        let lifestyle_quality = longevity::LIFESTYLE_EXERCISE_WEIGHT
            * (exercise / longevity::EXERCISE_CEILING)
            + longevity::LIFESTYLE_DIET_WEIGHT * (diet / longevity::DIET_CEILING)
            + longevity::LIFESTYLE_SLEEP_WEIGHT * sleep_in_range
            + longevity::LIFESTYLE_STRESS_WEIGHT * calm
            - longevity::LIFESTYLE_SMOKING_PENALTY * smoking;

        let environmental_impact = longevity::ENVIRONMENT_BASE
            + longevity::ENVIRONMENT_EXERCISE_GAIN * exercise
            - longevity::ENVIRONMENT_SMOKING_LOSS * smoking
            - longevity::ENVIRONMENT_ALCOHOL_LOSS * excess_alcohol;

        let stress_resilience = longevity::RESILIENCE_CALM_WEIGHT * calm
            + longevity::RESILIENCE_MENTAL_WEIGHT * mental
            + longevity::RESILIENCE_SLEEP_WEIGHT * sleep_in_range;

        Self {
            genetic_risk: unit_clamp(genetic_risk),
            lifestyle_quality: unit_clamp(lifestyle_quality),
            environmental_impact: unit_clamp(environmental_impact),
            stress_resilience: unit_clamp(stress_resilience),
        }
    }
}

/// Clamp a factor score into [0, 1]; non-finite values collapse to 0
fn unit_clamp(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
