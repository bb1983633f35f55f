// ABOUTME: Formula weights and physiological thresholds for the assessment pipeline
// ABOUTME: Single source of truth for BMI bands, score adjustments, and longevity weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! Named constants for every threshold and weight in the scoring formulas.

/// BMI category boundaries (kg/m²)
pub mod bmi {
    /// Below this value is Underweight
    pub const UNDERWEIGHT_LIMIT: f64 = 18.5;
    /// Below this value (and at or above the underweight limit) is Normal
    pub const NORMAL_LIMIT: f64 = 25.0;
    /// Below this value (and at or above the normal limit) is Overweight
    pub const OVERWEIGHT_LIMIT: f64 = 30.0;
}

/// Health score adjustments
pub mod score {
    /// Starting score before adjustments
    pub const BASE_SCORE: f64 = 100.0;
    /// Lower clamp bound
    pub const MIN_SCORE: f64 = 0.0;
    /// Upper clamp bound
    pub const MAX_SCORE: f64 = 100.0;
    /// Fallback when the computation degenerates (non-finite input)
    pub const DEFAULT_SCORE: f64 = 50.0;

    /// Penalty for BMI below the underweight limit or above the overweight limit
    pub const BMI_PENALTY: f64 = 15.0;
    /// Bonus for BMI in the underweight-to-normal band
    pub const BMI_BONUS: f64 = 10.0;
    /// Points per weekly exercise session
    pub const EXERCISE_POINTS_PER_SESSION: f64 = 3.0;
    /// Cap on the exercise bonus
    pub const EXERCISE_BONUS_CAP: f64 = 15.0;
    /// Bonus/penalty magnitude for sleep inside/outside the healthy band
    pub const SLEEP_ADJUSTMENT: f64 = 10.0;
    /// Penalty per stress level point
    pub const STRESS_PENALTY_PER_LEVEL: f64 = 2.0;
    /// Points per diet quality level
    pub const DIET_POINTS_PER_LEVEL: f64 = 3.0;
    /// Penalty for smoking
    pub const SMOKING_PENALTY: f64 = 20.0;
    /// Penalty for alcohol frequency above the risk limit
    pub const ALCOHOL_PENALTY: f64 = 10.0;
}

/// Sleep band shared by the score, labels, and longevity factors
pub mod sleep {
    /// Lower bound of the healthy sleep band, hours
    pub const HEALTHY_MIN_HOURS: f64 = 7.0;
    /// Upper bound of the healthy sleep band, hours
    pub const HEALTHY_MAX_HOURS: f64 = 9.0;
}

/// Lifestyle risk thresholds
pub mod lifestyle {
    /// Alcohol frequency above this value is penalized
    pub const ALCOHOL_RISK_LIMIT: f64 = 2.0;
    /// Exercise sessions per week at or above this value count as Active
    pub const ACTIVE_SESSIONS_PER_WEEK: f64 = 3.0;
    /// Stress above this level has High impact
    pub const STRESS_HIGH_LIMIT: f64 = 7.0;
    /// Stress above this level (and at or below the high limit) has Medium impact
    pub const STRESS_MEDIUM_LIMIT: f64 = 4.0;
    /// Diet quality below this level triggers a nutrition recommendation
    pub const DIET_ADEQUATE_LEVEL: f64 = 3.0;
}

/// Age derivation weights
pub mod aging {
    /// Years of biological age spread across the full health score range
    pub const BIOLOGICAL_MODIFIER_SPAN_YEARS: f64 = 5.0;
    /// Weight of mental activity in the cognitive modifier
    pub const COGNITIVE_MENTAL_WEIGHT: f64 = 0.6;
    /// Weight of stress in the cognitive modifier
    pub const COGNITIVE_STRESS_WEIGHT: f64 = 0.4;
    /// Divisor scaling the cognitive modifier into years
    pub const COGNITIVE_SCALE: f64 = 5.0;

    /// Horizon of the age projection, years
    pub const PROJECTION_YEARS: i32 = 5;
    /// Future impact contribution of smoking
    pub const SMOKING_IMPACT: u32 = 2;
    /// Future impact contribution of risky alcohol use
    pub const ALCOHOL_IMPACT: u32 = 1;
    /// Future impact contribution of insufficient exercise
    pub const INACTIVITY_IMPACT: u32 = 1;
    /// Potential improvement per future impact point
    pub const IMPROVEMENT_PER_IMPACT_POINT: u32 = 2;
}

/// Health status bands over the health score
pub mod status {
    /// Scores at or above this are Good
    pub const GOOD_THRESHOLD: f64 = 70.0;
    /// Scores at or above this (and below the good threshold) are Fair
    pub const FAIR_THRESHOLD: f64 = 50.0;
}

/// Longevity factor weights (all factors clamped to [0, 1])
pub mod longevity {
    /// Baseline genetic risk before lifestyle adjustments
    pub const GENETIC_RISK_BASE: f64 = 0.5;
    /// Genetic risk reduction per weekly exercise session
    pub const GENETIC_EXERCISE_RELIEF: f64 = 0.02;
    /// Genetic risk reduction per diet quality level
    pub const GENETIC_DIET_RELIEF: f64 = 0.03;
    /// Genetic risk added by smoking
    pub const GENETIC_SMOKING_RISK: f64 = 0.10;
    /// Genetic risk added per alcohol point above the risk limit
    pub const GENETIC_ALCOHOL_RISK: f64 = 0.02;

    /// Weight of exercise in lifestyle quality
    pub const LIFESTYLE_EXERCISE_WEIGHT: f64 = 0.3;
    /// Weight of diet in lifestyle quality
    pub const LIFESTYLE_DIET_WEIGHT: f64 = 0.3;
    /// Weight of healthy sleep in lifestyle quality
    pub const LIFESTYLE_SLEEP_WEIGHT: f64 = 0.2;
    /// Weight of low stress in lifestyle quality
    pub const LIFESTYLE_STRESS_WEIGHT: f64 = 0.2;
    /// Lifestyle quality penalty for smoking
    pub const LIFESTYLE_SMOKING_PENALTY: f64 = 0.15;

    /// Baseline environmental score
    pub const ENVIRONMENT_BASE: f64 = 0.6;
    /// Environmental score gained per weekly outdoor/exercise session
    pub const ENVIRONMENT_EXERCISE_GAIN: f64 = 0.04;
    /// Environmental score lost to smoking
    pub const ENVIRONMENT_SMOKING_LOSS: f64 = 0.05;
    /// Environmental score lost per alcohol point above the risk limit
    pub const ENVIRONMENT_ALCOHOL_LOSS: f64 = 0.02;

    /// Weight of low stress in stress resilience
    pub const RESILIENCE_CALM_WEIGHT: f64 = 0.6;
    /// Weight of mental activity in stress resilience
    pub const RESILIENCE_MENTAL_WEIGHT: f64 = 0.25;
    /// Weight of healthy sleep in stress resilience
    pub const RESILIENCE_SLEEP_WEIGHT: f64 = 0.15;

    /// Mental activity level treated as fully engaged
    pub const MENTAL_ACTIVITY_CEILING: f64 = 5.0;
    /// Stress scale upper bound
    pub const STRESS_CEILING: f64 = 10.0;
    /// Exercise sessions per week treated as daily
    pub const EXERCISE_CEILING: f64 = 7.0;
    /// Diet quality scale upper bound
    pub const DIET_CEILING: f64 = 5.0;
}
