// ABOUTME: Single-pass assessment pipeline from questionnaire input to assessment payloads
// ABOUTME: Computes ages, bounded health score, BMI banding, labels, and the 5-year projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! Deterministic assessment evaluation.
//!
//! [`AssessmentEvaluator`] is the whole pipeline: validate, derive ages,
//! score, band, project. It takes an explicit reference date so callers (and
//! tests) control what "today" means; the HTTP layer passes the current UTC
//! date.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use vitalis_core::errors::{AppError, AppResult};
use vitalis_core::models::AssessmentInput;

use crate::constants::{aging, bmi, lifestyle, score, sleep, status};
use crate::longevity::LongevityAnalysis;
use crate::recommendations::{self, Recommendation};

/// Health status band over the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    /// Score at or above 70
    Good,
    /// Score in [50, 70)
    Fair,
    /// Score below 50
    Poor,
}

impl HealthStatus {
    /// Band a health score into a status
    #[must_use]
    pub fn from_score(health_score: f64) -> Self {
        if health_score >= status::GOOD_THRESHOLD {
            Self::Good
        } else if health_score >= status::FAIR_THRESHOLD {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// BMI category over the fixed WHO-style thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI at or above 30
    Obese,
}

impl BmiCategory {
    /// Band a BMI value into a category
    ///
    /// The partition is total and non-overlapping; each boundary value
    /// belongs to the upper band (18.5 is Normal, 25 is Overweight, 30 is
    /// Obese).
    #[must_use]
    pub fn from_bmi(value: f64) -> Self {
        if value < bmi::UNDERWEIGHT_LIMIT {
            Self::Underweight
        } else if value < bmi::NORMAL_LIMIT {
            Self::Normal
        } else if value < bmi::OVERWEIGHT_LIMIT {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Lowercase label used inside recommendation text
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

/// Weekly activity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseLevel {
    /// Three or more sessions per week
    Active,
    /// Fewer than three sessions per week
    Sedentary,
}

/// Stress impact label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressImpact {
    /// Stress level above 7
    High,
    /// Stress level in (4, 7]
    Medium,
    /// Stress level at or below 4
    Low,
}

impl StressImpact {
    /// Band a stress level into an impact label
    #[must_use]
    pub fn from_level(stress_level: f64) -> Self {
        if stress_level > lifestyle::STRESS_HIGH_LIMIT {
            Self::High
        } else if stress_level > lifestyle::STRESS_MEDIUM_LIMIT {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Sleep quality label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepQuality {
    /// Sleep inside the 7-9 hour band
    Good,
    /// Sleep outside the 7-9 hour band
    Poor,
}

/// Derived body and lifestyle metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentMetrics {
    /// Body mass index, one decimal
    pub bmi: f64,
    /// BMI category band
    pub bmi_category: BmiCategory,
    /// Weekly activity label
    pub exercise_level: ExerciseLevel,
    /// Stress impact label
    pub stress_impact: StressImpact,
    /// Sleep quality label
    pub sleep_quality: SleepQuality,
}

/// Five-year age projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgePrediction {
    /// Chronological age five years out
    pub age_in_5_years: i32,
    /// Projected biological age five years out, one decimal
    pub biological_age_in_5_years: f64,
    /// Years of biological age recoverable by fixing current risk habits
    pub potential_improvement: u32,
}

/// Base assessment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeAssessment {
    /// Completed calendar years since birth
    pub chronological_age: i32,
    /// Chronological age adjusted by the health score, one decimal
    pub biological_age: f64,
    /// Chronological age adjusted by mental activity and stress, one decimal
    pub cognitive_age: f64,
    /// Composite lifestyle score, clamped to [0, 100], one decimal
    pub health_score: f64,
    /// Status band over the health score
    pub health_status: HealthStatus,
    /// Lifestyle recommendations
    pub recommendations: Vec<Recommendation>,
    /// Five-year projection
    pub age_prediction: AgePrediction,
    /// Derived body and lifestyle metrics
    pub metrics: AssessmentMetrics,
}

/// Extended assessment payload with the longevity factor analysis
///
/// Supersets the base payload; `ai_insight` stays `None` until the server
/// layer attaches a narrative from the insight service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedAssessment {
    /// The base assessment fields, flattened into the same JSON object
    #[serde(flatten)]
    pub base: AgeAssessment,
    /// Bounded [0, 1] longevity factor scores
    pub longevity_analysis: LongevityAnalysis,
    /// Deterministic cognition-focused observations
    pub cognitive_insights: Vec<String>,
    /// Deterministic whole-profile guidance strings
    pub health_recommendations: Vec<String>,
    /// Optional AI narrative; null when the insight service is disabled or failed
    pub ai_insight: Option<String>,
}

/// Assessment evaluator for questionnaire records
#[derive(Debug, Clone, Copy)]
pub struct AssessmentEvaluator {
    /// Reference date used as "today" for age arithmetic
    today: NaiveDate,
}

impl Default for AssessmentEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentEvaluator {
    /// Create an evaluator anchored at the current UTC date
    #[must_use]
    pub fn new() -> Self {
        Self {
            today: Utc::now().date_naive(),
        }
    }

    /// Create an evaluator anchored at an explicit reference date
    #[must_use]
    pub const fn with_reference_date(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Evaluate the base assessment
    ///
    /// # Errors
    ///
    /// Returns a validation error if `birthDate` is missing, malformed, or in
    /// the future, or if a numeric field is outside its documented range.
    pub fn evaluate(&self, input: &AssessmentInput) -> AppResult<AgeAssessment> {
        let birth_date = input.parse_birth_date()?;
        input.validate()?;
        if birth_date > self.today {
            return Err(AppError::out_of_range("Birth date cannot be in the future"));
        }

        let chronological_age = self.chronological_age(birth_date);
        let bmi_value = Self::calculate_bmi(input.weight, input.height);
        let bmi_category = BmiCategory::from_bmi(bmi_value);
        let health_score = Self::calculate_health_score(input);

        let biological_age = f64::from(chronological_age)
            + (score::MAX_SCORE - health_score) / score::MAX_SCORE
                * aging::BIOLOGICAL_MODIFIER_SPAN_YEARS;

        let cognitive_modifier = (input.mental_activity * aging::COGNITIVE_MENTAL_WEIGHT
            - input.stress_level * aging::COGNITIVE_STRESS_WEIGHT)
            / aging::COGNITIVE_SCALE;
        let cognitive_age = f64::from(chronological_age) - cognitive_modifier;

        let future_impact = Self::future_health_impact(input);

        Ok(AgeAssessment {
            chronological_age,
            biological_age: round1(biological_age),
            cognitive_age: round1(cognitive_age),
            health_score: round1(health_score),
            health_status: HealthStatus::from_score(health_score),
            recommendations: recommendations::build(input, bmi_value, bmi_category),
            age_prediction: AgePrediction {
                age_in_5_years: chronological_age + aging::PROJECTION_YEARS,
                biological_age_in_5_years: round1(
                    biological_age + f64::from(aging::PROJECTION_YEARS) + f64::from(future_impact),
                ),
                potential_improvement: future_impact * aging::IMPROVEMENT_PER_IMPACT_POINT,
            },
            metrics: AssessmentMetrics {
                bmi: round1(bmi_value),
                bmi_category,
                exercise_level: if input.exercise_frequency >= lifestyle::ACTIVE_SESSIONS_PER_WEEK {
                    ExerciseLevel::Active
                } else {
                    ExerciseLevel::Sedentary
                },
                stress_impact: StressImpact::from_level(input.stress_level),
                sleep_quality: if is_healthy_sleep(input.sleep_hours) {
                    SleepQuality::Good
                } else {
                    SleepQuality::Poor
                },
            },
        })
    }

    /// Evaluate the extended assessment (base payload plus longevity analysis)
    ///
    /// # Errors
    ///
    /// Same validation errors as [`AssessmentEvaluator::evaluate`].
    pub fn evaluate_extended(&self, input: &AssessmentInput) -> AppResult<ExtendedAssessment> {
        let base = self.evaluate(input)?;
        let longevity_analysis = LongevityAnalysis::from_input(input);
        let cognitive_insights = recommendations::cognitive_insights(input);
        let health_recommendations = recommendations::health_guidance(input, base.health_score);

        Ok(ExtendedAssessment {
            base,
            longevity_analysis,
            cognitive_insights,
            health_recommendations,
            ai_insight: None,
        })
    }

    /// Completed calendar years between birth and the reference date
    fn chronological_age(&self, birth_date: NaiveDate) -> i32 {
        let mut age = self.today.year() - birth_date.year();
        if (self.today.month(), self.today.day()) < (birth_date.month(), birth_date.day()) {
            age -= 1;
        }
        age
    }

    /// Body mass index from weight (kg) and height (cm)
    #[must_use]
    pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
        let height_m = height_cm / 100.0;
        weight_kg / (height_m * height_m)
    }

    /// Composite health score, clamped to [0, 100]
    ///
    /// A degenerate computation (non-finite intermediate) falls back to the
    /// default score instead of propagating.
    #[must_use]
    pub fn calculate_health_score(input: &AssessmentInput) -> f64 {
        let mut total = score::BASE_SCORE;

        let bmi_value = Self::calculate_bmi(input.weight, input.height);
        if bmi_value < bmi::UNDERWEIGHT_LIMIT || bmi_value > bmi::OVERWEIGHT_LIMIT {
            total -= score::BMI_PENALTY;
        } else if bmi_value < bmi::NORMAL_LIMIT {
            total += score::BMI_BONUS;
        }

        total += (input.exercise_frequency * score::EXERCISE_POINTS_PER_SESSION)
            .min(score::EXERCISE_BONUS_CAP);

        if is_healthy_sleep(input.sleep_hours) {
            total += score::SLEEP_ADJUSTMENT;
        } else {
            total -= score::SLEEP_ADJUSTMENT;
        }

        total -= input.stress_level * score::STRESS_PENALTY_PER_LEVEL;
        total += input.diet_quality * score::DIET_POINTS_PER_LEVEL;

        if input.smoking {
            total -= score::SMOKING_PENALTY;
        }
        if input.alcohol_frequency > lifestyle::ALCOHOL_RISK_LIMIT {
            total -= score::ALCOHOL_PENALTY;
        }

        if total.is_finite() {
            total.clamp(score::MIN_SCORE, score::MAX_SCORE)
        } else {
            warn!(
                weight = input.weight,
                height = input.height,
                "health score computation degenerated, using default"
            );
            score::DEFAULT_SCORE
        }
    }

    /// Accumulated future-impact points from current risk habits
    #[must_use]
    pub fn future_health_impact(input: &AssessmentInput) -> u32 {
        let mut impact = 0;
        if input.smoking {
            impact += aging::SMOKING_IMPACT;
        }
        if input.alcohol_frequency > lifestyle::ALCOHOL_RISK_LIMIT {
            impact += aging::ALCOHOL_IMPACT;
        }
        if input.exercise_frequency < lifestyle::ACTIVE_SESSIONS_PER_WEEK {
            impact += aging::INACTIVITY_IMPACT;
        }
        impact
    }
}

/// Whether nightly sleep falls inside the healthy 7-9 hour band
#[must_use]
pub fn is_healthy_sleep(sleep_hours: f64) -> bool {
    (sleep::HEALTHY_MIN_HOURS..=sleep::HEALTHY_MAX_HOURS).contains(&sleep_hours)
}

/// Round to one decimal place, matching the wire format
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
