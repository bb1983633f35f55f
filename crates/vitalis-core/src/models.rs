// ABOUTME: Questionnaire input model for age and longevity assessment
// ABOUTME: Lenient JSON deserialization with per-field defaults and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! Questionnaire input record for the assessment pipeline.
//!
//! Every field except `birthDate` is optional and falls back to a documented
//! default. Numeric fields accept both JSON numbers and string-encoded
//! numbers, since questionnaire clients historically posted form values
//! verbatim.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{AppError, AppResult};

/// Default values applied to absent questionnaire fields
pub mod defaults {
    /// Body weight in kilograms
    pub const WEIGHT_KG: f64 = 70.0;
    /// Body height in centimeters
    pub const HEIGHT_CM: f64 = 170.0;
    /// Exercise sessions per week
    pub const EXERCISE_FREQUENCY: f64 = 0.0;
    /// Mental activity level
    pub const MENTAL_ACTIVITY: f64 = 1.0;
    /// Nightly sleep in hours
    pub const SLEEP_HOURS: f64 = 7.0;
    /// Self-reported stress on a 0-10 scale
    pub const STRESS_LEVEL: f64 = 5.0;
    /// Self-reported diet quality on a 0-5 scale
    pub const DIET_QUALITY: f64 = 3.0;
    /// Alcoholic drinks per week band
    pub const ALCOHOL_FREQUENCY: f64 = 0.0;
}

/// Expected wire format for `birthDate`
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// User-supplied questionnaire record
///
/// All lifestyle fields default when absent; only `birthDate` is required,
/// and its absence is reported by [`AssessmentInput::parse_birth_date`]
/// rather than at deserialization time so the error message matches the API
/// contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Date of birth, `YYYY-MM-DD`
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<String>,

    /// Body weight in kilograms
    #[serde(default = "default_weight", deserialize_with = "flexible_f64")]
    pub weight: f64,

    /// Body height in centimeters
    #[serde(default = "default_height", deserialize_with = "flexible_f64")]
    pub height: f64,

    /// Exercise sessions per week
    #[serde(default, deserialize_with = "flexible_f64")]
    pub exercise_frequency: f64,

    /// Mental activity level (reading, puzzles, learning)
    #[serde(default = "default_mental_activity", deserialize_with = "flexible_f64")]
    pub mental_activity: f64,

    /// Nightly sleep in hours
    #[serde(default = "default_sleep_hours", deserialize_with = "flexible_f64")]
    pub sleep_hours: f64,

    /// Self-reported stress on a 0-10 scale
    #[serde(default = "default_stress_level", deserialize_with = "flexible_f64")]
    pub stress_level: f64,

    /// Self-reported diet quality on a 0-5 scale
    #[serde(default = "default_diet_quality", deserialize_with = "flexible_f64")]
    pub diet_quality: f64,

    /// Whether the user smokes
    #[serde(default, deserialize_with = "flexible_bool")]
    pub smoking: bool,

    /// Alcoholic drinks per week band
    #[serde(default, deserialize_with = "flexible_f64")]
    pub alcohol_frequency: f64,
}

impl Default for AssessmentInput {
    fn default() -> Self {
        Self {
            birth_date: None,
            weight: defaults::WEIGHT_KG,
            height: defaults::HEIGHT_CM,
            exercise_frequency: defaults::EXERCISE_FREQUENCY,
            mental_activity: defaults::MENTAL_ACTIVITY,
            sleep_hours: defaults::SLEEP_HOURS,
            stress_level: defaults::STRESS_LEVEL,
            diet_quality: defaults::DIET_QUALITY,
            smoking: false,
            alcohol_frequency: defaults::ALCOHOL_FREQUENCY,
        }
    }
}

impl AssessmentInput {
    /// Parse and validate the required `birthDate` field
    ///
    /// # Errors
    ///
    /// Returns a validation error if the field is missing, empty, or does not
    /// parse as `YYYY-MM-DD`.
    pub fn parse_birth_date(&self) -> AppResult<NaiveDate> {
        let raw = self
            .birth_date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::missing_field("Birth date is required"))?;

        NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT).map_err(|e| {
            AppError::invalid_format(format!("Invalid date format: expected YYYY-MM-DD ({e})"))
                .with_source(e)
        })
    }

    /// Validate the numeric fields against their documented ranges
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(AppError::out_of_range("Weight must be a positive number"));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(AppError::out_of_range("Height must be a positive number"));
        }

        let non_negative = [
            (self.exercise_frequency, "Exercise frequency"),
            (self.mental_activity, "Mental activity"),
            (self.sleep_hours, "Sleep hours"),
            (self.stress_level, "Stress level"),
            (self.diet_quality, "Diet quality"),
            (self.alcohol_frequency, "Alcohol frequency"),
        ];
        for (value, name) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::out_of_range(format!(
                    "{name} must be zero or greater"
                )));
            }
        }

        Ok(())
    }
}

fn default_weight() -> f64 {
    defaults::WEIGHT_KG
}

fn default_height() -> f64 {
    defaults::HEIGHT_CM
}

fn default_mental_activity() -> f64 {
    defaults::MENTAL_ACTIVITY
}

fn default_sleep_hours() -> f64 {
    defaults::SLEEP_HOURS
}

fn default_stress_level() -> f64 {
    defaults::STRESS_LEVEL
}

fn default_diet_quality() -> f64 {
    defaults::DIET_QUALITY
}

/// Accept a JSON number or a string-encoded number
fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric value: {s:?}"))),
    }
}

/// Accept a JSON bool or a string-encoded bool
fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrText {
        Bool(bool),
        Text(String),
    }

    match BoolOrText::deserialize(deserializer)? {
        BoolOrText::Bool(b) => Ok(b),
        BoolOrText::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean value: {other:?}"
            ))),
        },
    }
}
