// ABOUTME: Age and longevity scoring engine for the Vitalis platform
// ABOUTME: Deterministic formulas from questionnaire input to assessment payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! # Vitalis Intelligence
//!
//! The scoring engine behind the Vitalis age API: a single-pass,
//! deterministic pipeline that turns a questionnaire record into
//! chronological/biological/cognitive ages, a bounded health score,
//! categorical labels, a five-year projection, lifestyle recommendations,
//! and the extended longevity factor analysis.
//!
//! Nothing in this crate performs I/O; the optional AI narrative insight is
//! attached by the server layer after evaluation.

/// Formula weights and physiological thresholds
pub mod constants;
/// The assessment evaluator pipeline
pub mod evaluator;
/// Longevity factor analysis for the extended assessment
pub mod longevity;
/// Lifestyle recommendations and deterministic insight strings
pub mod recommendations;

pub use evaluator::{
    AgeAssessment, AgePrediction, AssessmentEvaluator, AssessmentMetrics, BmiCategory,
    ExerciseLevel, ExtendedAssessment, HealthStatus, SleepQuality, StressImpact,
};
pub use longevity::LongevityAnalysis;
pub use recommendations::{ImpactLevel, Recommendation};
