// ABOUTME: Foundation crate for the Vitalis age assessment platform
// ABOUTME: Holds the questionnaire input model and the unified error system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! # Vitalis Core
//!
//! Foundation types shared by the Vitalis age server and its intelligence
//! engine: the questionnaire input record, and the unified error system with
//! HTTP status mapping.

/// Unified error handling system
pub mod errors;
/// Questionnaire input model
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::AssessmentInput;
