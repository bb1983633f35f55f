// ABOUTME: Assessment route handlers for the age and longevity endpoints
// ABOUTME: Parses questionnaire JSON, runs the evaluator, and attaches the optional insight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! Assessment routes
//!
//! `POST /api/calculate-age` evaluates the base assessment;
//! `POST /api/calculate` evaluates the extended assessment with longevity
//! factors and the optional AI narrative. Both share one evaluator; the
//! extended handler only adds to the payload.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::debug;

use vitalis_core::errors::{AppError, AppResult};
use vitalis_core::models::AssessmentInput;
use vitalis_intelligence::AssessmentEvaluator;

use crate::server::ServerResources;

/// Assessment routes implementation
pub struct AssessmentRoutes;

impl AssessmentRoutes {
    /// Create all assessment routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/calculate-age", post(Self::handle_calculate_age))
            .route("/api/calculate", post(Self::handle_calculate))
            .with_state(resources)
    }

    /// Handle the base assessment
    async fn handle_calculate_age(
        State(_resources): State<Arc<ServerResources>>,
        Json(payload): Json<serde_json::Value>,
    ) -> Result<Response, AppError> {
        let input = parse_input(payload)?;
        let assessment = AssessmentEvaluator::new().evaluate(&input)?;

        debug!(
            chronological_age = assessment.chronological_age,
            health_score = assessment.health_score,
            "base assessment computed"
        );

        Ok((StatusCode::OK, Json(assessment)).into_response())
    }

    /// Handle the extended assessment with longevity analysis and insight
    async fn handle_calculate(
        State(resources): State<Arc<ServerResources>>,
        Json(payload): Json<serde_json::Value>,
    ) -> Result<Response, AppError> {
        let input = parse_input(payload)?;
        let mut assessment = AssessmentEvaluator::new().evaluate_extended(&input)?;

        // Isolated from the request outcome: any failure leaves a null field
        assessment.ai_insight = resources.insights.narrative(&assessment).await;

        debug!(
            chronological_age = assessment.base.chronological_age,
            health_score = assessment.base.health_score,
            insight = assessment.ai_insight.is_some(),
            "extended assessment computed"
        );

        Ok((StatusCode::OK, Json(assessment)).into_response())
    }
}

/// Decode the questionnaire record out of the request body
fn parse_input(payload: serde_json::Value) -> AppResult<AssessmentInput> {
    if payload.is_null() {
        return Err(AppError::invalid_input("No data provided"));
    }

    serde_json::from_value(payload)
        .map_err(|e| AppError::invalid_input(format!("Invalid request body: {e}")).with_source(e))
}
