// ABOUTME: Integration tests for the assessment route handlers
// ABOUTME: Exercises both endpoints end to end, validation errors included
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use chrono::{Datelike, NaiveDate, Utc};
use helpers::axum_test::AxumTestRequest;
use serde_json::json;

use vitalis_age_server::config::environment::{
    CorsConfig, Environment, InsightConfig, LlmProviderType, ServerConfig,
};
use vitalis_age_server::insight::InsightService;
use vitalis_age_server::server::{AgeServer, ServerResources};

// ============================================================================
// Test Helpers
// ============================================================================

fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        environment: Environment::Testing,
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
        insight: InsightConfig {
            provider: LlmProviderType::Groq,
            timeout_secs: 1,
        },
    }
}

fn test_app() -> Router {
    let resources = Arc::new(ServerResources::new(
        test_config(),
        InsightService::disabled(),
    ));
    AgeServer::new(resources).router()
}

/// A birth date exactly `years` calendar years before today
fn birth_date_years_ago(years: i32) -> String {
    let today = Utc::now().date_naive();
    let date = NaiveDate::from_ymd_opt(today.year() - years, today.month(), today.day())
        // Feb 29 in a non-leap target year collapses to Feb 28
        .unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(today.year() - years, 2, 28).unwrap()
        });
    date.format("%Y-%m-%d").to_string()
}

// ============================================================================
// Base Endpoint
// ============================================================================

#[tokio::test]
async fn test_calculate_age_default_profile() {
    let response = AxumTestRequest::post("/api/calculate-age")
        .json(&json!({ "birthDate": "1990-01-01" }))
        .send(test_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json_value();

    // Defaults: 70 kg at 170 cm, healthy sleep, moderate stress, decent diet
    assert_eq!(body["metrics"]["bmi"], 24.2);
    assert_eq!(body["metrics"]["bmi_category"], "Normal");
    assert_eq!(body["health_score"], 100.0);
    assert_eq!(body["health_status"], "Good");
    assert_eq!(body["metrics"]["exercise_level"], "Sedentary");
    assert_eq!(body["metrics"]["stress_impact"], "Medium");
    assert_eq!(body["metrics"]["sleep_quality"], "Good");
}

#[tokio::test]
async fn test_calculate_age_exact_thirtieth_birthday() {
    let response = AxumTestRequest::post("/api/calculate-age")
        .json(&json!({ "birthDate": birth_date_years_ago(30) }))
        .send(test_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json_value();
    assert_eq!(body["chronological_age"], 30);
    assert_eq!(body["age_prediction"]["age_in_5_years"], 35);
}

#[tokio::test]
async fn test_calculate_age_risky_profile_projection() {
    let response = AxumTestRequest::post("/api/calculate-age")
        .json(&json!({
            "birthDate": "1985-06-01",
            "smoking": true,
            "alcohol_frequency": 3,
            "exercise_frequency": 1,
        }))
        .send(test_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json_value();

    // future impact 4 = smoking 2 + alcohol 1 + inactivity 1
    assert_eq!(body["age_prediction"]["potential_improvement"], 8);

    let biological = body["biological_age"].as_f64().unwrap();
    let projected = body["age_prediction"]["biological_age_in_5_years"]
        .as_f64()
        .unwrap();
    assert!((projected - (biological + 5.0 + 4.0)).abs() < 0.11);
}

#[tokio::test]
async fn test_calculate_age_accepts_string_encoded_numbers() {
    let typed = AxumTestRequest::post("/api/calculate-age")
        .json(&json!({ "birthDate": "1990-01-01", "weight": 82.5, "height": 180 }))
        .send(test_app())
        .await;
    let stringly = AxumTestRequest::post("/api/calculate-age")
        .json(&json!({ "birthDate": "1990-01-01", "weight": "82.5", "height": "180" }))
        .send(test_app())
        .await;

    assert_eq!(typed.status_code(), StatusCode::OK);
    assert_eq!(stringly.status_code(), StatusCode::OK);
    assert_eq!(
        typed.json_value()["metrics"]["bmi"],
        stringly.json_value()["metrics"]["bmi"]
    );
}

#[tokio::test]
async fn test_calculate_age_health_score_bounded() {
    let response = AxumTestRequest::post("/api/calculate-age")
        .json(&json!({
            "birthDate": "1970-01-01",
            "weight": 150,
            "height": 160,
            "sleep_hours": 3,
            "stress_level": 10,
            "diet_quality": 0,
            "smoking": true,
            "alcohol_frequency": 10,
        }))
        .send(test_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let score = response.json_value()["health_score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&score));
}

#[tokio::test]
async fn test_recommendations_lead_with_weight_management() {
    let response = AxumTestRequest::post("/api/calculate-age")
        .json(&json!({ "birthDate": "1990-01-01", "weight": 95, "height": 165 }))
        .send(test_app())
        .await;

    let body = response.json_value();
    let recommendations = body["recommendations"].as_array().unwrap();
    assert!(!recommendations.is_empty());
    assert_eq!(recommendations[0]["category"], "Weight Management");
    assert_eq!(recommendations[0]["impact"], "High");
    assert!(recommendations[0]["recommendation"]
        .as_str()
        .unwrap()
        .contains("obese"));
}

// ============================================================================
// Validation Errors
// ============================================================================

#[tokio::test]
async fn test_missing_birth_date_is_400() {
    let response = AxumTestRequest::post("/api/calculate-age")
        .json(&json!({ "weight": 70 }))
        .send(test_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json_value();
    assert_eq!(body["error"], "Birth date is required");
}

#[tokio::test]
async fn test_empty_birth_date_is_400() {
    let response = AxumTestRequest::post("/api/calculate-age")
        .json(&json!({ "birthDate": "" }))
        .send(test_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json_value()["error"], "Birth date is required");
}

#[tokio::test]
async fn test_malformed_birth_date_is_400_with_format_hint() {
    let response = AxumTestRequest::post("/api/calculate-age")
        .json(&json!({ "birthDate": "2020/01/01" }))
        .send(test_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let message = response.json_value()["error"].as_str().unwrap().to_owned();
    assert!(message.contains("date format"));
    assert!(message.contains("YYYY-MM-DD"));
}

#[tokio::test]
async fn test_future_birth_date_is_400() {
    let response = AxumTestRequest::post("/api/calculate-age")
        .json(&json!({ "birthDate": "2999-01-01" }))
        .send(test_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json_value()["error"]
        .as_str()
        .unwrap()
        .contains("future"));
}

#[tokio::test]
async fn test_non_positive_height_is_400() {
    let response = AxumTestRequest::post("/api/calculate-age")
        .json(&json!({ "birthDate": "1990-01-01", "height": 0 }))
        .send(test_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json_value()["error"]
        .as_str()
        .unwrap()
        .contains("Height"));
}

#[tokio::test]
async fn test_empty_body_is_400() {
    let response = AxumTestRequest::post("/api/calculate-age")
        .header("content-type", "application/json")
        .send(test_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Extended Endpoint
// ============================================================================

#[tokio::test]
async fn test_calculate_extends_the_base_payload() {
    let payload = json!({ "birthDate": "1988-03-12", "exercise_frequency": 4 });

    let base = AxumTestRequest::post("/api/calculate-age")
        .json(&payload)
        .send(test_app())
        .await;
    let extended = AxumTestRequest::post("/api/calculate")
        .json(&payload)
        .send(test_app())
        .await;

    assert_eq!(base.status_code(), StatusCode::OK);
    assert_eq!(extended.status_code(), StatusCode::OK);

    let base = base.json_value();
    let extended = extended.json_value();

    for field in [
        "chronological_age",
        "biological_age",
        "cognitive_age",
        "health_score",
        "health_status",
        "age_prediction",
        "metrics",
    ] {
        assert_eq!(base[field], extended[field], "field {field} diverged");
    }
}

#[tokio::test]
async fn test_calculate_longevity_factors_bounded() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&json!({
            "birthDate": "1970-01-01",
            "smoking": true,
            "alcohol_frequency": 12,
            "stress_level": 10,
        }))
        .send(test_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let analysis = &response.json_value()["longevity_analysis"];

    for factor in [
        "genetic_risk",
        "lifestyle_quality",
        "environmental_impact",
        "stress_resilience",
    ] {
        let value = analysis[factor].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&value), "{factor} out of range: {value}");
    }
}

#[tokio::test]
async fn test_calculate_without_provider_has_null_insight() {
    let response = AxumTestRequest::post("/api/calculate")
        .json(&json!({ "birthDate": "1990-01-01" }))
        .send(test_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json_value();
    assert!(body["ai_insight"].is_null());
    assert!(!body["cognitive_insights"].as_array().unwrap().is_empty());
    assert!(!body["health_recommendations"].as_array().unwrap().is_empty());
}
