// ABOUTME: Integration tests for the health check route handlers
// ABOUTME: Verifies liveness and readiness endpoints for monitoring probes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;

use vitalis_age_server::routes::HealthRoutes;

#[tokio::test]
async fn test_health_endpoint() {
    let response = AxumTestRequest::get("/api/health")
        .send(HealthRoutes::routes())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json_value();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint() {
    let response = AxumTestRequest::get("/api/ready")
        .send(HealthRoutes::routes())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json_value()["status"], "ready");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = AxumTestRequest::get("/api/unknown")
        .send(HealthRoutes::routes())
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
