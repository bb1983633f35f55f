// ABOUTME: Route module organization for the Vitalis age server HTTP endpoints
// ABOUTME: Thin handlers per domain delegating to the evaluator and insight service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! Route modules for the Vitalis age server.
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the evaluator or insight service.

/// Age and longevity assessment routes
pub mod assessment;
/// Health check and readiness routes
pub mod health;

pub use assessment::AssessmentRoutes;
pub use health::HealthRoutes;
