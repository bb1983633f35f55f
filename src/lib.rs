// ABOUTME: Vitalis age server library root, wiring config, routes, and the insight service
// ABOUTME: Re-exports the core input model, errors, and the intelligence engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! # Vitalis Age Server
//!
//! An HTTP service that turns a lifestyle questionnaire into derived
//! health/age metrics: biological age, cognitive age, a bounded health
//! score, categorical labels, a five-year projection, and an optional
//! AI-generated narrative insight.
//!
//! ## Architecture
//!
//! - **`vitalis-core`**: questionnaire input model and unified errors
//! - **`vitalis-intelligence`**: the deterministic scoring pipeline
//! - **`routes`**: thin axum handlers over the evaluator
//! - **`llm` / `insight`**: optional external narrative generation with its
//!   own timeout and error boundary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitalis_age_server::config::environment::ServerConfig;
//! use vitalis_age_server::insight::InsightService;
//! use vitalis_age_server::server::{AgeServer, ServerResources};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let insights = InsightService::from_env(&config);
//!     let port = config.http_port;
//!     let server = AgeServer::new(Arc::new(ServerResources::new(config, insights)));
//!     server.run(port).await
//! }
//! ```

/// Environment-based configuration
pub mod config;
/// Shared constants for environment variables and defaults
pub mod constants;
/// Narrative insight service with timeout and error isolation
pub mod insight;
/// LLM provider abstraction for the insight service
pub mod llm;
/// Structured logging setup
pub mod logging;
/// HTTP middleware (CORS)
pub mod middleware;
/// HTTP route handlers
pub mod routes;
/// Server composition and lifecycle
pub mod server;

pub use vitalis_core::errors;
pub use vitalis_core::models;
pub use vitalis_intelligence as intelligence;
