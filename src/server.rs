// ABOUTME: Server composition and lifecycle for the Vitalis age server
// ABOUTME: Assembles routers, middleware layers, shared resources, and graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! HTTP server composition.
//!
//! [`ServerResources`] is the single shared-state container passed to route
//! handlers; [`AgeServer`] assembles the routers and middleware and runs the
//! listener until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::environment::ServerConfig;
use crate::constants::defaults;
use crate::insight::InsightService;
use crate::middleware::setup_cors;
use crate::routes::{AssessmentRoutes, HealthRoutes};

/// Shared state for all route handlers
#[derive(Debug)]
pub struct ServerResources {
    /// Effective configuration
    pub config: ServerConfig,
    /// Narrative insight service (possibly disabled)
    pub insights: InsightService,
}

impl ServerResources {
    /// Bundle configuration and services for handler state
    #[must_use]
    pub const fn new(config: ServerConfig, insights: InsightService) -> Self {
        Self { config, insights }
    }
}

/// The Vitalis age HTTP server
pub struct AgeServer {
    resources: Arc<ServerResources>,
}

impl AgeServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete application router
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(AssessmentRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                defaults::REQUEST_TIMEOUT_SECS,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(setup_cors(&self.resources.config))
    }

    /// Run the server until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server errors.
    pub async fn run(self, port: u16) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        info!(%addr, "HTTP server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated unexpectedly")
    }
}

/// Resolve when the process receives a shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        return;
    }
    info!("shutdown signal received");
}
