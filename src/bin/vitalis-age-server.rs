// ABOUTME: Production entry point for the Vitalis age server
// ABOUTME: Parses CLI flags, initializes logging and config, and runs the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! Vitalis age server binary.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use vitalis_age_server::config::environment::ServerConfig;
use vitalis_age_server::insight::InsightService;
use vitalis_age_server::logging::LoggingConfig;
use vitalis_age_server::server::{AgeServer, ServerResources};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "vitalis-age-server")]
#[command(about = "Age and longevity assessment HTTP API")]
struct Args {
    /// Override the HTTP listen port (default: HTTP_PORT env or 8081)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env().init()?;

    let config = ServerConfig::from_env()?;
    config.log_summary();

    let port = args.port.unwrap_or(config.http_port);
    let insights = InsightService::from_env(&config);

    let resources = Arc::new(ServerResources::new(config, insights));
    let server = AgeServer::new(resources);

    info!(port, "starting Vitalis age server");
    server.run(port).await
}
