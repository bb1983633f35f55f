// ABOUTME: Configuration module organization for the Vitalis age server
// ABOUTME: Environment-only configuration, no files or remote sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! Configuration for the server. All configuration is environment-based.

/// Environment-based server configuration
pub mod environment;

pub use environment::{Environment, LlmProviderType, ServerConfig};
