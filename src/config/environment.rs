// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, CORS policy, and insight-service settings from process env
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! Environment-based configuration management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

use crate::constants::{defaults, env_config};

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// LLM provider selection for the insight service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderType {
    /// Groq for fast, cost-effective inference (default)
    #[default]
    Groq,
    /// Google Gemini for full-featured capabilities
    Gemini,
}

impl LlmProviderType {
    /// Environment variable that selects the provider
    pub const ENV_VAR: &'static str = env_config::LLM_PROVIDER;

    /// Read the provider selection from the environment
    #[must_use]
    pub fn from_env() -> Self {
        env::var(Self::ENV_VAR)
            .map(|v| Self::from_str_or_default(&v))
            .unwrap_or_default()
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "gemini" => Self::Gemini,
            _ => Self::Groq,
        }
    }
}

impl fmt::Display for LlmProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Groq => write!(f, "groq"),
            Self::Gemini => write!(f, "gemini"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin allowlist, or `*` for any origin
    pub allowed_origins: String,
}

/// Insight service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Which LLM provider backs the insight service
    pub provider: LlmProviderType,
    /// Upper bound on the insight call, seconds
    pub timeout_secs: u64,
}

/// Server configuration assembled from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// CORS policy
    pub cors: CorsConfig,
    /// Insight service settings
    pub insight: InsightConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a present variable fails to parse (absent
    /// variables fall back to defaults).
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var(env_config::HTTP_PORT) {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("Invalid {}: {value}", env_config::HTTP_PORT))?,
            Err(_) => defaults::HTTP_PORT,
        };

        let environment = Environment::from_str_or_default(
            &env::var(env_config::ENVIRONMENT).unwrap_or_default(),
        );

        let allowed_origins = env::var(env_config::CORS_ALLOWED_ORIGINS)
            .unwrap_or_else(|_| defaults::CORS_ALLOWED_ORIGINS.to_owned());

        let timeout_secs = match env::var(env_config::INSIGHT_TIMEOUT_SECS) {
            Ok(value) => value
                .parse::<u64>()
                .with_context(|| format!("Invalid {}: {value}", env_config::INSIGHT_TIMEOUT_SECS))?,
            Err(_) => defaults::INSIGHT_TIMEOUT_SECS,
        };

        Ok(Self {
            http_port,
            environment,
            cors: CorsConfig { allowed_origins },
            insight: InsightConfig {
                provider: LlmProviderType::from_env(),
                timeout_secs,
            },
        })
    }

    /// Log a one-line summary of the effective configuration
    pub fn log_summary(&self) {
        info!(
            port = self.http_port,
            environment = %self.environment,
            cors = %self.cors.allowed_origins,
            insight_provider = %self.insight.provider,
            insight_timeout_secs = self.insight.timeout_secs,
            "configuration loaded"
        );
    }
}
