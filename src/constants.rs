// ABOUTME: Shared constants for environment variable names and runtime defaults
// ABOUTME: Single source of truth for configuration keys used across the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! Environment variable names and runtime defaults.

/// Environment variable names
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Comma-separated CORS origin allowlist, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// LLM provider selection for the insight service
    pub const LLM_PROVIDER: &str = "VITALIS_LLM_PROVIDER";
    /// Upper bound on the insight call, seconds
    pub const INSIGHT_TIMEOUT_SECS: &str = "INSIGHT_TIMEOUT_SECS";
    /// Gemini API key
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Groq API key
    pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
}

/// Runtime defaults
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 8081;
    /// Default CORS policy
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Default insight call timeout, seconds
    pub const INSIGHT_TIMEOUT_SECS: u64 = 10;
    /// Whole-request timeout applied by the HTTP layer, seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Service identifiers for logging
pub mod service_names {
    /// This server
    pub const VITALIS_AGE_SERVER: &str = "vitalis-age-server";
}
