// ABOUTME: Integration tests for environment-based configuration
// ABOUTME: Exercises defaults, overrides, parse failures, and insight enablement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;

use vitalis_age_server::config::environment::{Environment, LlmProviderType, ServerConfig};
use vitalis_age_server::insight::InsightService;

fn clear_env() {
    for var in [
        "HTTP_PORT",
        "CORS_ALLOWED_ORIGINS",
        "ENVIRONMENT",
        "VITALIS_LLM_PROVIDER",
        "INSIGHT_TIMEOUT_SECS",
        "GEMINI_API_KEY",
        "GROQ_API_KEY",
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_with_clean_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors.allowed_origins, "*");
    assert_eq!(config.insight.provider, LlmProviderType::Groq);
    assert_eq!(config.insight.timeout_secs, 10);
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://app.example.com");
    env::set_var("VITALIS_LLM_PROVIDER", "gemini");
    env::set_var("INSIGHT_TIMEOUT_SECS", "3");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9090);
    assert!(config.environment.is_production());
    assert_eq!(config.cors.allowed_origins, "https://app.example.com");
    assert_eq!(config.insight.provider, LlmProviderType::Gemini);
    assert_eq!(config.insight.timeout_secs, 3);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_port_is_an_error() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let result = ServerConfig::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("HTTP_PORT"));

    clear_env();
}

#[test]
#[serial]
fn test_unrecognized_provider_falls_back_to_groq() {
    clear_env();
    env::set_var("VITALIS_LLM_PROVIDER", "carrier-pigeon");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.insight.provider, LlmProviderType::Groq);

    clear_env();
}

#[test]
#[serial]
fn test_insight_service_disabled_without_api_key() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    let service = InsightService::from_env(&config);
    assert!(!service.is_enabled());
}
