// ABOUTME: Narrative insight service with timeout and error isolation
// ABOUTME: Wraps the optional LLM provider so its failure never fails a request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! Optional AI narrative generation.
//!
//! The insight call is the only outward dependency of an assessment request.
//! It runs under its own timeout, and every failure mode (provider missing,
//! API error, timeout) degrades to a `None` insight rather than an error.

use std::time::Duration;

use tokio::time::timeout;
use tracing::{info, warn};

use vitalis_intelligence::ExtendedAssessment;

use crate::config::environment::ServerConfig;
use crate::config::LlmProviderType;
use crate::llm::{prompts, ChatMessage, ChatProvider, ChatRequest};

/// Completion length cap for the narrative
const MAX_INSIGHT_TOKENS: u32 = 512;

/// Narrative insight service
///
/// Holds the configured provider, or nothing when the feature is disabled.
#[derive(Debug)]
pub struct InsightService {
    provider: Option<ChatProvider>,
    timeout: Duration,
}

impl InsightService {
    /// Build the service from environment configuration
    ///
    /// A missing API key disables the feature rather than failing startup.
    #[must_use]
    pub fn from_env(config: &ServerConfig) -> Self {
        let timeout = Duration::from_secs(config.insight.timeout_secs);

        let provider = match config.insight.provider {
            LlmProviderType::Groq => ChatProvider::groq(),
            LlmProviderType::Gemini => ChatProvider::gemini(),
        };

        match provider {
            Ok(provider) => {
                info!(
                    provider = provider.name(),
                    model = provider.default_model(),
                    timeout_secs = config.insight.timeout_secs,
                    "insight service enabled"
                );
                Self {
                    provider: Some(provider),
                    timeout,
                }
            }
            Err(e) => {
                info!("insight service disabled: {e}");
                Self {
                    provider: None,
                    timeout,
                }
            }
        }
    }

    /// Create a disabled service (used by tests and headless deployments)
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            provider: None,
            timeout: Duration::from_secs(0),
        }
    }

    /// Whether a provider is configured
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Generate a narrative for an assessment
    ///
    /// Returns `None` when the feature is disabled or when the provider call
    /// errors or exceeds its timeout; the request continues either way.
    pub async fn narrative(&self, assessment: &ExtendedAssessment) -> Option<String> {
        let provider = self.provider.as_ref()?;

        let request = ChatRequest::new(vec![
            ChatMessage::system(prompts::insight_system_prompt()),
            ChatMessage::user(prompts::build_insight_prompt(assessment)),
        ])
        .with_max_tokens(MAX_INSIGHT_TOKENS);

        match timeout(self.timeout, provider.complete(&request)).await {
            Ok(Ok(response)) => {
                let content = response.content.trim();
                if content.is_empty() {
                    None
                } else {
                    Some(content.to_owned())
                }
            }
            Ok(Err(e)) => {
                warn!(provider = provider.name(), "insight generation failed: {e}");
                None
            }
            Err(_) => {
                warn!(
                    provider = provider.name(),
                    timeout_secs = self.timeout.as_secs(),
                    "insight generation timed out"
                );
                None
            }
        }
    }
}
