// ABOUTME: Groq LLM provider implementation for narrative insights
// ABOUTME: OpenAI-compatible chat completion calls against the Groq API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! # Groq Provider
//!
//! Implementation of the [`LlmProvider`] trait for Groq's OpenAI-compatible
//! chat completion API.
//!
//! ## Configuration
//!
//! Set the `GROQ_API_KEY` environment variable with an API key from the Groq
//! console.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, MessageRole, TokenUsage};
use crate::constants::env_config;
use crate::errors::AppError;

/// Default model to use
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Available Groq models
const AVAILABLE_MODELS: &[&str] = &[
    "llama-3.3-70b-versatile",
    "llama-3.1-8b-instant",
    "mixtral-8x7b-32768",
];

/// Chat completions endpoint
const API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
    model: Option<String>,
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

// ============================================================================
// Provider
// ============================================================================

/// Groq chat provider
pub struct GroqProvider {
    api_key: String,
    client: Client,
    default_model: String,
}

impl GroqProvider {
    /// Create a provider from the `GROQ_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the key is not set.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var(env_config::GROQ_API_KEY)
            .map_err(|_| AppError::config(format!("{} is not set", env_config::GROQ_API_KEY)))?;
        Ok(Self::new(api_key))
    }

    /// Create a provider with an explicit API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            default_model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Override the default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }
}

impl Debug for GroqProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GroqProvider")
            .field("default_model", &self.default_model)
            .finish_non_exhaustive()
    }
}

const fn wire_role(role: MessageRole) -> &'static str {
    match role {
        MessageRole::System => "system",
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    fn display_name(&self) -> &'static str {
        "Groq"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::text_only() | LlmCapabilities::JSON_MODE
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    fn available_models(&self) -> &'static [&'static str] {
        AVAILABLE_MODELS
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);

        let wire_request = CompletionRequest {
            model,
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: wire_role(m.role),
                    content: &m.content,
                })
                .collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(model, "sending Groq completion request");

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| AppError::external_service("groq", e.to_string()).with_source(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(
                "groq",
                format!("HTTP {status}: {body}"),
            ));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::external_service("groq", e.to_string()).with_source(e))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(AppError::external_service(
                "groq",
                "empty completion in response",
            ));
        }

        Ok(ChatResponse {
            content,
            model: parsed.model.unwrap_or_else(|| model.to_owned()),
            usage: parsed.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_roles() {
        assert_eq!(wire_role(MessageRole::System), "system");
        assert_eq!(wire_role(MessageRole::User), "user");
        assert_eq!(wire_role(MessageRole::Assistant), "assistant");
    }
}
