// ABOUTME: Google Gemini LLM provider implementation for narrative insights
// ABOUTME: Non-streaming generateContent calls via the Generative AI API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! # Gemini Provider
//!
//! Implementation of the [`LlmProvider`] trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with an API key from
//! Google AI Studio.

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
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Available Gemini models
const AVAILABLE_MODELS: &[&str] = &["gemini-2.5-flash", "gemini-1.5-pro", "gemini-1.5-flash"];

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiUsage {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
    #[serde(rename = "totalTokenCount", default)]
    total_token_count: u32,
}

// ============================================================================
// Provider
// ============================================================================

/// Google Gemini chat provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    default_model: String,
}

impl GeminiProvider {
    /// Create a provider from the `GEMINI_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the key is not set.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var(env_config::GEMINI_API_KEY).map_err(|_| {
            AppError::config(format!("{} is not set", env_config::GEMINI_API_KEY))
        })?;
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

    /// Translate a generic chat request into Gemini wire format
    fn build_request(request: &ChatRequest) -> GeminiRequest {
        let mut system_parts = Vec::new();
        let mut contents = Vec::new();

        for message in &request.messages {
            match message.role {
                MessageRole::System => system_parts.push(GeminiPart {
                    text: message.content.clone(),
                }),
                MessageRole::User => contents.push(GeminiContent {
                    role: Some("user".to_owned()),
                    parts: vec![GeminiPart {
                        text: message.content.clone(),
                    }],
                }),
                MessageRole::Assistant => contents.push(GeminiContent {
                    role: Some("model".to_owned()),
                    parts: vec![GeminiPart {
                        text: message.content.clone(),
                    }],
                }),
            }
        }

        let generation_config = if request.temperature.is_some() || request.max_tokens.is_some() {
            Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            })
        } else {
            None
        };

        GeminiRequest {
            contents,
            system_instruction: if system_parts.is_empty() {
                None
            } else {
                Some(GeminiContent {
                    role: None,
                    parts: system_parts,
                })
            },
            generation_config,
        }
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::SYSTEM_MESSAGES | LlmCapabilities::JSON_MODE | LlmCapabilities::VISION
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    fn available_models(&self) -> &'static [&'static str] {
        AVAILABLE_MODELS
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = format!("{API_BASE_URL}/models/{model}:generateContent");

        debug!(model, "sending Gemini completion request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::build_request(request))
            .send()
            .await
            .map_err(|e| AppError::external_service("gemini", e.to_string()).with_source(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(
                "gemini",
                format!("HTTP {status}: {body}"),
            ));
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AppError::external_service("gemini", e.to_string()).with_source(e))?;

        let content = parsed
            .candidates
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if content.is_empty() {
            return Err(AppError::external_service(
                "gemini",
                "empty completion in response",
            ));
        }

        Ok(ChatResponse {
            content,
            model: model.to_owned(),
            usage: parsed.usage_metadata.map(|u| TokenUsage {
                prompt_tokens: u.prompt_token_count,
                completion_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::llm::ChatMessage;

    #[test]
    fn test_system_messages_become_system_instruction() {
        let request = ChatRequest::new(vec![
            ChatMessage::system("You are a health assistant."),
            ChatMessage::user("How am I doing?"),
        ]);

        let wire = GeminiProvider::build_request(&request);
        assert_eq!(wire.contents.len(), 1);
        assert!(wire.system_instruction.is_some());
        assert_eq!(
            wire.system_instruction.unwrap().parts[0].text,
            "You are a health assistant."
        );
    }

    #[test]
    fn test_generation_config_only_when_tuned() {
        let plain = ChatRequest::new(vec![ChatMessage::user("hi")]);
        assert!(GeminiProvider::build_request(&plain)
            .generation_config
            .is_none());

        let tuned = plain.clone().with_temperature(0.7).with_max_tokens(256);
        let config = GeminiProvider::build_request(&tuned)
            .generation_config
            .unwrap();
        assert_eq!(config.temperature, Some(0.7));
        assert_eq!(config.max_output_tokens, Some(256));
    }
}
