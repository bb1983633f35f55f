// ABOUTME: Unified LLM provider selector for runtime provider switching
// ABOUTME: Abstracts over Gemini and Groq providers based on environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! # LLM Provider Selector
//!
//! A unified interface over the supported LLM providers, configured at
//! runtime via environment variables.
//!
//! ## Configuration
//!
//! Set `VITALIS_LLM_PROVIDER`:
//! - `groq` (default): cost-effective open-source models (requires `GROQ_API_KEY`)
//! - `gemini`: Google Gemini (requires `GEMINI_API_KEY`)

use std::fmt;

use tracing::{debug, info};

use super::{ChatRequest, ChatResponse, GeminiProvider, GroqProvider, LlmCapabilities, LlmProvider};
use crate::config::LlmProviderType;
use crate::errors::AppError;

/// Unified chat provider that wraps Gemini or Groq
///
/// Provides a consistent interface regardless of which underlying provider
/// is configured.
pub enum ChatProvider {
    /// Google Gemini provider
    Gemini(GeminiProvider),
    /// Groq provider for fast, cost-effective inference
    Groq(GroqProvider),
}

impl ChatProvider {
    /// Create a provider from environment configuration
    ///
    /// Reads `VITALIS_LLM_PROVIDER` to determine which provider to use.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected provider's API key environment
    /// variable is missing.
    pub fn from_env() -> Result<Self, AppError> {
        let provider_type = LlmProviderType::from_env();

        info!(
            "Initializing LLM provider: {} (set {} to change)",
            provider_type,
            LlmProviderType::ENV_VAR
        );

        let provider = Self::create_provider(provider_type)?;
        debug!(
            "Provider {} initialized with model: {}",
            provider.display_name(),
            provider.default_model()
        );
        Ok(provider)
    }

    /// Create a provider for a specific type
    fn create_provider(provider_type: LlmProviderType) -> Result<Self, AppError> {
        match provider_type {
            LlmProviderType::Groq => Self::groq(),
            LlmProviderType::Gemini => Self::gemini(),
        }
    }

    /// Create a Gemini provider explicitly
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` is not set.
    pub fn gemini() -> Result<Self, AppError> {
        Ok(Self::Gemini(GeminiProvider::from_env()?))
    }

    /// Create a Groq provider explicitly
    ///
    /// # Errors
    ///
    /// Returns an error if `GROQ_API_KEY` is not set.
    pub fn groq() -> Result<Self, AppError> {
        Ok(Self::Groq(GroqProvider::from_env()?))
    }

    /// Get the provider type
    #[must_use]
    pub const fn provider_type(&self) -> LlmProviderType {
        match self {
            Self::Gemini(_) => LlmProviderType::Gemini,
            Self::Groq(_) => LlmProviderType::Groq,
        }
    }
}

// Delegate LlmProvider trait methods to the underlying provider
impl ChatProvider {
    /// Get provider name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gemini(p) => p.name(),
            Self::Groq(p) => p.name(),
        }
    }

    /// Get provider display name
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gemini(p) => p.display_name(),
            Self::Groq(p) => p.display_name(),
        }
    }

    /// Get provider capabilities
    #[must_use]
    pub fn capabilities(&self) -> LlmCapabilities {
        match self {
            Self::Gemini(p) => p.capabilities(),
            Self::Groq(p) => p.capabilities(),
        }
    }

    /// Get default model
    #[must_use]
    pub fn default_model(&self) -> &str {
        match self {
            Self::Gemini(p) => p.default_model(),
            Self::Groq(p) => p.default_model(),
        }
    }

    /// Perform a chat completion
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        match self {
            Self::Gemini(p) => p.complete(request).await,
            Self::Groq(p) => p.complete(request).await,
        }
    }
}

impl fmt::Debug for ChatProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini(_) => f.debug_tuple("ChatProvider::Gemini").finish(),
            Self::Groq(_) => f.debug_tuple("ChatProvider::Groq").finish(),
        }
    }
}

#[async_trait::async_trait]
impl LlmProvider for ChatProvider {
    fn name(&self) -> &'static str {
        self.name()
    }

    fn display_name(&self) -> &'static str {
        self.display_name()
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities()
    }

    fn default_model(&self) -> &str {
        self.default_model()
    }

    fn available_models(&self) -> &'static [&'static str] {
        match self {
            Self::Gemini(p) => p.available_models(),
            Self::Groq(p) => p.available_models(),
        }
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.complete(request).await
    }
}
