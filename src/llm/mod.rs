// ABOUTME: LLM provider abstraction layer for the narrative insight feature
// ABOUTME: Defines the provider contract, capability flags, and chat message types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Labs

//! # LLM Provider Service Provider Interface
//!
//! Contract that LLM providers implement to back the insight service.
//!
//! ## Key Concepts
//!
//! - **`LlmCapabilities`**: bitflags describing provider features
//! - **`LlmProvider`**: async trait for chat completion
//! - **`ChatMessage`**: role-based message structure
//! - **`ChatRequest`**: request configuration including model and temperature
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use vitalis_age_server::llm::{ChatMessage, ChatRequest, ChatProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vitalis_age_server::errors::AppError> {
//!     let provider = ChatProvider::from_env()?;
//!     let request = ChatRequest::new(vec![ChatMessage::user("Hello!")]);
//!     let response = provider.complete(&request).await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```

mod gemini;
mod groq;
pub mod prompts;
mod provider;

pub use gemini::GeminiProvider;
pub use groq::GroqProvider;
pub use provider::ChatProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

bitflags::bitflags! {
    /// LLM provider capability flags
    ///
    /// Indicates which features a provider supports; used for logging and
    /// to guard request construction.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Provider supports system messages
        const SYSTEM_MESSAGES = 0b0000_0001;
        /// Provider supports JSON mode output
        const JSON_MODE = 0b0000_0010;
        /// Provider supports vision/image input
        const VISION = 0b0000_0100;
    }
}

impl LlmCapabilities {
    /// Capabilities of a basic text-only provider
    #[must_use]
    pub const fn text_only() -> Self {
        Self::SYSTEM_MESSAGES
    }

    /// Check if system messages are supported
    #[must_use]
    pub const fn supports_system_messages(&self) -> bool {
        self.contains(Self::SYSTEM_MESSAGES)
    }
}

/// Role of a chat message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instructions that frame the conversation
    System,
    /// End-user content
    User,
    /// Model-generated content
    Assistant,
}

/// A single message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author role
    pub role: MessageRole,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation so far
    pub messages: Vec<ChatMessage>,
    /// Model override; provider default when `None`
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Completion length cap
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a request with provider defaults
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Override the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap the completion length
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Token accounting reported by the provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens generated in the completion
    pub completion_tokens: u32,
    /// Total billed tokens
    pub total_tokens: u32,
}

/// Chat completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated text
    pub content: String,
    /// Model that produced the completion
    pub model: String,
    /// Token accounting, when reported
    pub usage: Option<TokenUsage>,
}

/// Contract implemented by every LLM provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Stable machine name ("gemini", "groq")
    fn name(&self) -> &'static str;

    /// Human-readable name
    fn display_name(&self) -> &'static str;

    /// Feature flags
    fn capabilities(&self) -> LlmCapabilities;

    /// Default model identifier
    fn default_model(&self) -> &str;

    /// Models this provider can serve
    fn available_models(&self) -> &'static [&'static str];

    /// Perform a chat completion
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails or the response is malformed.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}
