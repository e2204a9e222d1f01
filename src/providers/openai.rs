//! OpenAI Provider Implementation
//!
//! This module implements the `ChatProvider` trait for OpenAI's Chat
//! Completions API, handling message conversion and response parsing.
//! Only the first completion choice is used.
//!
//! # Example
//!
//! ```rust,ignore
//! use orrery::providers::{ChatOptions, ChatProvider, OpenAiProvider};
//! use orrery::session::Message;
//!
//! async fn example() {
//!     let provider = OpenAiProvider::new("your-api-key");
//!
//!     let messages = vec![
//!         Message::system("You are a helpful assistant."),
//!         Message::user("Hello!"),
//!     ];
//!
//!     let reply = provider
//!         .chat(&messages, None, &ChatOptions::deterministic())
//!         .await
//!         .unwrap();
//!
//!     println!("OpenAI: {}", reply);
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{OrreryError, Result};
use crate::session::Message;

use super::{ChatOptions, ChatProvider};

/// The OpenAI API endpoint URL.
const OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// The default OpenAI model to use.
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

// ============================================================================
// OpenAI API Request Types
// ============================================================================

/// OpenAI API request body.
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    /// Model identifier
    model: String,
    /// Conversation messages (including system)
    messages: Vec<OpenAiMessage>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Temperature for sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Top-p (nucleus) sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

/// A message in OpenAI's format.
#[derive(Debug, Serialize)]
struct OpenAiMessage {
    /// Role: "system", "user", or "assistant"
    role: String,
    /// Message content
    content: String,
}

// ============================================================================
// OpenAI API Response Types
// ============================================================================

/// OpenAI API response body.
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    /// Response choices
    choices: Vec<OpenAiChoice>,
}

/// A choice in the response.
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    /// The message content
    message: OpenAiResponseMessage,
}

/// A message in the response.
#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    /// Text content (may be null in edge cases)
    content: Option<String>,
}

/// OpenAI error response body.
#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

/// Error details from the OpenAI API.
#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    r#type: String,
}

// ============================================================================
// Provider
// ============================================================================

/// Chat-completions client for the OpenAI API.
///
/// One client is created per agent at construction and reused for every
/// request. The base URL can be overridden for OpenAI-compatible gateways
/// and for tests.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    api_base: String,
}

impl OpenAiProvider {
    /// Create a new provider pointed at the official OpenAI endpoint.
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, OPENAI_API_URL)
    }

    /// Create a provider with a custom base URL.
    ///
    /// # Example
    /// ```
    /// use orrery::providers::OpenAiProvider;
    ///
    /// let provider = OpenAiProvider::with_base_url("key", "http://localhost:8080/v1/");
    /// ```
    pub fn with_base_url(api_key: &str, api_base: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}

/// Convert Orrery messages to OpenAI API format.
fn convert_messages(messages: &[Message]) -> Vec<OpenAiMessage> {
    messages
        .iter()
        .map(|msg| OpenAiMessage {
            role: msg.role.as_str().to_string(),
            content: msg.content.clone(),
        })
        .collect()
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn chat(
        &self,
        messages: &[Message],
        model: Option<&str>,
        options: &ChatOptions,
    ) -> Result<String> {
        let model = model.unwrap_or(DEFAULT_MODEL);

        let request = OpenAiRequest {
            model: model.to_string(),
            messages: convert_messages(messages),
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            top_p: options.top_p,
        };

        debug!(model, count = messages.len(), "OpenAI chat request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| OrreryError::Provider(format!("OpenAI request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as an OpenAI error response
            if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(&error_text) {
                return Err(OrreryError::Provider(format!(
                    "OpenAI API error ({}): {} - {}",
                    status, error_response.error.r#type, error_response.error.message
                )));
            }

            return Err(OrreryError::Provider(format!(
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let openai_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| OrreryError::Provider(format!("Failed to parse OpenAI response: {}", e)))?;

        let content = openai_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        debug!(chars = content.len(), "OpenAI chat response");
        Ok(content)
    }

    fn default_model(&self) -> &str {
        DEFAULT_MODEL
    }

    fn name(&self) -> &str {
        "openai"
    }
}

// ============================================================================
// Tests
// ============================================================================
