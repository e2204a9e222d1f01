//! Provider types for Orrery
//!
//! This module defines the `ChatProvider` trait and the chat sampling
//! options passed along with each completion request.

use async_trait::async_trait;

use crate::error::Result;
use crate::session::Message;

/// Trait for chat-completion providers.
///
/// Implement this trait to add support for a new model provider, or to
/// inject a scripted double in tests. The provider is responsible for
/// translating Orrery's messages into the provider's wire format and
/// returning the first completion's text.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a chat completion request.
    ///
    /// # Arguments
    /// * `messages` - The full ordered conversation history
    /// * `model` - Optional model override (uses the default if `None`)
    /// * `options` - Sampling options (temperature, max_tokens, etc.)
    ///
    /// # Returns
    /// The text of the first completion choice.
    async fn chat(
        &self,
        messages: &[Message],
        model: Option<&str>,
        options: &ChatOptions,
    ) -> Result<String>;

    /// The default model for this provider.
    fn default_model(&self) -> &str;

    /// The provider name (e.g. "openai").
    fn name(&self) -> &str;
}

/// Sampling options for chat completion requests.
///
/// The agent loop always pins `temperature` to 0 for deterministic replies;
/// the builder exists for callers that need something else.
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature for sampling (0.0 = deterministic)
    pub temperature: Option<f32>,
    /// Nucleus sampling parameter
    pub top_p: Option<f32>,
}

impl ChatOptions {
    /// Create new default chat options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic sampling: temperature pinned to 0.
    ///
    /// # Example
    /// ```
    /// use orrery::providers::ChatOptions;
    ///
    /// let options = ChatOptions::deterministic();
    /// assert_eq!(options.temperature, Some(0.0));
    /// ```
    pub fn deterministic() -> Self {
        Self::new().with_temperature(0.0)
    }

    /// Set the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the temperature for sampling.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the top_p (nucleus sampling) parameter.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}
