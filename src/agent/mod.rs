//! Agent implementation
//!
//! The agent pairs an append-only [`Conversation`] with an injected
//! [`ChatProvider`] and exposes a single operation: [`Agent::send`].
//! Provider failures propagate to the caller; the agent performs no
//! retries and sets no timeouts.

pub mod action;
pub mod prompt;

pub use action::{parse_action, ActionRequest};
pub use prompt::SYSTEM_PROMPT;

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::providers::{ChatOptions, ChatProvider};
use crate::session::{Conversation, Message};

/// A stateful wrapper pairing a conversation history with a completion client.
///
/// The provider is an explicit constructor dependency so tests can inject
/// scripted doubles. Sampling is deterministic by default (temperature 0).
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use orrery::agent::{Agent, SYSTEM_PROMPT};
/// use orrery::providers::OpenAiProvider;
///
/// let provider = Arc::new(OpenAiProvider::new("api-key"));
/// let mut agent = Agent::new(provider, SYSTEM_PROMPT);
/// let reply = agent.send("What is the mass of Earth?").await?;
/// ```
pub struct Agent {
    conversation: Conversation,
    provider: Arc<dyn ChatProvider>,
    model: Option<String>,
    options: ChatOptions,
}

impl Agent {
    /// Create a new agent seeded with a system prompt.
    ///
    /// Pass an empty prompt for an unseeded conversation.
    pub fn new(provider: Arc<dyn ChatProvider>, system_prompt: &str) -> Self {
        Self {
            conversation: Conversation::with_system_prompt(system_prompt),
            provider,
            model: None,
            options: ChatOptions::deterministic(),
        }
    }

    /// Override the provider's default model.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    /// Override the default deterministic sampling options.
    pub fn with_options(mut self, options: ChatOptions) -> Self {
        self.options = options;
        self
    }

    /// Send a user message and return the assistant's reply.
    ///
    /// Appends a user message, invokes the provider with the entire
    /// conversation so far, appends the reply as an assistant message,
    /// and returns it. The conversation grows by exactly two messages
    /// per call, including failed-parse and observation turns.
    pub async fn send(&mut self, text: &str) -> Result<String> {
        self.conversation.push(Message::user(text));

        debug!(
            provider = self.provider.name(),
            history = self.conversation.len(),
            "sending conversation"
        );

        let reply = self
            .provider
            .chat(
                self.conversation.messages(),
                self.model.as_deref(),
                &self.options,
            )
            .await?;

        self.conversation.push(Message::assistant(&reply));
        Ok(reply)
    }

    /// The conversation history accumulated so far.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }
}
