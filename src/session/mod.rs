//! Conversation state for Orrery
//!
//! This module defines the core types for conversation history: message
//! roles, immutable messages, and the append-only `Conversation` owned by
//! an agent. History lives for the process lifetime only — there is no
//! persistence across runs.

use serde::{Deserialize, Serialize};

/// The role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System prompt establishing the agent's protocol
    System,
    /// Message from the human user (or a synthesized observation)
    User,
    /// Reply from the language model
    Assistant,
}

impl Role {
    /// The wire-format string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single message in a conversation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Create a new system message.
    ///
    /// # Example
    /// ```
    /// use orrery::session::{Message, Role};
    ///
    /// let msg = Message::system("You run in a loop of Thought, Action, PAUSE, Observation.");
    /// assert_eq!(msg.role, Role::System);
    /// ```
    pub fn system(content: &str) -> Self {
        Self {
            role: Role::System,
            content: content.to_string(),
        }
    }

    /// Create a new user message.
    pub fn user(content: &str) -> Self {
        Self {
            role: Role::User,
            content: content.to_string(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: &str) -> Self {
        Self {
            role: Role::Assistant,
            content: content.to_string(),
        }
    }
}

/// An ordered, append-only conversation history.
///
/// A `Conversation` is owned by exactly one [`Agent`](crate::agent::Agent).
/// It may be seeded with a single system message at construction and grows
/// by exactly one user and one assistant message per turn. Messages are
/// never reordered or deleted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create a new empty conversation.
    ///
    /// # Example
    /// ```
    /// use orrery::session::Conversation;
    ///
    /// let convo = Conversation::new();
    /// assert!(convo.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a conversation seeded with a system prompt.
    ///
    /// An empty prompt produces an unseeded conversation, matching the
    /// optional-seed contract.
    ///
    /// # Example
    /// ```
    /// use orrery::session::{Conversation, Role};
    ///
    /// let convo = Conversation::with_system_prompt("You are a helpful assistant.");
    /// assert_eq!(convo.len(), 1);
    /// assert_eq!(convo.messages()[0].role, Role::System);
    /// ```
    pub fn with_system_prompt(prompt: &str) -> Self {
        let mut convo = Self::new();
        if !prompt.is_empty() {
            convo.push(Message::system(prompt));
        }
        convo
    }

    /// Append a message to the history.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The full ordered history.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The number of messages in the history.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
