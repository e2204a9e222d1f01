//! Orrery — a tiny ReAct-style conversational agent.
//!
//! The agent sends conversation history to a chat-completion provider, scans
//! the reply for an embedded `Action: name: argument` line, runs the matching
//! local tool, and feeds the result back as an `Observation:` message.

pub mod agent;
pub mod config;
pub mod error;
pub mod providers;
pub mod reflection;
pub mod session;
pub mod tools;

pub use agent::{parse_action, ActionRequest, Agent};
pub use config::Config;
pub use error::{OrreryError, Result};
pub use providers::{ChatOptions, ChatProvider, OpenAiProvider};
pub use session::{Conversation, Message, Role};
pub use tools::{Tool, ToolRegistry};
