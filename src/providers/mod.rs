//! Chat-completion providers for Orrery
//!
//! A provider translates between Orrery's message format and a model
//! provider's API. The only implementation is the OpenAI-compatible
//! chat-completions client; the trait exists so tests can inject doubles.

pub mod openai;
pub mod types;

pub use openai::OpenAiProvider;
pub use types::{ChatOptions, ChatProvider};
