//! Shared CLI helpers used across command handlers.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};

use orrery::config::Config;
use orrery::providers::{ChatOptions, ChatProvider, OpenAiProvider};

/// Case-insensitive exit keywords for interactive loops.
const EXIT_KEYWORDS: [&str; 2] = ["quit", "exit"];

/// Whether a line of input asks to end the session.
pub(crate) fn is_exit_command(input: &str) -> bool {
    let lowered = input.trim().to_lowercase();
    EXIT_KEYWORDS.contains(&lowered.as_str())
}

/// Print a prompt and read one trimmed line from stdin.
///
/// `None` on EOF, which interactive loops treat like an exit keyword.
pub(crate) fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush().with_context(|| "Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut input)
        .with_context(|| "Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Build the configured provider from config + environment.
pub(crate) fn create_provider(config: &Config) -> Result<Arc<dyn ChatProvider>> {
    let api_key = config
        .api_key()
        .with_context(|| "No model-provider credential available")?;

    let provider = match config.provider.api_base.as_deref() {
        Some(base) => OpenAiProvider::with_base_url(api_key, base),
        None => OpenAiProvider::new(api_key),
    };
    Ok(Arc::new(provider))
}

/// Sampling options derived from config. Temperature stays pinned unless
/// the config overrides it.
pub(crate) fn chat_options(config: &Config) -> ChatOptions {
    ChatOptions::new().with_temperature(config.agent.temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_keywords_case_insensitive() {
        assert!(is_exit_command("quit"));
        assert!(is_exit_command("QUIT"));
        assert!(is_exit_command("Exit"));
        assert!(is_exit_command("  exit  "));
    }

    #[test]
    fn test_non_exit_input() {
        assert!(!is_exit_command("quit please"));
        assert!(!is_exit_command("What is the mass of Earth?"));
        assert!(!is_exit_command(""));
    }
}
