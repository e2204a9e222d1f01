//! Interactive chat session.
//!
//! Drives the conversation state machine: read a user line, get the
//! model's reply, run at most one action round-trip, then wait for the
//! next line. `quit`/`exit` (case-insensitive) end the session without
//! calling the model.

use anyhow::{Context, Result};

use orrery::agent::{parse_action, Agent, SYSTEM_PROMPT};
use orrery::config::Config;
use orrery::tools::ToolRegistry;

use super::common::{chat_options, create_provider, is_exit_command, prompt_line};

/// Interactive session loop, optionally bounded to `max_turns` user turns.
pub(crate) async fn cmd_chat(max_turns: Option<usize>) -> Result<()> {
    let config = Config::load().with_context(|| "Failed to load configuration")?;
    let provider = create_provider(&config)?;
    let registry = ToolRegistry::with_defaults();

    let mut agent = Agent::new(provider, SYSTEM_PROMPT)
        .with_model(&config.agent.model)
        .with_options(chat_options(&config));

    println!("Orrery interactive session");
    println!("Available actions: {}", registry.names().join(", "));
    println!("Type your question and press Enter. Type 'quit' or 'exit' to stop.");
    println!();

    let mut turns = 0usize;
    loop {
        if let Some(bound) = max_turns {
            if turns >= bound {
                println!("Turn limit reached. Goodbye!");
                break;
            }
        }

        let Some(input) = prompt_line("You: ")? else {
            // EOF
            println!();
            break;
        };
        if input.is_empty() {
            continue;
        }
        if is_exit_command(&input) {
            println!("Goodbye!");
            break;
        }
        turns += 1;

        // A provider failure ends the turn, not the session
        let reply = match agent.send(&input).await {
            Ok(reply) => reply,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };
        println!("Bot: {}", reply);

        // One observation round-trip per user turn
        if let Some(action) = parse_action(&reply) {
            println!(" -- running {} {}", action.name, action.argument);
            let observation = registry.dispatch(&action.name, &action.argument);
            println!("Observation: {}", observation);

            match agent.send(&format!("Observation: {}", observation)).await {
                Ok(next_reply) => println!("Bot: {}", next_reply),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
    }

    Ok(())
}
