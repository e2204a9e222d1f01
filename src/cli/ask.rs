//! One-shot question answering.
//!
//! Unlike the interactive session, this mode chains tool calls: the reply
//! is parsed, dispatched, and observed repeatedly until the model stops
//! requesting actions or the max-steps guard trips.

use anyhow::{Context, Result};

use orrery::agent::{parse_action, Agent, SYSTEM_PROMPT};
use orrery::config::Config;
use orrery::tools::ToolRegistry;

use super::common::{chat_options, create_provider};

/// Answer a single question, running up to `max_steps` action round-trips.
pub(crate) async fn cmd_ask(question: &str, max_steps: Option<usize>) -> Result<()> {
    let config = Config::load().with_context(|| "Failed to load configuration")?;
    let provider = create_provider(&config)?;
    let registry = ToolRegistry::with_defaults();
    let max_steps = max_steps.unwrap_or(config.agent.max_steps);

    let mut agent = Agent::new(provider, SYSTEM_PROMPT)
        .with_model(&config.agent.model)
        .with_options(chat_options(&config));

    let mut reply = agent.send(question).await?;
    println!("Bot: {}", reply);

    for _ in 0..max_steps {
        let Some(action) = parse_action(&reply) else {
            // No action requested: the reply is the final answer
            return Ok(());
        };

        println!(" -- running {} {}", action.name, action.argument);
        let observation = registry.dispatch(&action.name, &action.argument);
        println!("Observation: {}", observation);

        reply = agent.send(&format!("Observation: {}", observation)).await?;
        println!("Bot: {}", reply);
    }

    if parse_action(&reply).is_some() {
        eprintln!("Stopped after {} steps with actions still pending.", max_steps);
    }
    Ok(())
}
