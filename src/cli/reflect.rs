//! Generate/reflect critique loop.

use anyhow::{Context, Result};

use orrery::config::Config;
use orrery::reflection::ReflectionLoop;

use super::common::create_provider;

/// Run the reflect/generate loop for one request and print the transcript.
pub(crate) async fn cmd_reflect(request: &str, drafts: Option<usize>) -> Result<()> {
    let config = Config::load().with_context(|| "Failed to load configuration")?;
    let provider = create_provider(&config)?;

    let mut looper = match drafts {
        Some(n) => ReflectionLoop::new(provider).with_max_drafts(n),
        None => ReflectionLoop::new(provider),
    };

    let outcome = looper.run(request).await?;

    for (i, step) in outcome.steps.iter().enumerate() {
        println!("--- Draft {} ---", i + 1);
        println!("{}", step.draft);
        if let Some(critique) = &step.critique {
            println!();
            println!("--- Critique {} ---", i + 1);
            println!("{}", critique);
        }
        println!();
    }

    println!("=== Final ===");
    println!("{}", outcome.final_draft());
    Ok(())
}
