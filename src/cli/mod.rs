//! CLI module — command parsing and dispatch
//!
//! All CLI logic lives here. `main.rs` calls `cli::run()`.

pub mod ask;
pub mod chat;
pub mod common;
pub mod reflect;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orrery")]
#[command(version)]
#[command(about = "Tiny ReAct-style assistant for solar-system arithmetic", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive chat session (default)
    Chat {
        /// End the session after this many user turns
        #[arg(long)]
        max_turns: Option<usize>,
    },
    /// Answer a single question, chaining tool calls automatically
    Ask {
        /// The question to answer
        question: String,
        /// Iteration guard for the parse/act/observe loop
        #[arg(long)]
        max_steps: Option<usize>,
    },
    /// Improve a post through a generate/reflect critique loop
    Reflect {
        /// The request, e.g. a tweet to improve
        request: String,
        /// Number of drafts to produce
        #[arg(long)]
        drafts: Option<usize>,
    },
    /// Show version information
    Version,
}

/// Entry point for the CLI — called from main().
pub async fn run() -> Result<()> {
    // Honor a local .env before config load so OPENAI_API_KEY is visible
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        // The REPL is the primary surface; bare `orrery` starts it
        None => chat::cmd_chat(None).await?,
        Some(Commands::Chat { max_turns }) => chat::cmd_chat(max_turns).await?,
        Some(Commands::Ask {
            question,
            max_steps,
        }) => ask::cmd_ask(&question, max_steps).await?,
        Some(Commands::Reflect { request, drafts }) => {
            reflect::cmd_reflect(&request, drafts).await?
        }
        Some(Commands::Version) => {
            println!("orrery {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
