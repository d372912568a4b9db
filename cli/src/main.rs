//! # VELOS Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the VELOS CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Start an interactive session against ./context.json
//! velos chat
//!
//! # One-shot reply with a different knowledge base and debug logging
//! velos -vv --knowledge data/context.json ask "what is rust?"
//!
//! # See how a reply was chosen
//! velos explain hello
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use velos::commands::{self, SessionArgs};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "velos",
    about = "VELOS AI: rule-based conversational responder",
    long_about = "Answers free-text utterances from a JSON knowledge base.\n\
                  Selects a topical context, picks a conversation pair, and varies its answer\n\
                  with a word-bigram walk.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    session: SessionArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Start an interactive chat session (type 'exit' to quit).
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single utterance.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Answer a single utterance and show how the reply was chosen.
    #[command(alias = "x")]
    Explain(commands::explain::ExplainArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, &cli.session),
        Commands::Ask(args) => commands::ask::handle_ask(args, &cli.session),
        Commands::Explain(args) => commands::explain::handle_explain(args, &cli.session),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
