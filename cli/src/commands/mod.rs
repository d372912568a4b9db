//! # VELOS Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the `velos` CLI and the
//! session setup they share.
//!
//! ## Architecture
//!
//! Every command follows the same flow:
//! 1. Resolve configuration (`core::config`) from files and the shared
//!    [`SessionArgs`] flags.
//! 2. Load the knowledge base (`common::dataset`).
//! 3. Build a `Responder` over it and a random source.
//! 4. Run the command-specific front end.
//!
//! ## Commands
//!
//! - `chat`: Interactive turn-taking loop
//! - `ask`: Answer a single utterance and exit
//! - `explain`: Answer a single utterance and print every pipeline decision
//!
use crate::common::dataset;
use crate::core::config::{self, Config, Overrides};
use crate::core::error::Result;
use crate::engine::{KnowledgeBase, Responder};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

/// Interactive chat loop. Reads one line at a time until `exit` or end of input.
pub mod chat;
/// One-shot reply to a single utterance.
pub mod ask;
/// One-shot reply with a full trace of the pipeline's decisions.
pub mod explain;

/// Flags shared by every command.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct SessionArgs {
    /// Configuration file to use instead of searching for `.velos.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the JSON knowledge base.
    #[arg(long, short, env = "VELOS_KNOWLEDGE", global = true)]
    pub knowledge: Option<PathBuf>,

    /// Seed the random source for reproducible replies.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Label printed before each reply.
    #[arg(long, global = true)]
    pub label: Option<String>,
}

impl SessionArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            config_file: self.config.clone(),
            knowledge: self.knowledge.clone(),
            seed: self.seed,
            label: self.label.clone(),
        }
    }
}

/// Resolved configuration plus the loaded knowledge base.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub knowledge: KnowledgeBase,
}

impl Session {
    /// Loads configuration and the knowledge base for a command.
    pub fn open(args: &SessionArgs) -> Result<Self> {
        let config = config::load_config(&args.overrides())?;
        let knowledge = dataset::load_knowledge_base(&config.knowledge_path())?;
        Ok(Self { config, knowledge })
    }

    pub fn responder(&self) -> Responder<'_> {
        Responder::with_settings(&self.knowledge, self.config.matching.settings())
    }

    /// Seeded from `chat.seed` when set, otherwise from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.config.chat.seed {
            Some(seed) => {
                info!("Using fixed random seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }

    pub fn label(&self) -> &str {
        &self.config.chat.label
    }
}
