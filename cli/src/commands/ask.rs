//! # VELOS One-Shot Reply (`velos ask`)
//!
//! File: cli/src/commands/ask.rs
//!
//! Answers a single utterance and exits; handy for scripting and for checking
//! a knowledge base without entering the chat loop.
//!
//! ```bash
//! velos ask "what is rust?"
//! velos --seed 7 ask hello
//! ```
//!
use crate::commands::{Session, SessionArgs};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};

/// Arguments for `velos ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The utterance to answer. Multiple words are joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    pub utterance: Vec<String>,
}

impl AskArgs {
    pub fn text(&self) -> String {
        self.utterance.join(" ")
    }
}

pub fn handle_ask(args: AskArgs, session_args: &SessionArgs) -> Result<()> {
    let session = Session::open(session_args)?;
    let input = args.text();
    let reply = session
        .responder()
        .respond(input.trim(), &mut session.rng())
        .with_context(|| format!("Failed to answer {:?}", input))?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}: {}", session.label(), reply)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_multi_word_utterance() {
        let args = AskArgs::try_parse_from(["ask", "what", "is", "rust?"]).unwrap();
        assert_eq!(args.text(), "what is rust?");
    }

    #[test]
    fn test_utterance_is_required() {
        assert!(AskArgs::try_parse_from(["ask"]).is_err());
    }
}
