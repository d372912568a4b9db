//! # VELOS Interactive Chat (`velos chat`)
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! Turn-taking loop: print a prompt, read one line, answer it, repeat.
//!
//! - The trimmed line `exit` (any case) ends the session before the engine runs.
//! - End of input ends the session.
//! - Blank lines are skipped without running the engine, so an empty line
//!   gets no reply at all (not even a greeting or fallback answer).
//! - Each reply is printed as `<label>: <reply>` followed by an empty line.
//! - A failed turn is reported on stderr and the loop continues, except when the
//!   knowledge base is empty, which no later turn could recover from.
//!
//! The loop is written against `BufRead`/`Write` so tests can drive it with
//! in-memory buffers.
//!
//! ## Examples
//!
//! ```bash
//! velos chat --knowledge ./context.json
//! velos --seed 42 chat
//! ```
//!
use crate::commands::{Session, SessionArgs};
use crate::core::error::{Result, VelosError};
use crate::engine::Responder;
use anyhow::Context;
use clap::Parser;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info};

pub const BANNER: &str = "VELOS AI (Version 1.5) - Dynamic Response Prediction Backend";
pub const INSTRUCTIONS: &str = "Ask a question (or type 'exit' to quit):";
pub const PROMPT: &str = "> ";

/// Arguments for `velos chat`. All options are the shared session flags.
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {}

pub fn handle_chat(_args: ChatArgs, session_args: &SessionArgs) -> Result<()> {
    let session = Session::open(session_args)?;
    let responder = session.responder();
    let mut rng = session.rng();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_chat(
        &responder,
        session.label(),
        stdin.lock(),
        stdout.lock(),
        &mut rng,
    )
}

/// `true` if the trimmed input is `exit`, ignoring case.
pub fn is_exit(input: &str) -> bool {
    input.trim().to_lowercase() == "exit"
}

/// Runs the chat loop until `exit` or end of input.
pub fn run_chat<I, O, R>(
    responder: &Responder<'_>,
    label: &str,
    mut input: I,
    mut output: O,
    rng: &mut R,
) -> Result<()>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    writeln!(output, "{}", BANNER)?;
    writeln!(output, "{}", INSTRUCTIONS)?;

    let mut line = String::new();
    let mut turns = 0usize;
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush().context("Failed to flush output")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            debug!("End of input reached.");
            writeln!(output)?;
            break;
        }

        let trimmed = line.trim();
        if is_exit(trimmed) {
            debug!("Exit requested.");
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        match responder.respond(trimmed, rng) {
            Ok(reply) => {
                turns += 1;
                writeln!(output, "{}: {}", label, reply)?;
                writeln!(output)?;
            }
            Err(VelosError::NoContextAvailable) => {
                return Err(VelosError::NoContextAvailable.into());
            }
            Err(e) => {
                error!("Failed to answer {:?}: {}", trimmed, e);
                eprintln!("Error: {}", e);
            }
        }
    }

    info!("Chat session ended after {} replies.", turns);
    Ok(())
}
