//! # VELOS Pipeline Trace (`velos explain`)
//!
//! File: cli/src/commands/explain.rs
//!
//! ## Overview
//!
//! Answers one utterance and prints why: the selected context and the route
//! that chose it, the conversation pair and its question distance, every
//! generated candidate with its similarity score, and the final reply.
//!
//! ## Example Output
//!
//! ```text
//! Input:       what is rust?
//! Context:     Programming (possibility match, possibility 1.000)
//! Pair:        "What is Rust?" (nearest question, distance 0)
//! Answer:      "Rust is a systems language."
//! Candidates:
//!   * 1.000  Rust is a systems language.
//!     0.500  Rust is a.
//! Reply:       Rust is a systems language.
//! ```
//!
use crate::commands::{Session, SessionArgs};
use crate::core::error::Result;
use crate::engine::ResponseTrace;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};

/// Arguments for `velos explain`.
#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// The utterance to answer. Multiple words are joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    pub utterance: Vec<String>,
}

pub fn handle_explain(args: ExplainArgs, session_args: &SessionArgs) -> Result<()> {
    let session = Session::open(session_args)?;
    let input = args.utterance.join(" ");
    let trace = session
        .responder()
        .explain(input.trim(), &mut session.rng())
        .with_context(|| format!("Failed to answer {:?}", input))?;

    let mut stdout = io::stdout().lock();
    render_trace(&trace, &mut stdout)?;
    Ok(())
}

/// Writes a human-readable rendering of `trace`.
pub fn render_trace<W: Write>(trace: &ResponseTrace<'_>, out: &mut W) -> io::Result<()> {
    writeln!(out, "Input:       {}", trace.input)?;

    let possibility = trace
        .context
        .possibility
        .map(|p| format!(", possibility {:.3}", p))
        .unwrap_or_default();
    writeln!(
        out,
        "Context:     {} ({}{})",
        trace.context.context.query, trace.context.reason, possibility
    )?;

    let distance = trace
        .pair
        .distance
        .map(|d| format!(", distance {}", d))
        .unwrap_or_default();
    writeln!(
        out,
        "Pair:        {:?} ({}{})",
        trace.pair.pair.question, trace.pair.reason, distance
    )?;
    writeln!(out, "Answer:      {:?}", trace.pair.pair.answer)?;

    writeln!(out, "Candidates:")?;
    for (index, candidate) in trace.candidates.iter().enumerate() {
        let marker = if index == trace.chosen { '*' } else { ' ' };
        writeln!(out, "  {} {:.3}  {}", marker, candidate.score, candidate.text)?;
    }
    writeln!(out, "Reply:       {}", trace.reply)
}
