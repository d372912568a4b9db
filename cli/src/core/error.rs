//! # VELOS Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout VELOS. The response
//! engine reports a small, closed set of failures as a typed enum; the
//! application layer (commands, loaders, configuration) wraps them in
//! `anyhow::Error` so context can be attached on the way up.
//!
//! ## Architecture
//!
//! The error system consists of three parts:
//! - `VelosError`: A custom error enum using `thiserror`
//! - `EngineResult<T>`: `std::result::Result<T, VelosError>`, returned by `engine::*`
//! - `Result<T>`: A type alias for `anyhow::Result<T>` used by everything else
//!
//! The engine never substitutes "safe" placeholder data for a missing context
//! or an empty conversation: it returns one of these variants instead.
//!
//! ## Examples
//!
//! ```text
//! // Engine code returns typed errors
//! if entry.conversation.is_empty() {
//!     return Err(VelosError::EmptyConversation { query: entry.query.clone() });
//! }
//!
//! // Application code adds context with anyhow
//! let reply = responder.respond(input, &mut rng)
//!     .with_context(|| format!("Failed to answer '{}'", input))?;
//!
//! // Matching on a specific variant
//! match err.downcast_ref::<VelosError>() {
//!     Some(VelosError::NoContextAvailable) => eprintln!("knowledge base is empty"),
//!     _ => {}
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the VELOS responder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VelosError {
    #[error("Knowledge base unavailable at '{path}': {reason}")]
    KnowledgeBaseUnavailable { path: String, reason: String },

    #[error("Context '{query}' has no conversation pairs.")]
    EmptyConversation { query: String },

    #[error("No context available: the knowledge base is empty.")]
    NoContextAvailable,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type returned by the response engine.
pub type EngineResult<T> = std::result::Result<T, VelosError>;

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
