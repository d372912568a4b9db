//! # VELOS Response Engine
//!
//! File: cli/src/engine/mod.rs
//!
//! ## Overview
//!
//! The engine turns one free-text utterance into one textual reply using only
//! string heuristics over an in-memory knowledge base. It performs no I/O and
//! holds no state between turns.
//!
//! ## Architecture
//!
//! Leaf-first:
//! - `normalize`: case folding, punctuation stripping, greeting/question detection
//! - `similarity`: Levenshtein distance and Jaccard token overlap
//! - `knowledge`: the knowledge base data model
//! - `bigram`: self-seeded word-bigram answer variation
//! - `context`: possibility-weighted context selection
//! - `pair`: conversation pair selection within a context
//! - `pipeline`: the `Responder` that ties the stages together
//!
pub mod bigram;
pub mod context;
pub mod knowledge;
pub mod normalize;
pub mod pair;
pub mod pipeline;
pub mod similarity;

pub use knowledge::{ContextEntry, ConversationPair, KnowledgeBase};
pub use pipeline::{Responder, ResponderSettings, ResponseTrace};
