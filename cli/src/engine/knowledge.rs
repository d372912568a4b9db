//! # Knowledge Base Data Model
//!
//! File: cli/src/engine/knowledge.rs
//!
//! ## Overview
//!
//! The knowledge base is an ordered list of topical contexts, each holding the
//! question/answer pairs the responder can draw from. It is parsed once,
//! before the first request, and never written afterwards; the engine only
//! ever borrows it.
//!
//! Order matters: every tie in the engine (equal possibility scores, equal
//! conversation lengths) is broken in favour of the entry that appears first,
//! so the entries are kept in a `Vec` exactly as they appear in the document.
//!
//! ## Document Format
//!
//! ```json
//! [
//!   {
//!     "Query": "Greetings",
//!     "Conversation": [
//!       { "Question": "hi", "Answer": "hello there" }
//!     ]
//!   }
//! ]
//! ```
//!
//! This module only parses text that is already in memory; reading the file
//! is done by `common::dataset`.
//!
use crate::engine::normalize::normalize;
use serde::{Deserialize, Serialize};

/// A stored question and the answer used to seed the reply.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ConversationPair {
    pub question: String,
    pub answer: String,
}

/// A topic label and its conversation pairs.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ContextEntry {
    pub query: String,
    pub conversation: Vec<ConversationPair>,
}

impl ContextEntry {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(query: &str, pairs: &[(&str, &str)]) -> Self {
        Self {
            query: query.to_string(),
            conversation: pairs
                .iter()
                .map(|(question, answer)| ConversationPair {
                    question: question.to_string(),
                    answer: answer.to_string(),
                })
                .collect(),
        }
    }
}

/// The immutable, ordered set of contexts.
///
/// Normalized query labels are computed once at construction so context
/// scoring does not re-normalize every label on every request.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(from = "Vec<ContextEntry>")]
pub struct KnowledgeBase {
    entries: Vec<ContextEntry>,
    normalized_queries: Vec<String>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<ContextEntry>) -> Self {
        let normalized_queries = entries.iter().map(|e| normalize(&e.query)).collect();
        Self {
            entries,
            normalized_queries,
        }
    }

    /// Parses a JSON knowledge base document.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn entries(&self) -> &[ContextEntry] {
        &self.entries
    }

    /// Iterates entries in document order alongside their normalized query.
    pub fn iter_normalized(&self) -> impl Iterator<Item = (&ContextEntry, &str)> {
        self.entries
            .iter()
            .zip(self.normalized_queries.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<ContextEntry>> for KnowledgeBase {
    fn from(entries: Vec<ContextEntry>) -> Self {
        Self::new(entries)
    }
}
