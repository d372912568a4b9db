//! # Context Selection
//!
//! File: cli/src/engine/context.rs
//!
//! ## Overview
//!
//! Picks the knowledge base entry an utterance is about. Three routes, tried
//! in order:
//!
//! 1. **Greeting override**: an exact greeting ("hi", "good evening", ...)
//!    goes to the first entry whose normalized query is `greetings`, if any.
//! 2. **Possibility**: every entry gets a score in `[0, 1]` (see
//!    [`possibility`]); the highest score wins if it reaches the threshold
//!    (0.5 by default). Ties go to the earlier entry.
//! 3. **Fallback**: otherwise the entry with the most conversation pairs,
//!    again preferring the earlier entry on ties.
//!
//! An empty knowledge base is an error, not an empty reply.
//!
use crate::core::error::{EngineResult, VelosError};
use crate::engine::knowledge::{ContextEntry, KnowledgeBase};
use crate::engine::normalize::{is_greeting, normalize};
use tracing::debug;

/// Normalized query label that receives greeting utterances.
pub const GREETING_CONTEXT: &str = "greetings";

/// Minimum possibility for a scored match to beat the fallback.
pub const DEFAULT_CONTEXT_THRESHOLD: f64 = 0.5;

/// Relevance of one entry to the current input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PossibilityScore<'kb> {
    pub context: &'kb ContextEntry,
    pub possibility: f64,
}

/// How a context was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    Greeting,
    Possibility,
    Fallback,
}

impl std::fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SelectionReason::Greeting => "greeting override",
            SelectionReason::Possibility => "possibility match",
            SelectionReason::Fallback => "fallback (largest conversation)",
        };
        f.write_str(label)
    }
}

/// The selected context plus the evidence behind the choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextSelection<'kb> {
    pub context: &'kb ContextEntry,
    pub reason: SelectionReason,
    /// The selected entry's own possibility score; `None` for the greeting override,
    /// which skips scoring.
    pub possibility: Option<f64>,
}

/// Chooses a context for an utterance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextSelector {
    threshold: f64,
}

impl Default for ContextSelector {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_THRESHOLD)
    }
}

impl ContextSelector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the context for `input`.
    ///
    /// # Errors
    ///
    /// `VelosError::NoContextAvailable` if the knowledge base is empty.
    pub fn select<'kb>(
        &self,
        input: &str,
        knowledge: &'kb KnowledgeBase,
    ) -> EngineResult<&'kb ContextEntry> {
        self.select_with_reason(input, knowledge)
            .map(|selection| selection.context)
    }

    /// Same as [`ContextSelector::select`], also reporting which route was taken.
    pub fn select_with_reason<'kb>(
        &self,
        input: &str,
        knowledge: &'kb KnowledgeBase,
    ) -> EngineResult<ContextSelection<'kb>> {
        if knowledge.is_empty() {
            return Err(VelosError::NoContextAvailable);
        }

        if is_greeting(input) {
            if let Some(context) = greeting_context(knowledge) {
                debug!("Greeting detected, using context '{}'", context.query);
                return Ok(ContextSelection {
                    context,
                    reason: SelectionReason::Greeting,
                    possibility: None,
                });
            }
            debug!("Greeting detected but no '{}' context exists", GREETING_CONTEXT);
        }

        let scores = score_contexts(input, knowledge);
        let mut best: Option<&PossibilityScore<'kb>> = None;
        for score in &scores {
            if best.map_or(true, |b| score.possibility > b.possibility) {
                best = Some(score);
            }
        }

        if let Some(best) = best {
            if best.possibility >= self.threshold {
                debug!(
                    "Context '{}' matched with possibility {:.3}",
                    best.context.query, best.possibility
                );
                return Ok(ContextSelection {
                    context: best.context,
                    reason: SelectionReason::Possibility,
                    possibility: Some(best.possibility),
                });
            }
            debug!(
                "Best possibility {:.3} ('{}') is below threshold {:.3}",
                best.possibility, best.context.query, self.threshold
            );
        }

        let index = largest_context_index(knowledge).ok_or(VelosError::NoContextAvailable)?;
        let fallback = scores[index];
        debug!("Falling back to largest context '{}'", fallback.context.query);
        Ok(ContextSelection {
            context: fallback.context,
            reason: SelectionReason::Fallback,
            possibility: Some(fallback.possibility),
        })
    }
}

/// Scores every entry against `input`, in knowledge base order.
pub fn score_contexts<'kb>(input: &str, knowledge: &'kb KnowledgeBase) -> Vec<PossibilityScore<'kb>> {
    let normalized_input = normalize(input);
    knowledge
        .iter_normalized()
        .map(|(context, normalized_query)| PossibilityScore {
            context,
            possibility: possibility(&normalized_input, normalized_query),
        })
        .collect()
}

/// Possibility that a normalized input is about a normalized query label.
///
/// - `1.0` if the query occurs verbatim inside the input.
/// - Otherwise the fraction of query tokens that equal, contain, or are
///   contained in some input token. The containment test is deliberately
///   loose: a one-letter input token matches every query token holding that
///   letter.
/// - `0.0` for a query with no tokens that is not a substring of the input.
///
/// An input that normalizes to nothing counts as one empty token. Every query
/// token contains it, so each non-empty query scores `1.0` and the first entry
/// wins selection.
pub fn possibility(normalized_input: &str, normalized_query: &str) -> f64 {
    if normalized_input.contains(normalized_query) {
        return 1.0;
    }

    let input_tokens: Vec<&str> = if normalized_input.is_empty() {
        vec![""]
    } else {
        normalized_input.split_whitespace().collect()
    };
    let mut total = 0usize;
    let mut matched = 0usize;
    for token in normalized_query.split_whitespace() {
        total += 1;
        if input_tokens
            .iter()
            .any(|t| *t == token || t.contains(token) || token.contains(*t))
        {
            matched += 1;
        }
    }

    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}

/// First entry whose normalized query is [`GREETING_CONTEXT`].
pub fn greeting_context(knowledge: &KnowledgeBase) -> Option<&ContextEntry> {
    knowledge
        .iter_normalized()
        .find(|(_, normalized_query)| *normalized_query == GREETING_CONTEXT)
        .map(|(context, _)| context)
}

/// Entry with the longest conversation; the earliest one wins ties.
pub fn largest_context(knowledge: &KnowledgeBase) -> Option<&ContextEntry> {
    largest_context_index(knowledge).map(|index| &knowledge.entries()[index])
}

fn largest_context_index(knowledge: &KnowledgeBase) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, entry) in knowledge.entries().iter().enumerate() {
        let size = entry.conversation.len();
        if best.map_or(true, |(_, best_size)| size > best_size) {
            best = Some((index, size));
        }
    }
    best.map(|(index, _)| index)
}
