//! # Conversation Pair Selection
//!
//! File: cli/src/engine/pair.rs
//!
//! Within the chosen context, question-form input is matched to the stored
//! question with the smallest edit distance (after normalization). A match
//! within 5 edits is used as-is; anything further away, and any input that is
//! not a question, gets a uniformly random pair from the context instead.
//!
use crate::core::error::{EngineResult, VelosError};
use crate::engine::knowledge::{ContextEntry, ConversationPair};
use crate::engine::normalize::{is_question, normalize};
use crate::engine::similarity::edit_distance;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Largest edit distance at which the nearest stored question is trusted.
pub const DEFAULT_MAX_PAIR_DISTANCE: usize = 5;

/// How a pair was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairReason {
    NearestQuestion,
    Random,
}

impl std::fmt::Display for PairReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairReason::NearestQuestion => f.write_str("nearest question"),
            PairReason::Random => f.write_str("random"),
        }
    }
}

/// The selected pair and the evidence behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairSelection<'kb> {
    pub pair: &'kb ConversationPair,
    pub reason: PairReason,
    /// Distance to the nearest stored question; `None` when the input was not
    /// a question and no distances were computed.
    pub distance: Option<usize>,
}

/// Chooses a conversation pair inside a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairSelector {
    max_distance: usize,
}

impl Default for PairSelector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PAIR_DISTANCE)
    }
}

impl PairSelector {
    pub fn new(max_distance: usize) -> Self {
        Self { max_distance }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Returns the pair to answer `input` with.
    ///
    /// # Errors
    ///
    /// `VelosError::EmptyConversation` if `context` has no pairs.
    pub fn select<'kb, R: Rng + ?Sized>(
        &self,
        context: &'kb ContextEntry,
        input: &str,
        rng: &mut R,
    ) -> EngineResult<&'kb ConversationPair> {
        self.select_with_reason(context, input, rng)
            .map(|selection| selection.pair)
    }

    /// Same as [`PairSelector::select`], also reporting which route was taken.
    pub fn select_with_reason<'kb, R: Rng + ?Sized>(
        &self,
        context: &'kb ContextEntry,
        input: &str,
        rng: &mut R,
    ) -> EngineResult<PairSelection<'kb>> {
        if context.conversation.is_empty() {
            return Err(VelosError::EmptyConversation {
                query: context.query.clone(),
            });
        }

        let mut distance = None;
        if is_question(input) {
            if let Some((pair, best)) = nearest_pair(context, input) {
                distance = Some(best);
                if best <= self.max_distance {
                    debug!("Nearest question {:?} at distance {}", pair.question, best);
                    return Ok(PairSelection {
                        pair,
                        reason: PairReason::NearestQuestion,
                        distance,
                    });
                }
                debug!(
                    "Nearest question {:?} is {} edits away (max {}), picking at random",
                    pair.question, best, self.max_distance
                );
            }
        }

        let pair = context
            .conversation
            .choose(rng)
            .ok_or_else(|| VelosError::EmptyConversation {
                query: context.query.clone(),
            })?;
        Ok(PairSelection {
            pair,
            reason: PairReason::Random,
            distance,
        })
    }
}

/// Stored pair whose normalized question is closest to the normalized input,
/// with its distance. The earliest pair wins ties; `None` for an empty context.
pub fn nearest_pair<'kb>(
    context: &'kb ContextEntry,
    input: &str,
) -> Option<(&'kb ConversationPair, usize)> {
    let normalized_input = normalize(input);
    let mut best: Option<(&ConversationPair, usize)> = None;
    for pair in &context.conversation {
        let distance = edit_distance(&normalized_input, &normalize(&pair.question));
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((pair, distance));
        }
    }
    best
}
