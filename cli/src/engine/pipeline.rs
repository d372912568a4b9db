//! # Response Pipeline
//!
//! File: cli/src/engine/pipeline.rs
//!
//! ## Overview
//!
//! Orchestrates one conversational turn:
//!
//! ```text
//! input ──► ContextSelector ──► PairSelector ──► bigram candidates ──► re-rank ──► reply
//! ```
//!
//! 1. Select a context for the input.
//! 2. Select a conversation pair within it.
//! 3. Generate several bigram variants of the pair's answer.
//! 4. Return the variant with the highest Jaccard similarity to the answer.
//!
//! A [`Responder`] borrows the knowledge base and owns nothing mutable, so one
//! instance can answer any number of turns. All randomness comes from the
//! `rng` argument; pass a seeded `StdRng` for reproducible replies.
//!
//! ## Examples
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use velos::engine::{ContextEntry, KnowledgeBase, Responder};
//!
//! let kb = KnowledgeBase::new(vec![ContextEntry::new("Greetings", &[("hi", "hello there")])]);
//! let responder = Responder::new(&kb);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let reply = responder.respond("hi", &mut rng).unwrap();
//! assert!(reply == "hello there." || reply == "hello.");
//! ```
//!
use crate::core::error::EngineResult;
use crate::engine::bigram::generate_candidates;
use crate::engine::context::{ContextSelection, ContextSelector, DEFAULT_CONTEXT_THRESHOLD};
use crate::engine::knowledge::KnowledgeBase;
use crate::engine::pair::{PairSelection, PairSelector, DEFAULT_MAX_PAIR_DISTANCE};
use crate::engine::similarity::jaccard;
use rand::Rng;
use tracing::debug;

/// Number of answer variants generated per turn.
pub const DEFAULT_CANDIDATES: usize = 5;

/// Tuning knobs for a [`Responder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponderSettings {
    /// Answer variants generated per turn. Values below 1 are treated as 1.
    pub candidates: usize,
    /// Minimum possibility for a scored context match.
    pub context_threshold: f64,
    /// Largest edit distance at which the nearest stored question is used.
    pub max_pair_distance: usize,
}

impl Default for ResponderSettings {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES,
            context_threshold: DEFAULT_CONTEXT_THRESHOLD,
            max_pair_distance: DEFAULT_MAX_PAIR_DISTANCE,
        }
    }
}

/// A generated variant and its similarity to the seed answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub text: String,
    pub score: f64,
}

/// Everything the pipeline decided while answering one input.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseTrace<'kb> {
    pub input: String,
    pub context: ContextSelection<'kb>,
    pub pair: PairSelection<'kb>,
    pub candidates: Vec<ScoredCandidate>,
    /// Index into `candidates` of the returned reply.
    pub chosen: usize,
    pub reply: String,
}

/// Answers utterances from a borrowed, immutable knowledge base.
#[derive(Debug, Clone, Copy)]
pub struct Responder<'kb> {
    knowledge: &'kb KnowledgeBase,
    settings: ResponderSettings,
    contexts: ContextSelector,
    pairs: PairSelector,
}

impl<'kb> Responder<'kb> {
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        Self::with_settings(knowledge, ResponderSettings::default())
    }

    pub fn with_settings(knowledge: &'kb KnowledgeBase, settings: ResponderSettings) -> Self {
        Self {
            knowledge,
            settings,
            contexts: ContextSelector::new(settings.context_threshold),
            pairs: PairSelector::new(settings.max_pair_distance),
        }
    }

    pub fn settings(&self) -> &ResponderSettings {
        &self.settings
    }

    pub fn knowledge(&self) -> &'kb KnowledgeBase {
        self.knowledge
    }

    /// Produces the reply for `input`.
    ///
    /// # Errors
    ///
    /// - `VelosError::NoContextAvailable` for an empty knowledge base.
    /// - `VelosError::EmptyConversation` if the selected context has no pairs.
    pub fn respond<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> EngineResult<String> {
        self.explain(input, rng).map(|trace| trace.reply)
    }

    /// Runs the full pipeline and returns every intermediate decision.
    pub fn explain<R: Rng + ?Sized>(
        &self,
        input: &str,
        rng: &mut R,
    ) -> EngineResult<ResponseTrace<'kb>> {
        let context = self.contexts.select_with_reason(input, self.knowledge)?;
        let pair = self.pairs.select_with_reason(context.context, input, rng)?;

        let answer = pair.pair.answer.as_str();
        let texts = generate_candidates(answer, self.settings.candidates.max(1), rng);
        let candidates: Vec<ScoredCandidate> = texts
            .into_iter()
            .map(|text| {
                let score = jaccard(&text, answer);
                ScoredCandidate { text, score }
            })
            .collect();

        let chosen = choose_best_candidate(&candidates);
        let reply = candidates[chosen].text.clone();
        debug!(
            "Context '{}' ({}), pair {:?} ({}), reply {:?}",
            context.context.query, context.reason, pair.pair.question, pair.reason, reply
        );

        Ok(ResponseTrace {
            input: input.to_string(),
            context,
            pair,
            candidates,
            chosen,
            reply,
        })
    }
}

/// Index of the highest-scoring candidate.
///
/// The running best starts at the first candidate with score 0 and is replaced
/// only on strict improvement, so the earliest candidate wins ties and an
/// all-zero list yields index 0. Also returns 0 for an empty slice.
pub fn choose_best_candidate(candidates: &[ScoredCandidate]) -> usize {
    let mut best_index = 0;
    let mut best_score = 0.0;
    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.score > best_score {
            best_score = candidate.score;
            best_index = index;
        }
    }
    best_index
}
