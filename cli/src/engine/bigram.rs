//! # Bigram Answer Variation
//!
//! File: cli/src/engine/bigram.rs
//!
//! ## Overview
//!
//! Answers are not returned verbatim. The chosen answer seeds a word-bigram
//! model built from that answer alone, and a random walk over the model
//! produces a variant: a reordering or truncation of the answer's own words.
//! No vocabulary from outside the seed can appear.
//!
//! ## Walk
//!
//! 1. Start with the seed's first word, in its original casing.
//! 2. Look up the lowercase form of the last emitted word; pick one of its
//!    recorded successors uniformly at random (duplicates make frequent
//!    successors more likely).
//! 3. Stop when the word has no successor or the output is as long as the seed.
//! 4. Join with single spaces and append `.`.
//!
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::trace;

/// Lowercase word -> successors observed after it, in order of appearance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BigramModel {
    successors: HashMap<String, Vec<String>>,
}

impl BigramModel {
    /// Builds the model from every adjacent word pair of `seed`.
    pub fn build(seed: &str) -> Self {
        let words: Vec<&str> = seed.split_whitespace().collect();
        let mut successors: HashMap<String, Vec<String>> = HashMap::new();
        for pair in words.windows(2) {
            successors
                .entry(pair[0].to_lowercase())
                .or_default()
                .push(pair[1].to_lowercase());
        }
        Self { successors }
    }

    /// Successors recorded for `word` (looked up case-insensitively).
    pub fn successors(&self, word: &str) -> Option<&[String]> {
        self.successors
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
    }

    /// Number of distinct words that have at least one successor.
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }
}

/// Produces one variant of `seed` by walking its own bigram model.
///
/// An empty (or whitespace-only) seed yields `"."`.
pub fn generate<R: Rng + ?Sized>(seed: &str, rng: &mut R) -> String {
    let model = BigramModel::build(seed);
    let mut words = seed.split_whitespace();
    let first = match words.next() {
        Some(word) => word,
        None => return ".".to_string(),
    };
    // The walk never emits more words than the seed holds; cyclic models
    // ("yes no yes no") would otherwise never terminate.
    let limit = 1 + words.count();

    let mut output = vec![first.to_string()];
    while output.len() < limit {
        let next = match output
            .last()
            .and_then(|last| model.successors(last))
            .and_then(|candidates| candidates.choose(rng))
        {
            Some(word) => word.clone(),
            None => break,
        };
        output.push(next);
    }

    let variant = format!("{}.", output.join(" "));
    trace!("Generated variant {:?} from seed {:?}", variant, seed);
    variant
}

/// Runs [`generate`] `count` times; each walk draws fresh randomness from `rng`.
pub fn generate_candidates<R: Rng + ?Sized>(seed: &str, count: usize, rng: &mut R) -> Vec<String> {
    (0..count).map(|_| generate(seed, rng)).collect()
}
