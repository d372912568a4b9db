//! # Text Normalization and Utterance Detectors
//!
//! File: cli/src/engine/normalize.rs
//!
//! ## Overview
//!
//! Every comparison the engine makes (context scoring, question distance,
//! candidate re-ranking) runs on text passed through [`normalize`], so two
//! inputs that differ only in case, punctuation, or surrounding whitespace
//! always score the same.
//!
//! The two detectors decide which path the pipeline takes:
//! - [`is_greeting`]: exact match against a closed set of salutations.
//! - [`is_question`]: the utterance ends with `?`.
//!
//! ## Examples
//!
//! ```
//! use velos::engine::normalize::{is_greeting, is_question, normalize};
//!
//! assert_eq!(normalize("  Hello, World!  "), "hello world");
//! assert!(is_greeting("Good Morning!"));
//! assert!(!is_greeting("hello there"));
//! assert!(is_question("what time is it? "));
//! ```
//!

/// Salutations that route an utterance straight to the greetings context.
/// Compared against the normalized input; exact match only.
pub const GREETINGS: [&str; 6] = [
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Lowercases `text`, drops every character that is neither a word character
/// (ASCII letter, ASCII digit, `_`) nor whitespace, and trims the result.
///
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect();
    stripped.trim().to_string()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` if the normalized input is exactly one of [`GREETINGS`].
pub fn is_greeting(input: &str) -> bool {
    let normalized = normalize(input);
    GREETINGS.contains(&normalized.as_str())
}

/// Returns `true` if the input, trimmed of surrounding whitespace, ends with `?`.
pub fn is_question(input: &str) -> bool {
    input.trim().ends_with('?')
}
