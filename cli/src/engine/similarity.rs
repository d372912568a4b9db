//! # Similarity Scoring
//!
//! File: cli/src/engine/similarity.rs
//!
//! Two metrics over text:
//! - [`edit_distance`]: Levenshtein distance, used to find the stored question
//!   closest to a question-form input.
//! - [`jaccard`]: token-set overlap of the normalized texts, used to re-rank
//!   generated answer candidates against their seed answer.
//!
use crate::engine::normalize::normalize;
use std::collections::HashSet;

/// Levenshtein distance between `a` and `b` over their characters.
///
/// Insertion, deletion and substitution each cost 1. Computed with two
/// rolling rows of the dynamic-programming table, so memory is linear in the
/// length of `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Jaccard similarity of the whitespace token sets of `normalize(a)` and
/// `normalize(b)`: `|intersection| / |union|`.
///
/// Returns `0.0` when the union is empty (both inputs normalize to nothing).
pub fn jaccard(a: &str, b: &str) -> f64 {
    let norm_a = normalize(a);
    let norm_b = normalize(b);
    let tokens_a: HashSet<&str> = norm_a.split_whitespace().collect();
    let tokens_b: HashSet<&str> = norm_b.split_whitespace().collect();

    let union = tokens_a.union(&tokens_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = tokens_a.intersection(&tokens_b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_reference_values() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("what is rust", "what is rust"), 0);
    }

    #[test]
    fn test_edit_distance_counts_chars_not_bytes() {
        assert_eq!(edit_distance("café", "cafe"), 1);
    }

    #[test]
    fn test_edit_distance_is_symmetric() {
        let pairs = [
            ("kitten", "sitting"),
            ("how are you", "who are you"),
            ("", "hello"),
            ("abcdef", "azced"),
        ];
        for (a, b) in pairs {
            assert_eq!(edit_distance(a, b), edit_distance(b, a), "{} / {}", a, b);
        }
    }

    #[test]
    fn test_jaccard_identity_and_empty() {
        assert_eq!(jaccard("Hello there, friend", "hello there friend"), 1.0);
        assert_eq!(jaccard("", ""), 0.0);
        assert_eq!(jaccard("!!!", "?"), 0.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        // {hello, there} vs {hello} -> 1 / 2
        assert!((jaccard("hello there.", "hello") - 0.5).abs() < f64::EPSILON);
        // Duplicated tokens collapse into the set.
        assert!((jaccard("a a a b", "b c") - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(jaccard("alpha", "beta"), 0.0);
    }
}
