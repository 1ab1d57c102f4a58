//! Guess normalization and evaluation
//!
//! This module handles the comparison of player input against the round's
//! target name. It is completely pure and testable without any surface.
//!
//! ## Design Principles
//! - **Case insensitive**: "knight" and "KNIGHT" both match "Knight"
//! - **Whitespace tolerant**: surrounding whitespace is trimmed before comparing
//! - **Exact equality only**: "Knights" does not match "Knight"; no fuzzy matching

/// Outcome of evaluating a single submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Input was empty (or whitespace only) after trimming
    Empty,
    /// Normalized input equals the normalized target name
    Correct,
    /// Non-empty input that does not match the target
    Incorrect,
}

/// Normalizes a raw string for comparison: trim, then lowercase
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Evaluates a submitted guess against the target name
///
/// # Arguments
/// * `raw` - Arbitrary player input
/// * `target_name` - Display name of the current round's entry
///
/// # Returns
/// The verdict after normalizing both sides
pub fn evaluate(raw: &str, target_name: &str) -> Verdict {
    let submitted = normalize(raw);
    if submitted.is_empty() {
        return Verdict::Empty;
    }

    if submitted == normalize(target_name) {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}
