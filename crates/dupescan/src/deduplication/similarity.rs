//! String similarity for fuzzy name and company matching

use strsim::normalized_levenshtein;

/// Similarity of two short strings in `[0.0, 1.0]`.
///
/// The score is the higher of
/// - normalized Levenshtein, `1 - distance / max(len(a), len(b))`, and
/// - the same measure over the whitespace tokens of each string sorted
///   alphabetically, so "jane doe" and "doe jane" are identical.
///
/// Symmetric and reflexive. Two empty strings score `1.0`; an empty string
/// against a non-empty one scores `0.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let direct = normalized_levenshtein(a, b);
    let sorted = normalized_levenshtein(&sort_tokens(a), &sort_tokens(b));

    direct.max(sorted)
}

/// Whitespace tokens sorted and re-joined with single spaces
fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Similarity rendered as a whole percentage, half rounding up
pub fn similarity_percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}
