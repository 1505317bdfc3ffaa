// Text normalization shared by training and inference.
//
// Reviews are lowercased, stripped of everything that isn't an ASCII
// alphanumeric or whitespace, and whitespace-collapsed. The same cleaning
// runs on the training corpus and on every incoming request, so the
// vectorizer vocabulary and request-time tokens always agree.

use std::sync::OnceLock;

use regex_lite::Regex;

fn strip_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9\s]").unwrap())
}

fn whitespace_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Normalize a review: lowercase, drop non-alphanumeric characters,
/// collapse runs of whitespace, trim.
pub fn clean(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = strip_pattern().replace_all(&lowered, "");
    whitespace_pattern()
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Split cleaned text into feature tokens.
///
/// Single-character tokens carry no sentiment signal and are excluded from
/// the vocabulary, matching the vectorizer's token rules.
pub fn tokenize(cleaned: &str) -> Vec<&str> {
    cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() >= 2)
        .collect()
}
