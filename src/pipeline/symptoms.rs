//! Symptom mention extraction.
//!
//! Scans sentences for a fixed symptom vocabulary and captures a short
//! word-window of context around each match. Snippets are deduplicated in
//! first-seen order — the encounter order of the text — so output is
//! deterministic, then capped at [`MAX_SNIPPETS`].

use std::sync::LazyLock;

use regex::Regex;

use crate::knowledge::SYMPTOM_TERMS;

/// Cap on distinct symptom snippets per document.
pub const MAX_SNIPPETS: usize = 10;

/// Tokens of context kept on each side of a matched term.
pub const CONTEXT_WINDOW: usize = 2;

/// Sentence boundary: one or more terminators followed by whitespace.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+\s+").expect("Invalid sentence boundary pattern"));

/// Segment text into sentences. Terminators are stripped; blank segments
/// are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(|s| s.trim().trim_end_matches(['.', '!', '?']))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extract up to [`MAX_SNIPPETS`] lowercase context snippets around symptom
/// term mentions.
///
/// A term matches when its words appear as a consecutive token sequence in
/// a sentence (punctuation on token edges is ignored). The snippet is the
/// matched sequence plus up to [`CONTEXT_WINDOW`] tokens on each side,
/// clipped at sentence boundaries.
pub fn extract_symptoms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut snippets: Vec<String> = Vec::new();

    for sentence in split_sentences(&lower) {
        let words: Vec<&str> = sentence.split_whitespace().collect();

        for term in SYMPTOM_TERMS {
            let term_tokens: Vec<&str> = term.split_whitespace().collect();
            let Some(start) = find_token_sequence(&words, &term_tokens) else {
                continue;
            };

            let from = start.saturating_sub(CONTEXT_WINDOW);
            let to = (start + term_tokens.len() + CONTEXT_WINDOW).min(words.len());
            let context = words[from..to].join(" ");

            if !snippets.contains(&context) {
                snippets.push(context);
            }
        }
    }

    snippets.truncate(MAX_SNIPPETS);
    snippets
}

/// Index of the first occurrence of `needle` as a consecutive token
/// sequence in `haystack`, comparing tokens with edge punctuation stripped.
fn find_token_sequence(haystack: &[&str], needle: &[&str]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&i| {
        needle
            .iter()
            .enumerate()
            .all(|(j, tok)| normalize_token(haystack[i + j]) == *tok)
    })
}

fn normalize_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}
