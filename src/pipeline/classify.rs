//! Medical-document gate.
//!
//! A deliberately lossy keyword-density check that rejects obviously
//! non-medical uploads before the expensive summarization stages run.
//! False positives and negatives are acceptable here.

use crate::knowledge::MEDICAL_KEYWORDS;

/// Minimum number of distinct medical keywords required to treat a
/// document as a medical report.
pub const MIN_KEYWORD_MATCHES: usize = 2;

/// True when at least two distinct medical vocabulary terms occur
/// (case-insensitively, as substrings) anywhere in the text.
pub fn is_medical(text: &str) -> bool {
    let lower = text.to_lowercase();
    let matches = MEDICAL_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .count();
    matches >= MIN_KEYWORD_MATCHES
}
