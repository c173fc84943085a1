//! Disease relevance scoring.
//!
//! Accumulates an integer score per disease from three additive signals and
//! keeps the top 3. The all-pairs snippet comparison is quadratic in
//! snippet-count x knowledge-base size; trivial at this vocabulary scale.

use serde::Serialize;

use crate::knowledge::DISEASE_PROFILES;

/// Number of ranked diseases retained.
pub const TOP_DISEASES: usize = 3;

/// Points per (snippet, disease-symptom phrase) substring hit.
const SNIPPET_MATCH_POINTS: u32 = 2;
/// Points when the disease's own name occurs in the text.
const NAME_MENTION_POINTS: u32 = 3;
/// Points per disease-symptom phrase occurring anywhere in the text.
const PHRASE_MENTION_POINTS: u32 = 1;

/// A disease and its accumulated heuristic score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseScore {
    pub disease: &'static str,
    pub score: u32,
}

/// Score every disease in the knowledge base against the extracted symptom
/// snippets and the full document text.
///
/// Signals, summed per disease:
/// 1. +2 for every (snippet, symptom phrase) pair where the phrase is a
///    substring of the snippet — all pairs, so one snippet can contribute
///    several times.
/// 2. +3 when the disease name occurs in the lowercased text.
/// 3. +1 for every symptom phrase occurring in the lowercased text,
///    independent of the snippet signal.
///
/// Zero-scoring diseases are dropped; the rest sort descending with ties
/// kept in knowledge-base definition order (stable sort). Top 3 returned.
pub fn score_diseases(snippets: &[String], text: &str) -> Vec<DiseaseScore> {
    let lower = text.to_lowercase();
    let mut scores: Vec<DiseaseScore> = Vec::new();

    for profile in DISEASE_PROFILES {
        let mut score = 0u32;

        for snippet in snippets {
            for phrase in profile.symptoms {
                if snippet.contains(phrase) {
                    score += SNIPPET_MATCH_POINTS;
                }
            }
        }

        if lower.contains(profile.name) {
            score += NAME_MENTION_POINTS;
        }

        for phrase in profile.symptoms {
            if lower.contains(phrase) {
                score += PHRASE_MENTION_POINTS;
            }
        }

        if score > 0 {
            scores.push(DiseaseScore {
                disease: profile.name,
                score,
            });
        }
    }

    scores.sort_by_key(|d| std::cmp::Reverse(d.score));
    scores.truncate(TOP_DISEASES);
    scores
}
