//! Recommended-action derivation.
//!
//! Emergency triggers come first, then disease-specific next steps in score
//! rank order, then generic closing recommendations. The list is
//! deduplicated in first-seen order (deterministic, unlike a set) and
//! capped at [`MAX_ACTIONS`].

use crate::knowledge::{action_for, SEVERE_SYMPTOMS};
use crate::pipeline::scoring::DiseaseScore;

/// Cap on recommended actions per report.
pub const MAX_ACTIONS: usize = 5;

pub const EMERGENCY_DIRECTIVE: &str = "🚨 SEEK EMERGENCY MEDICAL ATTENTION IMMEDIATELY";
pub const PRIMARY_CARE_FALLBACK: &str = "Schedule follow-up with Primary Care Physician";
pub const MONITOR_RECOMMENDATION: &str = "Monitor symptoms and keep health journal";
pub const FOLLOW_UP_RECOMMENDATION: &str = "Follow up with specialist within 1-2 weeks";

/// Derive the recommended-action list from scored diseases and symptom
/// snippets.
pub fn suggest_actions(diseases: &[DiseaseScore], snippets: &[String]) -> Vec<String> {
    let mut actions: Vec<String> = Vec::new();

    let severe = snippets
        .iter()
        .any(|snippet| SEVERE_SYMPTOMS.iter().any(|phrase| snippet.contains(phrase)));
    if severe {
        push_unique(&mut actions, EMERGENCY_DIRECTIVE);
    }

    let mut disease_specific = false;
    for ranked in diseases {
        if let Some(action) = action_for(ranked.disease) {
            push_unique(&mut actions, action);
            disease_specific = true;
        }
    }

    if !disease_specific {
        push_unique(&mut actions, PRIMARY_CARE_FALLBACK);
    }

    push_unique(&mut actions, MONITOR_RECOMMENDATION);
    push_unique(&mut actions, FOLLOW_UP_RECOMMENDATION);

    actions.truncate(MAX_ACTIONS);
    actions
}

fn push_unique(actions: &mut Vec<String>, action: &str) {
    if !actions.iter().any(|a| a == action) {
        actions.push(action.to_string());
    }
}
