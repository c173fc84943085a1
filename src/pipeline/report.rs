//! Final report assembly.
//!
//! Pure formatting: deterministic given its inputs, no side effects.

use crate::pipeline::scoring::DiseaseScore;

/// Score thresholds for the 3-tier confidence label.
pub fn confidence_label(score: u32) -> &'static str {
    if score > 5 {
        "High"
    } else if score > 2 {
        "Medium"
    } else {
        "Low"
    }
}

/// Assemble the formatted analysis report.
pub fn format_report(
    summary: &str,
    symptoms: &[String],
    diseases: &[DiseaseScore],
    actions: &[String],
) -> String {
    let mut out = String::new();

    out.push_str("🏥 MEDICAL REPORT ANALYSIS\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    out.push_str("📋 EXECUTIVE SUMMARY:\n");
    out.push_str(&"-".repeat(20));
    out.push('\n');
    out.push_str(summary);
    out.push_str("\n\n");

    out.push_str("🔍 KEY FINDINGS:\n");
    out.push_str(&"-".repeat(15));
    out.push('\n');
    if symptoms.is_empty() {
        out.push_str("• No specific symptoms detected in report\n");
    } else {
        out.push_str("• Detected Symptoms:\n");
        for (i, symptom) in symptoms.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, capitalize(symptom)));
        }
    }
    out.push('\n');

    out.push_str("🩺 DISEASE ASSESSMENT:\n");
    out.push_str(&"-".repeat(20));
    out.push('\n');
    if diseases.is_empty() {
        out.push_str("• No specific disease patterns identified\n");
    } else {
        for (i, ranked) in diseases.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} (Confidence: {})\n",
                i + 1,
                title_case(ranked.disease),
                confidence_label(ranked.score)
            ));
        }
    }
    out.push('\n');

    out.push_str("✅ RECOMMENDED ACTIONS:\n");
    out.push_str(&"-".repeat(20));
    out.push('\n');
    for (i, action) in actions.iter().enumerate() {
        out.push_str(&format!("{}. {action}\n", i + 1));
    }
    out.push('\n');

    out.push_str(&"=".repeat(50));
    out.push('\n');
    out.push_str("Note: This AI analysis is for informational purposes only.\n");
    out.push_str("Please consult healthcare professionals for medical advice.\n");

    out
}

/// Uppercase the first character only.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character of every whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> String {
        format_report(
            "The patient was seen for chest discomfort.",
            &["sudden chest pain radiating".to_string()],
            &[
                DiseaseScore { disease: "coronary artery disease", score: 6 },
                DiseaseScore { disease: "asthma", score: 3 },
                DiseaseScore { disease: "migraine", score: 1 },
            ],
            &["Immediate Cardiologist consultation recommended".to_string()],
        )
    }

    #[test]
    fn contains_all_section_headers() {
        let report = sample_report();
        assert!(report.contains("EXECUTIVE SUMMARY"));
        assert!(report.contains("KEY FINDINGS"));
        assert!(report.contains("DISEASE ASSESSMENT"));
        assert!(report.contains("RECOMMENDED ACTIONS"));
    }

    #[test]
    fn confidence_tiers_threshold_correctly() {
        assert_eq!(confidence_label(6), "High");
        assert_eq!(confidence_label(5), "Medium");
        assert_eq!(confidence_label(3), "Medium");
        assert_eq!(confidence_label(2), "Low");
        assert_eq!(confidence_label(0), "Low");
    }

    #[test]
    fn diseases_rendered_with_labels() {
        let report = sample_report();
        assert!(report.contains("1. Coronary Artery Disease (Confidence: High)"));
        assert!(report.contains("2. Asthma (Confidence: Medium)"));
        assert!(report.contains("3. Migraine (Confidence: Low)"));
    }

    #[test]
    fn symptoms_numbered_and_capitalized() {
        let report = sample_report();
        assert!(report.contains("  1. Sudden chest pain radiating"));
    }

    #[test]
    fn empty_inputs_render_placeholders() {
        let report = format_report("No summary.", &[], &[], &[]);
        assert!(report.contains("• No specific symptoms detected in report"));
        assert!(report.contains("• No specific disease patterns identified"));
    }

    #[test]
    fn disclaimer_footer_always_present() {
        let report = format_report("s", &[], &[], &[]);
        assert!(report.contains("informational purposes only"));
        assert!(report.ends_with("medical advice.\n"));
    }

    #[test]
    fn deterministic_for_same_inputs() {
        assert_eq!(sample_report(), sample_report());
    }
}
