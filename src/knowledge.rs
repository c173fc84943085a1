//! Static medical vocabularies and the disease knowledge base.
//!
//! Read-only tables compiled into the binary. They are passed by reference
//! into the pure scoring functions; nothing here is mutable at runtime, so
//! concurrent readers are safe if a host parallelizes across documents.

/// Terms whose presence marks a document as medical. All lowercase;
/// matching is case-insensitive substring search over the full text.
pub static MEDICAL_KEYWORDS: &[&str] = &[
    "patient",
    "diagnosis",
    "treatment",
    "prescription",
    "medical history",
    "symptoms",
    "blood test",
    "lab report",
    "mri",
    "ct scan",
    "disease",
    "doctor",
    "hospital",
    "medication",
    "prognosis",
    "allergy",
    "dose",
];

/// Symptom vocabulary for the extraction pass. Single words and short
/// phrases; matched as whitespace token sequences within a sentence.
pub static SYMPTOM_TERMS: &[&str] = &[
    "pain",
    "ache",
    "sore",
    "tenderness",
    "discomfort",
    "fever",
    "nausea",
    "vomiting",
    "dizziness",
    "fatigue",
    "weakness",
    "cough",
    "headache",
    "rash",
    "swelling",
    "bleeding",
    "bruising",
    "shortness of breath",
    "wheezing",
    "chills",
    "sweating",
    "palpitations",
    "numbness",
    "tingling",
];

/// A disease and the symptom phrases associated with it.
#[derive(Debug, Clone, Copy)]
pub struct DiseaseProfile {
    pub name: &'static str,
    pub symptoms: &'static [&'static str],
}

/// Disease knowledge base. Definition order is significant: it is the
/// tie-break order when two diseases score equally.
pub static DISEASE_PROFILES: &[DiseaseProfile] = &[
    DiseaseProfile {
        name: "diabetes",
        symptoms: &["thirst", "urination", "fatigue", "blurred vision", "weight loss"],
    },
    DiseaseProfile {
        name: "hypertension",
        symptoms: &["headache", "dizziness", "blurred vision", "shortness of breath"],
    },
    DiseaseProfile {
        name: "asthma",
        symptoms: &["wheezing", "shortness of breath", "coughing", "chest tightness"],
    },
    DiseaseProfile {
        name: "influenza",
        symptoms: &["fever", "cough", "sore throat", "runny nose", "body aches"],
    },
    DiseaseProfile {
        name: "pneumonia",
        symptoms: &["cough", "fever", "chills", "shortness of breath", "chest pain"],
    },
    DiseaseProfile {
        name: "coronary artery disease",
        symptoms: &["chest pain", "shortness of breath", "heart attack"],
    },
    DiseaseProfile {
        name: "arthritis",
        symptoms: &["joint pain", "stiffness", "swelling", "decreased range of motion"],
    },
    DiseaseProfile {
        name: "migraine",
        symptoms: &["headache", "nausea", "sensitivity to light", "aura"],
    },
    DiseaseProfile {
        name: "gastroenteritis",
        symptoms: &["diarrhea", "nausea", "vomiting", "abdominal pain", "fever"],
    },
    DiseaseProfile {
        name: "urinary tract infection",
        symptoms: &["burning urination", "frequent urination", "pelvic pain"],
    },
];

/// Disease → recommended next step.
pub static SPECIALIST_ACTIONS: &[(&str, &str)] = &[
    ("diabetes", "Schedule appointment with Endocrinologist"),
    ("hypertension", "Consult Cardiologist for blood pressure management"),
    ("asthma", "See Pulmonologist for respiratory assessment"),
    ("influenza", "Rest, hydrate, and monitor symptoms"),
    ("pneumonia", "Urgent consultation with Pulmonologist required"),
    ("coronary artery disease", "Immediate Cardiologist consultation recommended"),
    ("arthritis", "Consult Rheumatologist for joint evaluation"),
    ("migraine", "See Neurologist for headache management"),
    ("gastroenteritis", "Consult Gastroenterologist if symptoms persist"),
    ("urinary tract infection", "See Urologist for proper treatment"),
];

/// Symptom phrases that trigger the emergency-escalation directive.
pub static SEVERE_SYMPTOMS: &[&str] = &[
    "chest pain",
    "shortness of breath",
    "severe bleeding",
    "loss of consciousness",
    "difficulty breathing",
    "severe headache",
];

/// Look up the recommended action for a disease, if one is mapped.
pub fn action_for(disease: &str) -> Option<&'static str> {
    SPECIALIST_ACTIONS
        .iter()
        .find(|(name, _)| *name == disease)
        .map(|(_, action)| *action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_lowercase() {
        for kw in MEDICAL_KEYWORDS {
            assert_eq!(*kw, kw.to_lowercase(), "keyword not lowercase: {kw}");
        }
        for term in SYMPTOM_TERMS {
            assert_eq!(*term, term.to_lowercase(), "term not lowercase: {term}");
        }
    }

    #[test]
    fn every_disease_has_symptoms_and_action() {
        for profile in DISEASE_PROFILES {
            assert!(!profile.symptoms.is_empty(), "{} has no symptoms", profile.name);
            assert!(
                action_for(profile.name).is_some(),
                "{} has no mapped action",
                profile.name
            );
        }
    }

    #[test]
    fn action_lookup_misses_unknown_disease() {
        assert!(action_for("common cold").is_none());
    }

    #[test]
    fn severe_symptoms_are_in_symptom_domain() {
        // Emergency triggers are matched against extracted snippets, which
        // are lowercase; the trigger list must be lowercase too.
        for phrase in SEVERE_SYMPTOMS {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }
}
