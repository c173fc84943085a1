//! Condition-to-specialist mapping.

/// Lowercase condition names paired with the specialist who treats them.
static CONDITION_SPECIALISTS: &[(&str, &str)] = &[
    ("diabetes", "Endocrinologist"),
    ("hypertension", "Cardiologist"),
    ("coronary artery disease", "Cardiologist"),
    ("asthma", "Pulmonologist"),
    ("pneumonia", "Pulmonologist"),
    ("influenza", "General Physician"),
    ("arthritis", "Rheumatologist"),
    ("migraine", "Neurologist"),
    ("gastroenteritis", "Gastroenterologist"),
    ("urinary tract infection", "Urologist"),
];

/// Predict the specialist for a condition description.
///
/// Matches the first known condition named anywhere in the text,
/// case-insensitively. Returns `None` when no condition is recognized.
pub fn predict_specialist(condition_text: &str) -> Option<&'static str> {
    let lowered = condition_text.to_lowercase();
    CONDITION_SPECIALISTS
        .iter()
        .find(|(condition, _)| lowered.contains(condition))
        .map(|(_, specialist)| *specialist)
}
