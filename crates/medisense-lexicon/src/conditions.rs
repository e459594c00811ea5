use std::collections::HashSet;

use crate::error::LexiconError;
use crate::rules::ConditionRule;

/// The fixed condition table, in the order ties are reported.
pub fn all_conditions() -> &'static [ConditionRule] {
    static CONDITIONS: std::sync::LazyLock<Vec<ConditionRule>> = std::sync::LazyLock::new(|| {
        vec![
            ConditionRule::new(
                "Common Cold",
                &["Cough", "Sore throat", "Nasal congestion", "Runny nose", "Sneezing"],
                &["Fever", "Fatigue", "Headache"],
            ),
            ConditionRule::new(
                "Influenza (Flu)",
                &["Fever", "Cough"],
                &["Sore throat", "Fatigue", "Body ache", "Chills", "Headache"],
            ),
            ConditionRule::new(
                "Upper Respiratory Infection",
                &["Cough", "Sore throat"],
                &["Fever", "Nasal congestion", "Runny nose"],
            ),
            ConditionRule::new(
                "Bronchitis",
                &["Cough"],
                &["Shortness of breath", "Chest pain", "Fatigue", "Fever"],
            ),
            ConditionRule::new(
                "Pneumonia",
                &["Cough", "Fever"],
                &["Shortness of breath", "Chest pain", "Fatigue", "Chills"],
            ),
            ConditionRule::new(
                "Tension Headache",
                &["Headache"],
                &["Stress", "Neck pain", "Fatigue"],
            ),
            ConditionRule::new(
                "Migraine",
                &["Headache", "Migraine"],
                &["Nausea", "Dizziness", "Sensitivity to light"],
            ),
            ConditionRule::new(
                "Gastroenteritis",
                &["Nausea", "Vomiting", "Diarrhea"],
                &["Abdominal pain", "Fever", "Stomach discomfort"],
            ),
            ConditionRule::new(
                "Food Poisoning",
                &["Nausea", "Vomiting"],
                &["Diarrhea", "Abdominal pain", "Stomach discomfort", "Fever"],
            ),
            ConditionRule::new(
                "Irritable Bowel Syndrome (IBS)",
                &["Abdominal pain", "Stomach discomfort"],
                &["Bloating", "Diarrhea", "Constipation"],
            ),
            ConditionRule::new(
                "Asthma",
                &["Shortness of breath", "Wheezing"],
                &["Cough", "Chest tightness", "Chest pain"],
            ),
            ConditionRule::new(
                "Allergic Rhinitis",
                &["Sneezing", "Runny nose", "Nasal congestion"],
                &["Itching", "Rash", "Sore throat"],
            ),
            ConditionRule::new(
                "Sinusitis",
                &["Nasal congestion", "Headache"],
                &["Fever", "Facial pain", "Runny nose", "Fatigue"],
            ),
            ConditionRule::new(
                "Urinary Tract Infection (UTI)",
                &["Pain"],
                &["Fever", "Fatigue", "Nausea"],
            ),
            ConditionRule::new(
                "Arthritis",
                &["Joint pain"],
                &["Swelling", "Stiffness", "Fatigue"],
            ),
            ConditionRule::new(
                "Fibromyalgia",
                &["Muscle pain", "Fatigue"],
                &["Joint pain", "Headache", "Sleep problems"],
            ),
            ConditionRule::new(
                "Anxiety",
                &[],
                &["Chest pain", "Shortness of breath", "Heart palpitations", "Dizziness", "Fatigue"],
            ),
            ConditionRule::new(
                "Depression",
                &["Fatigue"],
                &["Insomnia", "Loss of appetite", "Weakness"],
            ),
            ConditionRule::new(
                "Skin Allergy",
                &["Rash", "Itching"],
                &["Hives", "Skin redness", "Swelling"],
            ),
            ConditionRule::new(
                "Dehydration",
                &["Fatigue", "Weakness"],
                &["Dizziness", "Headache", "Nausea"],
            ),
            ConditionRule::new(
                "Fainting/Syncope",
                &["Fainting/Unconsciousness"],
                &["Dizziness", "Headache", "Weakness", "Heart palpitations"],
            ),
            ConditionRule::new(
                "Deep Vein Thrombosis (DVT)",
                &["Leg pain"],
                &["Swelling", "Redness", "Warmth"],
            ),
            ConditionRule::new(
                "Peripheral Artery Disease",
                &["Leg pain"],
                &["Weakness", "Numbness", "Coldness"],
            ),
            ConditionRule::new(
                "Muscle Strain",
                &["Muscle pain", "Leg pain"],
                &["Swelling", "Weakness", "Body pain"],
            ),
            ConditionRule::new(
                "Sciatica",
                &["Leg pain", "Back pain"],
                &["Weakness", "Numbness", "Body pain"],
            ),
        ]
    });
    &CONDITIONS
}

/// Check a condition table for duplicate names, blank symptom labels and
/// symptoms listed as both required and optional.
///
/// Optional symptoms may name labels no lexicon emits (e.g. "Stiffness");
/// they simply never score.
pub fn validate_conditions(conditions: &[ConditionRule]) -> Vec<LexiconError> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    for condition in conditions {
        if !names.insert(condition.name.as_str()) {
            errors.push(LexiconError::DuplicateCondition(condition.name.clone()));
        }
        let blank = condition
            .required_symptoms
            .iter()
            .chain(&condition.optional_symptoms)
            .any(|s| s.trim().is_empty());
        if blank {
            errors.push(LexiconError::BlankConditionSymptom(condition.name.clone()));
        }
        for symptom in &condition.required_symptoms {
            if condition.optional_symptoms.contains(symptom) {
                errors.push(LexiconError::OverlappingSymptoms {
                    condition: condition.name.clone(),
                    symptom: symptom.clone(),
                });
            }
        }
    }
    errors
}
