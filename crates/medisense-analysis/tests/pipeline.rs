use medisense_analysis::Analyzer;
use medisense_analysis::compose::{compose, is_urgent};
use medisense_analysis::scorer::{MAX_CONDITIONS, condition_names, score};
use medisense_core::models::analysis::{AnalysisStatus, ScoredCondition};
use medisense_lexicon::conditions::all_conditions;
use medisense_lexicon::recommendations::{
    CHEST_URGENT, NO_SYMPTOM_ADVICE, SEEK_CARE, SEEK_CARE_URGENT, SYMPTOM_DIARY,
};
use medisense_lexicon::rules::ConditionRule;

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn headache_and_fever_suggests_flu_family() {
    let result = Analyzer::new().analyze("I have a headache and a fever", None);
    assert_eq!(result.status, AnalysisStatus::Complete);
    assert!(result.symptoms.contains(&"Headache".to_string()));
    assert!(result.symptoms.contains(&"Fever".to_string()));

    let scored = score(&result.symptoms, all_conditions());
    let flu = scored
        .iter()
        .find(|c| c.name == "Influenza (Flu)")
        .expect("flu should be listed");
    assert!(flu.score >= 3);
    assert!(result.possible_conditions.contains(&"Influenza (Flu)".to_string()));
}

#[test]
fn romanized_hindi_finds_abdominal_pain_and_fever() {
    let result = Analyzer::new().analyze("pet dard aur bukhar", None);
    assert!(result.symptoms.contains(&"Abdominal pain".to_string()));
    assert!(result.symptoms.contains(&"Fever".to_string()));
    assert_eq!(result.language.as_deref(), Some("en"));
}

#[test]
fn empty_input_returns_sentinels() {
    let result = Analyzer::new().analyze("", None);
    assert_eq!(result.status, AnalysisStatus::InputTooShort);
    assert_eq!(
        result.symptoms,
        ["Please speak for longer and describe your symptoms in detail"]
    );
    assert_eq!(
        result.possible_conditions,
        ["Please describe your symptoms more specifically"]
    );
    assert_eq!(result.recommendations, NO_SYMPTOM_ADVICE);
}

#[test]
fn unmatched_long_input_echoes_transcript() {
    let result = Analyzer::new().analyze("The weather is lovely this afternoon", None);
    assert_eq!(result.status, AnalysisStatus::NoMatch);
    assert_eq!(result.symptoms.len(), 3);
    assert_eq!(
        result.symptoms[2],
        "Transcript received: \"The weather is lovely this afternoon\""
    );
    assert_eq!(result.recommendations, NO_SYMPTOM_ADVICE);
}

#[test]
fn single_word_pain() {
    let result = Analyzer::new().analyze("pain", None);
    assert_eq!(result.symptoms, ["Pain"]);
    assert_eq!(result.status, AnalysisStatus::Complete);
}

#[test]
fn single_word_pain_keeps_the_top_seven_conditions() {
    // Nine conditions qualify; the cap drops the two lowest scores.
    let scored = score(&labels(&["Pain"]), all_conditions());
    assert_eq!(scored.len(), MAX_CONDITIONS);
    assert_eq!(scored[0].score, 7);
    assert_eq!(scored[6].score, 3);

    let result = Analyzer::new().analyze("pain", None);
    assert_eq!(
        result.possible_conditions,
        [
            "Muscle Strain",
            "Sciatica",
            "Fibromyalgia",
            "Irritable Bowel Syndrome (IBS)",
            "Urinary Tract Infection (UTI)",
            "Arthritis",
            "Deep Vein Thrombosis (DVT)",
        ]
    );
    assert!(!result.possible_conditions.contains(&"Anxiety".to_string()));
    assert!(
        !result
            .possible_conditions
            .contains(&"Peripheral Artery Disease".to_string())
    );
}

#[test]
fn optional_only_condition_is_scored_from_optional_overlap() {
    let conditions = vec![
        ConditionRule::new("Needs cough", &["Cough"], &["Pain"]),
        ConditionRule::new("Generic", &[], &["Chest pain", "Fever"]),
    ];
    let scored = score(&labels(&["Pain"]), &conditions);
    assert_eq!(
        scored,
        vec![ScoredCondition {
            name: "Generic".to_string(),
            score: 1,
        }]
    );
}

#[test]
fn chest_pain_advisory_appears_once() {
    let result = Analyzer::new().analyze("I have chest pain and chest tightness", None);
    let urgent: Vec<&String> = result
        .recommendations
        .iter()
        .filter(|r| r.as_str() == CHEST_URGENT.text)
        .collect();
    assert_eq!(urgent.len(), 1);
}

#[test]
fn chest_pain_alone() {
    let result = Analyzer::new().analyze("chest pain", None);
    assert_eq!(result.symptoms, ["Chest pain", "Pain"]);
    assert!(result.recommendations.iter().any(|r| r == CHEST_URGENT.text));
}

#[test]
fn scores_are_descending_and_capped() {
    let matched = labels(&[
        "Headache", "Fever", "Cough", "Sore throat", "Nausea", "Vomiting", "Diarrhea",
        "Muscle pain", "Leg pain", "Back pain", "Fatigue",
    ]);
    let scored = score(&matched, all_conditions());
    assert_eq!(scored.len(), MAX_CONDITIONS);
    assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn ties_keep_table_order() {
    let conditions = vec![
        ConditionRule::new("First", &["Cough"], &[]),
        ConditionRule::new("Second", &["Cough"], &[]),
    ];
    let scored = score(&labels(&["Cough"]), &conditions);
    let names: Vec<&str> = scored.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);
}

#[test]
fn label_containment_works_both_ways() {
    let conditions = vec![ConditionRule::new("Aches", &["Body ache"], &[])];
    assert_eq!(score(&labels(&["ache"]), &conditions)[0].score, 3);
    assert_eq!(score(&labels(&["Body ache everywhere"]), &conditions)[0].score, 3);
}

#[test]
fn placeholders_when_nothing_qualifies() {
    assert_eq!(
        condition_names(&[], &labels(&["Hives"])),
        ["Health concern requiring evaluation"]
    );
    assert_eq!(
        condition_names(&[], &[]),
        ["Please describe your symptoms more specifically"]
    );
    assert!(score(&[], all_conditions()).is_empty());
}

#[test]
fn compose_without_symptoms_is_the_fixed_fallback() {
    let top = vec![ScoredCondition {
        name: "Pneumonia".to_string(),
        score: 6,
    }];
    assert_eq!(compose(&top, &[]), NO_SYMPTOM_ADVICE);
}

#[test]
fn compose_orders_condition_then_symptom_then_general() {
    let top = vec![ScoredCondition {
        name: "Common Cold".to_string(),
        score: 6,
    }];
    let advice = compose(&top, &labels(&["Cough", "Sneezing"]));
    assert_eq!(advice.len(), 6);
    assert!(advice[0].starts_with("Get plenty of rest"));
    assert!(advice[3].starts_with("Use cough drops"));
    assert_eq!(advice[4], SYMPTOM_DIARY.text);
    assert_eq!(advice[5], SEEK_CARE.text);
}

#[test]
fn urgency_escalates_on_symptom_count_or_severe_condition() {
    let many = labels(&["Cough", "Fever", "Headache", "Chills"]);
    assert!(is_urgent(&[], &many));
    assert!(!is_urgent(&[], &many[..3]));

    let severe = vec![
        ScoredCondition {
            name: "Bronchitis".to_string(),
            score: 3,
        },
        ScoredCondition {
            name: "Asthma".to_string(),
            score: 3,
        },
    ];
    assert!(is_urgent(&severe, &labels(&["Cough"])));
    let advice = compose(&severe, &labels(&["Cough"]));
    assert_eq!(advice.last().map(String::as_str), Some(SEEK_CARE_URGENT.text));
}

#[test]
fn recommendations_never_exceed_eight() {
    let result = Analyzer::new().analyze(
        "fever, cough, nausea, diarrhea, chest pain, shortness of breath, rash and itching",
        None,
    );
    assert!(result.recommendations.len() <= 8);
    assert!(result.possible_conditions.len() <= 7);
}

#[test]
fn hint_selects_lexicon_strictly() {
    let result = Analyzer::new().analyze("मुझे सिर दर्द है", Some("hi-IN"));
    assert_eq!(result.language.as_deref(), Some("hi"));
    assert!(result.symptoms.contains(&"Headache".to_string()));
}

#[test]
fn unknown_hint_falls_back_to_detection() {
    let result = Analyzer::new().analyze("I have a bad cough", Some("de-DE"));
    assert_eq!(result.language.as_deref(), Some("en"));
    assert!(result.symptoms.contains(&"Cough".to_string()));
}

#[test]
fn debug_block_only_when_enabled() {
    let plain = Analyzer::new().analyze("I have a headache", Some("en-US"));
    assert!(plain.debug.is_none());

    let debug = Analyzer::new()
        .with_debug(true)
        .analyze("I have a headache", Some("en-US"))
        .debug
        .expect("debug block");
    assert_eq!(debug.transcript_length, 17);
    assert_eq!(debug.language.as_deref(), Some("en-US"));
    assert_eq!(debug.normalized_text, "i have a headache");
    assert!(!debug.has_non_latin_chars);
}

#[test]
fn result_serializes_for_the_wire() {
    let result = Analyzer::new().analyze("I have a cough", None);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "complete");
    assert!(json["possibleConditions"].is_array());
    assert_eq!(json["language"], "en");
}
