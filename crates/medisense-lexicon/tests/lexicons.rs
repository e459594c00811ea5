use medisense_lexicon::rules::{SymptomCategory, SymptomRule};
use medisense_lexicon::{
    BASE_LEXICON, Lexicon, all_lexicons, base_lexicon, get_lexicon, lexicon_for_hint,
    validate_store,
};

#[test]
fn bundled_tables_validate_cleanly() {
    assert_eq!(validate_store(), vec![]);
}

#[test]
fn lexicons_are_listed_in_detection_order() {
    let codes: Vec<String> = all_lexicons().iter().map(|l| l.code().to_string()).collect();
    assert_eq!(codes, ["en", "hi", "es", "fr", "zh", "ar"]);
    assert_eq!(base_lexicon().code(), BASE_LEXICON);
}

#[test]
fn hint_uses_primary_subtag() {
    assert_eq!(lexicon_for_hint("hi-IN").unwrap().code(), "hi");
    assert_eq!(lexicon_for_hint("ES_mx").unwrap().code(), "es");
    assert_eq!(lexicon_for_hint("en").unwrap().code(), "en");
}

#[test]
fn blank_auto_and_unknown_hints_resolve_to_none() {
    assert!(lexicon_for_hint("").is_none());
    assert!(lexicon_for_hint("  ").is_none());
    assert!(lexicon_for_hint("auto").is_none());
    assert!(lexicon_for_hint("de-DE").is_none());
}

#[test]
fn get_lexicon_unknown_is_none() {
    assert!(get_lexicon("xx").is_none());
}

#[test]
fn base_lexicon_merges_repeated_labels() {
    let base = base_lexicon();
    let labels: Vec<&str> = base
        .symptom_rules()
        .iter()
        .map(|r| r.canonical_label.as_str())
        .collect();
    assert_eq!(labels.iter().filter(|l| **l == "Fatigue").count(), 1);
    assert_eq!(labels.first(), Some(&"Headache"));
    assert_eq!(labels.last(), Some(&"Swelling"));
    assert!(labels.contains(&"Fainting/Unconsciousness"));
}

#[test]
fn romanized_hindi_is_carried_by_base_lexicon() {
    let base = base_lexicon();
    let fever = base
        .symptom_rules()
        .iter()
        .find(|r| r.canonical_label == "Fever")
        .unwrap();
    assert!(fever.patterns.iter().any(|p| p == "bukhar"));
}

#[test]
fn every_language_lexicon_covers_the_same_core_labels() {
    for lexicon in all_lexicons().iter().filter(|l| l.code() != BASE_LEXICON) {
        let rules = lexicon.symptom_rules();
        assert_eq!(rules.len(), 25, "lexicon {}", lexicon.code());
        assert_eq!(rules[0].canonical_label, "Headache");
        assert_eq!(rules[24].canonical_label, "Depression");
    }
}

#[test]
fn rule_patterns_are_lowercased_and_deduplicated() {
    let rule = SymptomRule::new(
        "Cough",
        SymptomCategory::Respiratory,
        &["Cough", "cough ", "Dry Cough"],
    );
    assert_eq!(rule.patterns, ["cough", "dry cough"]);
}

#[test]
fn duplicate_label_is_reported() {
    struct Broken;
    impl Lexicon for Broken {
        fn code(&self) -> &str {
            "xx"
        }
        fn name(&self) -> &str {
            "Broken"
        }
        fn symptom_rules(&self) -> &[SymptomRule] {
            static RULES: std::sync::LazyLock<Vec<SymptomRule>> = std::sync::LazyLock::new(|| {
                vec![
                    SymptomRule::new("Fever", SymptomCategory::Systemic, &["fever"]),
                    SymptomRule::new("Fever", SymptomCategory::Systemic, &["hot"]),
                    SymptomRule::new("Rash", SymptomCategory::Dermatological, &[]),
                ]
            });
            &RULES
        }
    }

    let errors = Broken.validate();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].to_string().contains("duplicate canonical label 'Fever'"));
    assert!(errors[1].to_string().contains("'Rash' has no patterns"));
}

#[test]
fn category_serializes_snake_case() {
    let json = serde_json::to_string(&SymptomCategory::Gastrointestinal).unwrap();
    assert_eq!(json, "\"gastrointestinal\"");
}
