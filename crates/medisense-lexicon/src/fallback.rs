//! Coarse indicator tables consulted only after a lexicon pass finds nothing.
//! Both are matched by plain substring, never by word boundary.

use crate::rules::IndicatorRule;
use crate::rules::SymptomCategory::{
    Gastrointestinal, General, Neurological, Respiratory, Systemic,
};

/// Second-tier table: broad cross-language stems for the commonest complaints.
pub fn context_indicators() -> &'static [IndicatorRule] {
    static RULES: std::sync::LazyLock<Vec<IndicatorRule>> = std::sync::LazyLock::new(|| {
        vec![
            IndicatorRule::new("Pain", Some(General), &[
                "pain", "hurt", "ache", "sore", "dolor", "douleur", "dolore", "दर्द", "痛", "болит",
                "ağrı",
            ]),
            IndicatorRule::new("Fever", Some(Systemic), &[
                "fever", "temperature", "hot", "burning", "fiebre", "fièvre", "febbre", "बुखार",
                "发烧", "температура", "ateş",
            ]),
            IndicatorRule::new("Fatigue", Some(Systemic), &[
                "tired", "exhausted", "weak", "fatigue", "fatiga", "fatigué", "stanco", "थकान",
                "疲劳", "усталость", "yorgun",
            ]),
            IndicatorRule::new("Cough", Some(Respiratory), &[
                "cough", "tos", "toux", "tosse", "खांसी", "咳嗽", "кашель", "öksürük",
            ]),
            IndicatorRule::new("Headache", Some(Neurological), &[
                "head", "cabeza", "tête", "testa", "सिर", "头", "голова", "baş",
            ]),
            IndicatorRule::new("Stomach discomfort", Some(Gastrointestinal), &[
                "stomach", "belly", "estómago", "estomac", "stomaco", "पेट", "胃", "желудок", "mide",
            ]),
            IndicatorRule::new("Nausea", Some(Gastrointestinal), &[
                "nausea", "sick", "náuseas", "nausées", "मतली", "恶心", "тошнота", "bulantı",
            ]),
        ]
    });
    &RULES
}

/// Last-resort table of single words. Uncategorized.
pub fn flexible_words() -> &'static [IndicatorRule] {
    static RULES: std::sync::LazyLock<Vec<IndicatorRule>> = std::sync::LazyLock::new(|| {
        vec![
            IndicatorRule::new("Pain", None, &[
                "pain", "hurts", "hurt", "aching", "ache", "sore", "dolor", "douleur", "दर्द", "痛",
            ]),
            IndicatorRule::new("Fever", None, &[
                "fever", "temperature", "hot", "burning", "feverish", "fiebre", "fièvre", "बुखार",
                "发烧",
            ]),
            IndicatorRule::new("Cough", None, &[
                "cough", "coughing", "tos", "toux", "tosse", "खांसी", "咳嗽",
            ]),
            IndicatorRule::new("Headache", None, &[
                "headache", "head", "cabeza", "tête", "सिर", "头",
            ]),
            IndicatorRule::new("Stomach discomfort", None, &[
                "stomach", "belly", "abdominal", "estómago", "estomac", "पेट", "胃",
            ]),
            IndicatorRule::new("Fatigue", None, &[
                "tired", "fatigue", "exhausted", "weak", "fatiga", "fatigué", "थकान", "疲劳",
            ]),
            IndicatorRule::new("Nausea", None, &[
                "nausea", "nauseous", "sick", "náuseas", "nausées", "मतली", "恶心",
            ]),
            IndicatorRule::new("Sore throat", None, &[
                "throat", "sore", "garganta", "gorge", "गले", "喉咙",
            ]),
            IndicatorRule::new("Dizziness", None, &[
                "dizzy", "dizziness", "vertigo", "mareo", "vertige", "चक्कर",
            ]),
            IndicatorRule::new("Chills", None, &[
                "chills", "shivering", "shivers", "escalofríos", "frissons", "ठंड",
            ]),
        ]
    });
    &RULES
}
