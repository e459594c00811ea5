use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body system a symptom belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomCategory {
    Neurological,
    Respiratory,
    Cardiac,
    Gastrointestinal,
    Musculoskeletal,
    General,
    Dermatological,
    Mental,
    Systemic,
}

/// One symptom of a language's lexicon: the phrases that indicate it and the
/// canonical label reported when any of them is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomRule {
    pub canonical_label: String,
    /// Lowercased, deduplicated, in declaration order.
    pub patterns: Vec<String>,
    pub category: SymptomCategory,
}

impl SymptomRule {
    pub fn new(label: &str, category: SymptomCategory, patterns: &[&str]) -> Self {
        Self {
            canonical_label: label.to_string(),
            patterns: ordered_set(patterns),
            category,
        }
    }
}

/// A coarse fallback rule, tried only when a full lexicon pass found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndicatorRule {
    pub canonical_label: String,
    pub patterns: Vec<String>,
    pub category: Option<SymptomCategory>,
}

impl IndicatorRule {
    pub fn new(label: &str, category: Option<SymptomCategory>, patterns: &[&str]) -> Self {
        Self {
            canonical_label: label.to_string(),
            patterns: ordered_set(patterns),
            category,
        }
    }
}

/// A candidate condition. Required symptoms gate eligibility, optional
/// symptoms only add to the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionRule {
    pub name: String,
    pub required_symptoms: Vec<String>,
    pub optional_symptoms: Vec<String>,
}

impl ConditionRule {
    pub fn new(name: &str, required: &[&str], optional: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            required_symptoms: required.iter().map(|s| s.to_string()).collect(),
            optional_symptoms: optional.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn ordered_set(patterns: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let lowered = pattern.trim().to_lowercase();
        if !out.contains(&lowered) {
            out.push(lowered);
        }
    }
    out
}
