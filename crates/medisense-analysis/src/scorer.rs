use medisense_core::models::analysis::ScoredCondition;
use medisense_lexicon::messages::{DESCRIBE_MORE_SPECIFICALLY, NEEDS_EVALUATION};
use medisense_lexicon::rules::ConditionRule;

pub const REQUIRED_WEIGHT: u32 = 3;
pub const OPTIONAL_WEIGHT: u32 = 1;
pub const MAX_CONDITIONS: usize = 7;

/// Score every condition against the matched labels and keep the best seven.
///
/// Labels connect to a condition's symptoms by case-insensitive containment in
/// either direction, so "Pain" counts toward "Chest pain" and vice versa. A
/// condition is kept if at least one required symptom hit, or if it declares
/// no required symptoms at all. Ties keep table order.
///
/// No labels means nothing to score: the result is empty.
pub fn score(matched: &[String], conditions: &[ConditionRule]) -> Vec<ScoredCondition> {
    if matched.is_empty() {
        return Vec::new();
    }
    let lowered: Vec<String> = matched.iter().map(|s| s.to_lowercase()).collect();

    let mut scored: Vec<ScoredCondition> = conditions
        .iter()
        .filter_map(|condition| {
            let required_hits = condition
                .required_symptoms
                .iter()
                .filter(|s| fuzzy_hit(&lowered, s))
                .count() as u32;
            let optional_hits = condition
                .optional_symptoms
                .iter()
                .filter(|s| fuzzy_hit(&lowered, s))
                .count() as u32;
            let eligible = required_hits > 0 || condition.required_symptoms.is_empty();
            eligible.then(|| ScoredCondition {
                name: condition.name.clone(),
                score: required_hits * REQUIRED_WEIGHT + optional_hits * OPTIONAL_WEIGHT,
            })
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_CONDITIONS);
    scored
}

/// Condition names for the result, or the single placeholder when none
/// qualified.
pub fn condition_names(scored: &[ScoredCondition], matched: &[String]) -> Vec<String> {
    if !scored.is_empty() {
        return scored.iter().map(|c| c.name.clone()).collect();
    }
    let placeholder = if matched.is_empty() {
        DESCRIBE_MORE_SPECIFICALLY
    } else {
        NEEDS_EVALUATION
    };
    vec![placeholder.to_string()]
}

fn fuzzy_hit(lowered_labels: &[String], symptom: &str) -> bool {
    let symptom = symptom.to_lowercase();
    lowered_labels
        .iter()
        .any(|label| label.contains(&symptom) || symptom.contains(label.as_str()))
}
