use medisense_core::models::analysis::ScoredCondition;
use medisense_lexicon::recommendations::{
    CONDITION_ADVICE, HIGH_SEVERITY_KEYWORDS, MAX_RECOMMENDATIONS, NO_SYMPTOM_ADVICE,
    SEEK_CARE, SEEK_CARE_URGENT, SYMPTOM_ADVICE, SYMPTOM_DIARY, Template, URGENT_SYMPTOM_COUNT,
};

/// Insertion-ordered recommendations, deduplicated by template tag.
#[derive(Debug, Default)]
struct Advice {
    tags: Vec<&'static str>,
    lines: Vec<String>,
}

impl Advice {
    fn push(&mut self, template: &Template) {
        if !self.tags.contains(&template.tag) {
            self.tags.push(template.tag);
            self.lines.push(template.text.to_string());
        }
    }
}

/// Build the advice list for a scored analysis.
///
/// Order: templates for the top condition, then per-symptom templates, then
/// the symptom diary and seek-care lines. At most eight lines are returned.
pub fn compose(top: &[ScoredCondition], matched: &[String]) -> Vec<String> {
    if matched.is_empty() {
        return NO_SYMPTOM_ADVICE.iter().map(|s| s.to_string()).collect();
    }

    let mut advice = Advice::default();

    if let Some(first) = top.first() {
        for group in CONDITION_ADVICE.iter().filter(|g| g.applies_to(&first.name)) {
            group.templates.iter().for_each(|t| advice.push(t));
        }
    }

    for group in SYMPTOM_ADVICE {
        if matched.iter().any(|label| group.applies_to(label)) {
            group.templates.iter().for_each(|t| advice.push(t));
        }
    }

    advice.push(&SYMPTOM_DIARY);
    if is_urgent(top, matched) {
        advice.push(&SEEK_CARE_URGENT);
    } else {
        advice.push(&SEEK_CARE);
    }

    advice.lines.truncate(MAX_RECOMMENDATIONS);
    advice.lines
}

/// Escalate when many symptoms were reported or any listed condition is a
/// high-severity one.
pub fn is_urgent(top: &[ScoredCondition], matched: &[String]) -> bool {
    matched.len() > URGENT_SYMPTOM_COUNT
        || top
            .iter()
            .any(|c| HIGH_SEVERITY_KEYWORDS.iter().any(|k| c.name.contains(k)))
}
