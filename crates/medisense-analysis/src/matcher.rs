//! Tiered symptom matching.
//!
//! Tier one walks a lexicon's rules in declaration order and tries, for each
//! pattern, a whole-word match, then substring containment, then (for
//! multi-word patterns) every token present anywhere in the text. The two
//! fallback tiers use substring containment only and run solely when every
//! earlier tier came back empty.

use medisense_lexicon::fallback::{context_indicators, flexible_words};
use medisense_lexicon::rules::{IndicatorRule, SymptomRule};
use medisense_lexicon::{Lexicon, all_lexicons, base_lexicon};

use crate::normalize::NormalizedText;

/// Normalized input shorter than this (in characters) is "too short" when
/// nothing matched.
pub const MIN_TEXT_LEN: usize = 10;

/// Which tier produced the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Lexicon,
    ContextIndicator,
    Flexible,
}

/// Matched canonical labels in rule order, without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub labels: Vec<String>,
    pub tier: MatchTier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched(MatchResult),
    InputTooShort,
    NoMatch,
}

impl MatchOutcome {
    /// Matched labels; empty for either sentinel outcome.
    pub fn labels(&self) -> &[String] {
        match self {
            MatchOutcome::Matched(result) => &result.labels,
            MatchOutcome::InputTooShort | MatchOutcome::NoMatch => &[],
        }
    }
}

/// Run all three tiers against one lexicon.
pub fn match_symptoms(text: &NormalizedText, lexicon: &dyn Lexicon) -> MatchOutcome {
    let labels = match_rules(&text.text, lexicon.symptom_rules());
    finish(text, labels)
}

/// Auto-detect the lexicon: the first in priority order whose tier-one pass
/// matches anything wins. Otherwise the base lexicon's fallback tiers decide.
///
/// Returns the outcome together with the code of the lexicon used.
pub fn match_auto(text: &NormalizedText) -> (MatchOutcome, String) {
    for lexicon in all_lexicons() {
        let labels = match_rules(&text.text, lexicon.symptom_rules());
        if !labels.is_empty() {
            let outcome = MatchOutcome::Matched(MatchResult {
                labels,
                tier: MatchTier::Lexicon,
            });
            return (outcome, lexicon.code().to_string());
        }
    }
    let base = base_lexicon();
    (finish(text, Vec::new()), base.code().to_string())
}

fn finish(text: &NormalizedText, labels: Vec<String>) -> MatchOutcome {
    if !labels.is_empty() {
        return MatchOutcome::Matched(MatchResult {
            labels,
            tier: MatchTier::Lexicon,
        });
    }

    let labels = match_indicators(&text.text, context_indicators());
    if !labels.is_empty() {
        return MatchOutcome::Matched(MatchResult {
            labels,
            tier: MatchTier::ContextIndicator,
        });
    }

    let labels = match_indicators(&text.text, flexible_words());
    if !labels.is_empty() {
        return MatchOutcome::Matched(MatchResult {
            labels,
            tier: MatchTier::Flexible,
        });
    }

    if text.char_len() < MIN_TEXT_LEN {
        MatchOutcome::InputTooShort
    } else {
        MatchOutcome::NoMatch
    }
}

/// Tier one over a rule list. `text` must already be normalized.
pub fn match_rules(text: &str, rules: &[SymptomRule]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for rule in rules {
        if labels.contains(&rule.canonical_label) {
            continue;
        }
        if rule.patterns.iter().any(|p| pattern_matches(text, p)) {
            labels.push(rule.canonical_label.clone());
        }
    }
    labels
}

/// Substring-only pass used by both fallback tables.
pub fn match_indicators(text: &str, rules: &[IndicatorRule]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for rule in rules {
        if labels.contains(&rule.canonical_label) {
            continue;
        }
        if rule.patterns.iter().any(|p| text.contains(p.as_str())) {
            labels.push(rule.canonical_label.clone());
        }
    }
    labels
}

fn pattern_matches(text: &str, pattern: &str) -> bool {
    if contains_word(text, pattern) || text.contains(pattern) {
        return true;
    }
    pattern.contains(' ')
        && pattern
            .split_whitespace()
            .all(|token| contains_word(text, token) || text.contains(token))
}

/// Whole-word containment with ASCII word boundaries: a boundary sits
/// between an ASCII alphanumeric or `_` and anything else (including the
/// ends of the text).
pub fn contains_word(text: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let (Some(first), Some(last)) = (needle.chars().next(), needle.chars().next_back()) else {
        return false;
    };
    text.match_indices(needle).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + needle.len()..].chars().next();
        is_boundary(before, first) && is_boundary_after(last, after)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_boundary(before: Option<char>, first: char) -> bool {
    before.is_some_and(is_word_char) != is_word_char(first)
}

fn is_boundary_after(last: char, after: Option<char>) -> bool {
    is_word_char(last) != after.is_some_and(is_word_char)
}
