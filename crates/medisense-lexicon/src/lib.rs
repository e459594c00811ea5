//! medisense-lexicon
//!
//! Symptom lexicons, the condition table, fallback indicator tables and
//! recommendation templates. Pure data with no AWS dependency. Everything here
//! is compiled once on first use and never mutated.

pub mod conditions;
pub mod error;
pub mod fallback;
pub mod languages;
pub mod messages;
pub mod recommendations;
pub mod rules;

use std::collections::HashSet;

use error::LexiconError;
use rules::SymptomRule;

/// Code of the lexicon used when no hint applies and auto-detection fails.
pub const BASE_LEXICON: &str = "en";

/// Trait implemented by each language's symptom lexicon.
pub trait Lexicon: Send + Sync {
    /// Primary language subtag (e.g., "en", "hi").
    fn code(&self) -> &str;

    /// Human-readable name (e.g., "English (multilingual)").
    fn name(&self) -> &str;

    /// Symptom rules in scan order.
    fn symptom_rules(&self) -> &[SymptomRule];

    /// Check the structural invariants of this lexicon.
    fn validate(&self) -> Vec<LexiconError> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();
        for rule in self.symptom_rules() {
            let label = rule.canonical_label.as_str();
            if !seen.insert(label) {
                errors.push(LexiconError::DuplicateLabel {
                    lexicon: self.code().to_string(),
                    label: label.to_string(),
                });
            }
            if rule.patterns.is_empty() {
                errors.push(LexiconError::EmptyPatterns {
                    lexicon: self.code().to_string(),
                    label: label.to_string(),
                });
            }
            if label.trim().is_empty() || rule.patterns.iter().any(|p| p.is_empty()) {
                errors.push(LexiconError::BlankPattern {
                    lexicon: self.code().to_string(),
                    label: label.to_string(),
                });
            }
        }
        errors
    }
}

/// Return all registered lexicons in auto-detection priority order.
pub fn all_lexicons() -> Vec<Box<dyn Lexicon>> {
    vec![
        Box::new(languages::base::Base),
        Box::new(languages::hi::Hindi),
        Box::new(languages::es::Spanish),
        Box::new(languages::fr::French),
        Box::new(languages::zh::Chinese),
        Box::new(languages::ar::Arabic),
    ]
}

/// Look up a lexicon by its code.
pub fn get_lexicon(code: &str) -> Option<Box<dyn Lexicon>> {
    all_lexicons().into_iter().find(|l| l.code() == code)
}

pub fn base_lexicon() -> Box<dyn Lexicon> {
    Box::new(languages::base::Base)
}

/// Resolve a caller-supplied language tag such as `"hi-IN"` to a lexicon.
///
/// Returns `None` for an absent, blank or `"auto"` tag and for languages with
/// no dedicated lexicon; the caller then auto-detects.
pub fn lexicon_for_hint(hint: &str) -> Option<Box<dyn Lexicon>> {
    let primary = hint
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    if primary.is_empty() || primary == "auto" {
        return None;
    }
    get_lexicon(&primary)
}

/// Validate every lexicon and the condition table. Meant to run once at
/// process start; any error means the compiled tables are corrupt.
pub fn validate_store() -> Vec<LexiconError> {
    let mut errors: Vec<LexiconError> = all_lexicons()
        .iter()
        .flat_map(|l| l.validate())
        .collect();
    errors.extend(conditions::validate_conditions(conditions::all_conditions()));
    errors
}
