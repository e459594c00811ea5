use medisense_core::models::analysis::{AnalysisDebug, AnalysisResult, AnalysisStatus};
use medisense_lexicon::conditions::all_conditions;
use medisense_lexicon::lexicon_for_hint;
use medisense_lexicon::messages::{ECHO_CHARS, INPUT_TOO_SHORT, no_match_symptoms};

use crate::compose::compose;
use crate::matcher::{MatchOutcome, match_auto, match_symptoms};
use crate::normalize::normalize;
use crate::scorer::{condition_names, score};

/// Runs the full symptom pipeline. Cheap to construct and safe to share;
/// the rule tables it reads are static.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    include_debug: bool,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the `debug` block to every result.
    pub fn with_debug(mut self, include_debug: bool) -> Self {
        self.include_debug = include_debug;
        self
    }

    /// Analyze free text. Never fails: unusable input yields a sentinel
    /// result whose `status` says why.
    pub fn analyze(&self, raw: &str, language_hint: Option<&str>) -> AnalysisResult {
        let normalized = normalize(raw);

        let (outcome, language) = match language_hint.and_then(lexicon_for_hint) {
            Some(lexicon) => (
                match_symptoms(&normalized, lexicon.as_ref()),
                lexicon.code().to_string(),
            ),
            None => match_auto(&normalized),
        };

        let matched = outcome.labels();
        let scored = score(matched, all_conditions());
        let possible_conditions = condition_names(&scored, matched);
        let recommendations = compose(&scored, matched);

        let (symptoms, status) = match &outcome {
            MatchOutcome::Matched(result) => {
                tracing::debug!(
                    language = %language,
                    tier = ?result.tier,
                    symptoms = result.labels.len(),
                    "symptoms matched"
                );
                (result.labels.clone(), AnalysisStatus::Complete)
            }
            MatchOutcome::InputTooShort => {
                tracing::debug!(length = normalized.char_len(), "input too short");
                (vec![INPUT_TOO_SHORT.to_string()], AnalysisStatus::InputTooShort)
            }
            MatchOutcome::NoMatch => {
                tracing::debug!(language = %language, "no symptoms matched");
                (no_match_symptoms(raw), AnalysisStatus::NoMatch)
            }
        };

        let debug = self.include_debug.then(|| AnalysisDebug {
            transcript_length: raw.chars().count(),
            language: language_hint.map(str::to_string),
            has_non_latin_chars: normalized.has_non_latin_chars,
            normalized_text: normalized.text.chars().take(ECHO_CHARS).collect(),
        });

        AnalysisResult {
            symptoms,
            possible_conditions,
            recommendations,
            status,
            analysis_id: None,
            language: Some(language),
            debug,
        }
    }
}
