use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome class of a symptom analysis. Soft failures are carried here rather
/// than as errors, so every request still receives a well-formed result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnalysisStatus {
    /// At least one symptom was matched.
    #[default]
    Complete,
    /// Normalized input was below the minimum length and nothing matched.
    InputTooShort,
    /// No lexicon tier produced a label.
    NoMatch,
}

/// A condition together with its weighted symptom score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredCondition {
    pub name: String,
    pub score: u32,
}

/// The result handed back to the caller of a symptom analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalysisResult {
    pub symptoms: Vec<String>,
    pub possible_conditions: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub status: AnalysisStatus,

    /// Set when the result was persisted for an authenticated user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_id: Option<String>,
    /// Code of the lexicon that produced the symptoms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Only populated in development deployments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<AnalysisDebug>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalysisDebug {
    pub transcript_length: usize,
    pub language: Option<String>,
    pub has_non_latin_chars: bool,
    pub normalized_text: String,
}
