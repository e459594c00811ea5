use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

use super::analysis::AnalysisResult;

/// Language tag recorded when the caller did not supply one.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// A saved symptom analysis belonging to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalysisRecord {
    pub user_id: String,
    pub analysis_id: String,
    pub transcript: String,
    pub language: String,
    pub analysis: AnalysisResult,
    pub created_at: jiff::Timestamp,
}

impl AnalysisRecord {
    pub fn new(
        user_id: &str,
        analysis_id: String,
        transcript: &str,
        language: Option<&str>,
        analysis: AnalysisResult,
        created_at: jiff::Timestamp,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            analysis_id,
            transcript: transcript.to_string(),
            language: language
                .filter(|l| !l.trim().is_empty())
                .unwrap_or(DEFAULT_LANGUAGE)
                .to_string(),
            analysis,
            created_at,
        }
    }
}

/// Generate an analysis id of the form `va_<unix millis>_<8 hex chars>`.
pub fn new_analysis_id(now: jiff::Timestamp) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("va_{}_{}", now.as_millisecond(), &random[..8])
}

/// Check that a client-supplied analysis id is safe to use as a storage key.
pub fn validate_analysis_id(id: &str) -> Result<(), CoreError> {
    let valid = !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidAnalysisId(id.to_string()))
    }
}
