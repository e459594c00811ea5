use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Structured analysis of an uploaded medical document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportAnalysis {
    pub summary: String,
    pub findings: Vec<Finding>,
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub possible_conditions: Vec<String>,
    pub prevention: Vec<String>,
    pub future_suggestions: Vec<String>,
    pub recommendations: Vec<String>,
    pub disclaimer: String,
    pub source: ReportSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Finding {
    pub label: String,
    pub value: String,
    pub status: FindingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FindingStatus {
    /// Within the reference range.
    Normal,
    /// Borderline.
    Attention,
    /// Out of range or concerning.
    Critical,
}

/// Which path produced a [`ReportAnalysis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportSource {
    Enhanced,
    RuleBased,
}
