//! Parsing of the model's report reply into a [`ReportAnalysis`].

use medisense_core::models::report::{Finding, ReportAnalysis, ReportSource};
use serde_json::Value;

use crate::error::BedrockError;

pub const DEFAULT_DISCLAIMER: &str =
    "This is not medical advice. Please consult a healthcare provider.";

/// Parse and validate a model reply.
///
/// The reply must be a JSON object (optionally wrapped in a Markdown code
/// fence) with a non-empty `summary` and array `findings` and
/// `recommendations`. Missing or non-array `symptoms`, `prevention` and
/// `futureSuggestions` become empty; a missing `disclaimer` gets a default.
pub fn parse_report_analysis(response_text: &str) -> Result<ReportAnalysis, BedrockError> {
    let body = strip_code_fence(response_text);
    if body.is_empty() {
        return Err(BedrockError::ResponseParse("empty response".to_string()));
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| BedrockError::ResponseParse(format!("reply is not JSON: {e}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| BedrockError::SchemaViolation("reply is not a JSON object".to_string()))?;

    let summary = object
        .get("summary")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| BedrockError::SchemaViolation("missing summary".to_string()))?;

    let findings = match object.get("findings") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| serde_json::from_value::<Finding>(item.clone()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| BedrockError::SchemaViolation(format!("invalid finding: {e}")))?,
        _ => {
            return Err(BedrockError::SchemaViolation(
                "findings must be an array".to_string(),
            ));
        }
    };

    let recommendations = match object.get("recommendations") {
        Some(Value::Array(_)) => string_list(object.get("recommendations")),
        _ => {
            return Err(BedrockError::SchemaViolation(
                "recommendations must be an array".to_string(),
            ));
        }
    };

    let disclaimer = object
        .get("disclaimer")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_DISCLAIMER);

    Ok(ReportAnalysis {
        summary: summary.to_string(),
        findings,
        symptoms: string_list(object.get("symptoms")),
        possible_conditions: Vec::new(),
        prevention: string_list(object.get("prevention")),
        future_suggestions: string_list(object.get("futureSuggestions")),
        recommendations,
        disclaimer: disclaimer.to_string(),
        source: ReportSource::Enhanced,
    })
}

/// String entries of a JSON array. Anything else yields an empty list.
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Remove a surrounding ```` ```json ```` / ```` ``` ```` fence, if present.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // drop the info string (e.g. "json") on the opening line
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
