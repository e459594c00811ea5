use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use medisense_analysis::report::{MIN_REPORT_LEN, analyze_report_rule_based, validate_medical_report};
use medisense_bedrock::transaction::ReportEnhancer;
use medisense_core::models::report::ReportAnalysis;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReportRequest {
    pub text: Option<String>,
}

/// Analyze extracted report text.
///
/// Text that does not look like a medical document is rejected with 400.
/// When a model is configured the enhanced analysis is tried first; any
/// failure there falls back to the rule-based analysis, which cannot fail.
pub async fn analyze_report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<Json<ReportAnalysis>, ApiError> {
    let text = req
        .text
        .ok_or_else(|| ApiError::BadRequest("Report text is required".to_string()))?;
    validate_medical_report(&text)?;

    if let Some(enhanced) = &state.report_analyzer
        && text.chars().count() > MIN_REPORT_LEN
    {
        match enhanced.analyze(&text).await {
            Ok(transaction) => {
                tracing::info!(
                    transaction_id = %transaction.id,
                    model = %transaction.model_id,
                    "enhanced report analysis used"
                );
                return Ok(Json(transaction.output));
            }
            Err(e) => tracing::warn!(
                error = %e,
                model = enhanced.model_id(),
                "enhanced report analysis failed, using rule-based"
            ),
        }
    }

    Ok(Json(analyze_report_rule_based(&text, &state.analyzer)))
}
