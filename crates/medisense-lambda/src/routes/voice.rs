use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use medisense_core::error::CoreError;
use medisense_core::models::analysis::AnalysisResult;
use medisense_core::models::record::{AnalysisRecord, new_analysis_id, validate_analysis_id};

use crate::error::ApiError;
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub transcript: Option<String>,
    pub language: Option<String>,
}

/// Analyze a transcript. Signed-in callers also get the result saved; a
/// failed save is logged and does not affect the response.
pub async fn analyze(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let transcript = req
        .transcript
        .ok_or_else(|| ApiError::BadRequest("Transcript is required".to_string()))?;
    let language = req.language.as_deref();

    let mut result = state.analyzer.analyze(&transcript, language);
    tracing::info!(
        language = result.language.as_deref().unwrap_or_default(),
        symptoms = result.symptoms.len(),
        status = ?result.status,
        "voice analysis complete"
    );

    if let Some(user_id) = user {
        let now = jiff::Timestamp::now();
        let analysis_id = new_analysis_id(now);

        let mut stored = result.clone();
        stored.analysis_id = Some(analysis_id.clone());
        stored.debug = None;
        let record = AnalysisRecord::new(
            &user_id,
            analysis_id.clone(),
            &transcript,
            language,
            stored,
            now,
        );

        match state.analyses.save(&record).await {
            Ok(()) => result.analysis_id = Some(analysis_id),
            Err(e) => tracing::warn!(
                error = %e,
                analysis_id = %analysis_id,
                "failed to save voice analysis"
            ),
        }
    }

    Ok(Json(result))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub analysis_id: Option<String>,
    pub transcript: Option<String>,
    pub language: Option<String>,
    pub analysis: Option<AnalysisResult>,
}

#[derive(Serialize)]
pub struct SaveResponse {
    success: bool,
}

/// Save an analysis the client already holds.
pub async fn save_analysis(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, ApiError> {
    let analysis_id = non_empty(req.analysis_id, "analysisId")?;
    let transcript = non_empty(req.transcript, "transcript")?;
    let analysis = req
        .analysis
        .ok_or_else(|| CoreError::MissingField("analysis".to_string()))?;
    validate_analysis_id(&analysis_id)?;

    let record = AnalysisRecord::new(
        &user.user_id,
        analysis_id,
        &transcript,
        req.language.as_deref(),
        analysis,
        jiff::Timestamp::now(),
    );
    state.analyses.save(&record).await?;

    Ok(Json(SaveResponse { success: true }))
}

/// The caller's saved analyses, newest first.
pub async fn list_analyses(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<AnalysisRecord>>, ApiError> {
    let records = state.analyses.list_for_user(&user.user_id).await?;
    Ok(Json(records))
}

fn non_empty(value: Option<String>, field: &str) -> Result<String, CoreError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| CoreError::MissingField(field.to_string()))
}
