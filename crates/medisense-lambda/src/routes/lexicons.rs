use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use medisense_lexicon::error::LexiconError;
use medisense_lexicon::rules::SymptomRule;
use medisense_lexicon::{all_lexicons, get_lexicon};

use crate::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconSummary {
    code: String,
    name: String,
    symptom_count: usize,
}

#[derive(Serialize)]
pub struct LexiconDetail {
    code: String,
    name: String,
    symptoms: Vec<SymptomRule>,
}

/// Lexicons in auto-detection order.
pub async fn list_lexicons() -> Json<Vec<LexiconSummary>> {
    let lexicons: Vec<LexiconSummary> = all_lexicons()
        .iter()
        .map(|l| LexiconSummary {
            code: l.code().to_string(),
            name: l.name().to_string(),
            symptom_count: l.symptom_rules().len(),
        })
        .collect();
    Json(lexicons)
}

pub async fn get_lexicon_detail(Path(code): Path<String>) -> Result<Json<LexiconDetail>, ApiError> {
    let lexicon = get_lexicon(&code).ok_or(LexiconError::UnknownLexicon(code))?;

    Ok(Json(LexiconDetail {
        code: lexicon.code().to_string(),
        name: lexicon.name().to_string(),
        symptoms: lexicon.symptom_rules().to_vec(),
    }))
}
