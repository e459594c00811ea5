use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::state::AppState;

/// The caller, if the request carried a live session token.
///
/// Missing, unknown and expired tokens all resolve to an anonymous caller.
#[derive(Clone, Debug)]
pub struct MaybeUser(pub Option<String>);

/// A caller with a live session token. Rejects with 401 otherwise.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
    pub token: String,
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            return Ok(MaybeUser(None));
        };
        match state.sessions.resolve(&token).await {
            Ok(user_id) => Ok(MaybeUser(user_id)),
            Err(e) => {
                tracing::warn!(error = %e, "session lookup failed, treating caller as anonymous");
                Ok(MaybeUser(None))
            }
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| ApiError::Unauthorized("Unauthorized".to_string()))?;
        let user_id = state
            .sessions
            .resolve(&token)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Unauthorized".to_string()))?;
        Ok(AuthUser { user_id, token })
    }
}
