use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use medisense_storage::otp::OtpPurpose;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SendOtpRequest {
    pub email: Option<String>,
    #[serde(default)]
    pub purpose: OtpPurpose,
}

#[derive(Serialize)]
pub struct SendOtpResponse {
    success: bool,
    message: &'static str,
}

/// Issue a one-time code. Delivery happens outside this service; the code
/// is only logged at debug level.
pub async fn send_otp(
    State(state): State<AppState>,
    Json(req): Json<SendOtpRequest>,
) -> Result<Json<SendOtpResponse>, ApiError> {
    let email = required_email(req.email)?;
    let code = state.otp.issue(&email, req.purpose).await?;
    tracing::debug!(purpose = ?req.purpose, code = %code, "otp issued");

    Ok(Json(SendOtpResponse {
        success: true,
        message: "OTP sent to your email",
    }))
}

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    pub email: Option<String>,
    pub otp: Option<String>,
    #[serde(default)]
    pub purpose: OtpPurpose,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
}

/// Exchange a valid code for a session token. The lowercased email is the
/// user id.
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(req): Json<VerifyOtpRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let email = required_email(req.email)?;
    let otp = req
        .otp
        .filter(|o| !o.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Email and OTP required".to_string()))?;

    if !state.otp.verify(&email, req.purpose, &otp).await? {
        return Err(ApiError::BadRequest(
            "Invalid or expired OTP. Please request a new OTP.".to_string(),
        ));
    }

    let user_id = email.trim().to_lowercase();
    let token = state.sessions.issue(&user_id).await?;
    tracing::info!(purpose = ?req.purpose, "session issued");

    Ok(Json(TokenResponse { token }))
}

#[derive(Serialize)]
pub struct LogoutResponse {
    success: bool,
}

pub async fn logout(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<LogoutResponse>, ApiError> {
    let revoked = state.sessions.revoke(&user.token).await?;
    Ok(Json(LogoutResponse { success: revoked }))
}

fn required_email(email: Option<String>) -> Result<String, ApiError> {
    email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Email required".to_string()))
}
