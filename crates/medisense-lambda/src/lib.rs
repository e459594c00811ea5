//! medisense-lambda
//!
//! The HTTP service: symptom analysis, saved analyses, report analysis and
//! one-time-code sign in, served by axum behind `lambda_http`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Lexicons (no auth, static data)
        .route("/lexicons", get(routes::lexicons::list_lexicons))
        .route(
            "/lexicons/{code}",
            get(routes::lexicons::get_lexicon_detail),
        )
        // Anonymous callers allowed; signed-in callers get their result saved
        .route("/voice/analyze", post(routes::voice::analyze))
        .route("/reports/analyze", post(routes::reports::analyze_report))
        // Sign in
        .route("/auth/otp/send", post(routes::auth::send_otp))
        .route("/auth/otp/verify", post(routes::auth::verify_otp))
        // Protected routes
        .route("/auth/logout", post(routes::auth::logout))
        .route("/voice/save", post(routes::voice::save_analysis))
        .route("/voice/analyses", get(routes::voice::list_analyses))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
