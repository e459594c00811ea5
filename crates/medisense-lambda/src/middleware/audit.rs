use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs every API request once, after the response is produced.
///
/// Only the method, path and status are recorded. Bodies carry transcripts
/// and report text and never reach the log.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        "api_request"
    );

    response
}
