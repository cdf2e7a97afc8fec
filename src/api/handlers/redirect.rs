//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `301 Moved Permanently` and the stored (normalized) URL in
/// the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = state.link_service.resolve(&code)?;

    debug!(code = %code, "Redirecting");

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, long_url)]).into_response())
}

/// Rejects a redirect request without a code.
///
/// # Endpoint
///
/// `GET /`
pub async fn missing_code_handler() -> AppError {
    AppError::bad_request("Short URL code is required")
}

/// Answers paths that match no route, such as `/a/b`.
pub async fn unknown_path_handler() -> AppError {
    AppError::not_found("Short URL not found")
}
