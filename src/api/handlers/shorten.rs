//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::debug;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com/some/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/Qm1Rz0aB",
///   "original_url": "example.com/some/page"
/// }
/// ```
///
/// Shortening the same URL again returns the same short URL.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON, `url` is missing or
/// empty, or the URL fails validation.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Rejected shorten request body");
        AppError::bad_request("Invalid request body")
    })?;

    payload.validate()?;

    let link = state.link_service.shorten(&payload.url)?;

    Ok(Json(ShortenResponse {
        short_url: link.short_url,
        original_url: payload.url,
    }))
}
