//! API route configuration.

use crate::api::handlers::{
    health_handler, metrics_handler, missing_code_handler, redirect_handler, shorten_handler,
    unknown_path_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorten`  - Shorten a URL
/// - `GET  /metrics`  - Top domains by number of shortened URLs
/// - `GET  /health`   - Health check
/// - `GET  /`         - Rejected: no short code given
/// - `GET  /{code}`   - Redirect to the original URL
///
/// Static paths take precedence over `/{code}`. Any other method on these
/// paths yields `405 Method Not Allowed`; paths matching no route get a JSON
/// `404`.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .route("/", get(missing_code_handler))
        .route("/{code}", get(redirect_handler))
        .fallback(unknown_path_handler)
}
