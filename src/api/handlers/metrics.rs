//! Handler for domain metrics.

use axum::{Json, extract::State};

use crate::api::dto::metrics::{DomainMetric, MetricsResponse};
use crate::state::AppState;

/// Returns the most-shortened domains.
///
/// # Endpoint
///
/// `GET /metrics`
///
/// # Response
///
/// ```json
/// {
///   "top_domains": [
///     { "domain": "youtube.com", "count": 4 },
///     { "domain": "udemy.com", "count": 2 }
///   ]
/// }
/// ```
///
/// The number of entries is capped by `TOP_DOMAINS_LIMIT` (default 3).
pub async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsResponse> {
    let top_domains = state
        .stats_service
        .top_domains(state.top_domains_limit)
        .into_iter()
        .map(DomainMetric::from)
        .collect();

    Json(MetricsResponse { top_domains })
}
