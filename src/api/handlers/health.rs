//! Handler for the health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// Always `200 OK` - the table is loaded before the server binds, so a
/// running instance has nothing left to degrade. An empty table is healthy.
///
/// ```json
/// {
///   "status": "ok",
///   "urlCount": 42,
///   "buildTime": "2026-08-06T12:00:00Z"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        url_count: state.map.len(),
        build_time: state.build_time,
    })
}
