//! Handler for the URL listing endpoint.

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::api::dto::urls::UrlIndexResponse;
use crate::state::AppState;

/// Returns the full short-link table as JSON.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// # Response
///
/// `200 OK` with the table in document order, its size, and the load
/// timestamp. The body is served with `Access-Control-Allow-Origin: *` so
/// browser clients on any origin can read it, and cached for an hour since
/// the table never changes within a deployment.
pub async fn url_index_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = UrlIndexResponse {
        urls: (*state.map).clone(),
        count: state.map.len(),
        build_time: state.build_time,
    };

    (
        [
            (header::CACHE_CONTROL, "public, max-age=3600"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        Json(body),
    )
}
