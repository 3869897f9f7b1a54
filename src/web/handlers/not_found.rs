//! Not-found page with fuzzy suggestions.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::domain::suggest::suggest;
use crate::state::AppState;

/// Template for the 404 page.
///
/// Renders `templates/not_found.html` with the requested code and up to
/// five similar codes from the table, or a "no similar links" message when
/// none qualify.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub code: String,
    pub suggestions: Vec<String>,
}

/// Builds the suggestion 404 response for a missed code.
///
/// Shared by the redirect handler (known-shape miss) and the router
/// fallback (anything else, e.g. multi-segment paths). Served with a short
/// `Cache-Control` so a code added in the next deploy is not shadowed for
/// long.
pub fn not_found_page(state: &AppState, code: &str) -> Response {
    let suggestions = suggest(code, state.map.codes());

    (
        StatusCode::NOT_FOUND,
        [(header::CACHE_CONTROL, "public, max-age=300")],
        NotFoundTemplate {
            code: code.to_string(),
            suggestions,
        },
    )
        .into_response()
}

/// Fallback handler for paths no route matched.
///
/// Treats the path minus its leading `/` as the attempted code. Codes never
/// contain `/`, so multi-segment paths always land on the suggestion page.
/// An empty remainder gets a bare 404 with no body.
pub async fn fallback_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let code = uri.path().trim_start_matches('/');

    if code.is_empty() {
        return StatusCode::NOT_FOUND.into_response();
    }

    debug!(code, "Unmatched path");
    not_found_page(&state, code)
}
