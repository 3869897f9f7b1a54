//! Home page handler listing every short link.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::header, response::IntoResponse};

use crate::domain::mapping::MappingEntry;
use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/index.html` with the full table (code, destination)
/// and a total count. No pagination; the table is small enough to render
/// in one page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub entries: Vec<MappingEntry>,
    pub count: usize,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// Served with `Cache-Control: public, max-age=3600`; the listing only
/// changes with a redeploy.
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "public, max-age=3600")],
        IndexTemplate {
            entries: state.map.entries().to_vec(),
            count: state.map.len(),
        },
    )
}
