//! Handler for short-link redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::domain::hit_event::HitEvent;
use crate::state::AppState;
use crate::web::handlers::not_found::not_found_page;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code in the immutable table
/// 2. On a hit, enqueue a hit event and return `301 Moved Permanently`
/// 3. On a miss, render the 404 page with edit-distance suggestions
///
/// # Hit Tracking
///
/// Hit events go to a bounded channel for async processing. A full or
/// closed queue drops the event (fire-and-forget); the redirect is never
/// delayed or failed on its account.
///
/// The 301 is built by hand: Axum's `Redirect` helpers emit 303/307/308,
/// and permanently-moved semantics let clients cache the hop.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.map.get(&code) {
        Some(destination) => {
            let _ = state.hit_tx.try_send(HitEvent::new(destination));

            debug!(code, destination, "Redirect hit");

            (
                StatusCode::MOVED_PERMANENTLY,
                [(header::LOCATION, destination.to_string())],
            )
                .into_response()
        }
        None => {
            debug!(code, "Redirect miss");
            not_found_page(&state, &code)
        }
    }
}
