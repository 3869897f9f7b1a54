//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`          - HTML listing of every short link (public)
//! - `GET /api/urls`  - Full table as JSON, CORS-open (public)
//! - `GET /health`    - Health check (public)
//! - `GET /{code}`    - Short link redirect, 404 page with suggestions on miss
//! - anything else    - 404 page with suggestions for the attempted path
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{health_handler, redirect_handler, url_index_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::{fallback_handler, index_handler};

/// Constructs the application router with all routes and middleware.
///
/// The reserved paths (`/`, `/api/urls`, `/health`) win over code lookup by
/// route precedence; everything else is treated as a short code attempt.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/api/urls", get(url_index_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
