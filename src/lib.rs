//! # Linkmap
//!
//! A static short-link redirector built with Axum.
//!
//! ## Architecture
//!
//! The crate follows a small layered layout:
//!
//! - **Domain Layer** ([`domain`]) - The immutable mapping table, the
//!   suggestion engine, and the analytics sink trait
//! - **Infrastructure Layer** ([`infrastructure`]) - Analytics sink
//!   implementations (log, metrics, no-op)
//! - **API Layer** ([`api`]) - JSON handlers, redirect handler, DTOs, and
//!   request tracing middleware
//! - **Web Layer** ([`web`]) - HTML listing and not-found pages
//!
//! ## Features
//!
//! - Immutable code → URL table loaded and validated at startup
//! - Permanent (301) redirects with fire-and-forget hit tracking
//! - Edit-distance suggestions on missed codes
//! - Table listing as HTML (`/`) and CORS-open JSON (`/api/urls`)
//! - `mapctl` binary for validating mapping files before deployment
//!
//! ## Quick Start
//!
//! ```bash
//! # Check the mapping file
//! cargo run --bin mapctl -- validate urls.json
//!
//! # Start the service
//! MAPPING_PATH=urls.json cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod state;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::hit_event::HitEvent;
    pub use crate::domain::mapping::{MappingEntry, MappingError, UrlMap};
    pub use crate::domain::suggest::suggest;
    pub use crate::state::AppState;
}
