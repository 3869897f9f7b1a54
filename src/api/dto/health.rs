//! DTO for the health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
///
/// The service has no degradable components at request time (the table is
/// in memory), so `status` is always `"ok"`; the body exists to report the
/// table size and load time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub url_count: usize,
    pub build_time: DateTime<Utc>,
}
