//! DTO for the URL listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::mapping::UrlMap;

/// Full table listing returned by `GET /api/urls`.
///
/// `urls` serializes as a JSON object with members in table order, so the
/// body is byte-stable across requests for a given deployment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlIndexResponse {
    pub urls: UrlMap,
    pub count: usize,
    pub build_time: DateTime<Utc>,
}
