//! Hit event model for asynchronous redirect analytics.

/// An in-memory record of one served redirect, queued for async processing.
///
/// Created in the redirect handler and sent over a bounded channel to
/// [`crate::domain::hit_worker::run_hit_worker`], which forwards it to the
/// configured [`crate::domain::analytics_sink::AnalyticsSink`]. The handler
/// never waits on delivery; a full queue drops the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitEvent {
    /// Destination URL that was served.
    pub url: String,
    /// Number of hits this event represents. Handlers always send 1.
    pub count: u64,
}

impl HitEvent {
    /// Creates a single-hit event for a destination URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            count: 1,
        }
    }
}
