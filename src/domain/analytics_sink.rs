//! Analytics sink trait for redirect hit reporting.

use async_trait::async_trait;
use std::fmt;

/// Errors raised by an analytics backend.
///
/// Sink errors are logged by the hit worker and never reach a request
/// handler or an HTTP response.
#[derive(Debug)]
pub enum AnalyticsError {
    Sink(String),
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Sink(e) => write!(f, "Analytics sink error: {}", e),
        }
    }
}

impl std::error::Error for AnalyticsError {}

/// Result type for sink operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Interface for recording served redirects.
///
/// The sink is an injected capability: handlers enqueue
/// [`crate::domain::hit_event::HitEvent`]s and the worker calls `record`,
/// so the router stays testable without a real analytics backend.
///
/// # Implementations
///
/// - [`crate::infrastructure::analytics::LogSink`] - structured log events
/// - [`crate::infrastructure::analytics::MetricsSink`] - metrics counters
/// - [`crate::infrastructure::analytics::NullSink`] - no-op for disabled analytics
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Records `count` hits against a destination URL.
    ///
    /// # Errors
    ///
    /// Backends may fail; callers must treat a failure as droppable and
    /// never let it affect the redirect that triggered it.
    async fn record(&self, destination: &str, count: u64) -> AnalyticsResult<()>;
}
