//! Log-based analytics sink.

use async_trait::async_trait;
use tracing::info;

use crate::domain::analytics_sink::{AnalyticsResult, AnalyticsSink};

/// Records redirect hits as structured log events.
///
/// The default sink: every hit becomes one `INFO` event on the `analytics`
/// target, which downstream log pipelines can filter on. Emitting a log
/// line cannot fail, so `record` always succeeds.
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsSink for LogSink {
    async fn record(&self, destination: &str, count: u64) -> AnalyticsResult<()> {
        info!(target: "analytics", destination, count, "Redirect served");
        Ok(())
    }
}
