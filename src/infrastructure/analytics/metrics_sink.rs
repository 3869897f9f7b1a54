//! Metrics-based analytics sink.

use async_trait::async_trait;

use crate::domain::analytics_sink::{AnalyticsResult, AnalyticsSink};

/// Name of the counter incremented per served redirect.
const REDIRECTS_COUNTER: &str = "linkmap_redirects_total";

/// Records redirect hits on a [`metrics`] counter labelled by destination.
///
/// Uses the `metrics` facade, so the actual backend is whatever recorder
/// the deployment installs; with no recorder the counter calls are no-ops.
pub struct MetricsSink;

impl MetricsSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MetricsSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsSink for MetricsSink {
    async fn record(&self, destination: &str, count: u64) -> AnalyticsResult<()> {
        metrics::counter!(REDIRECTS_COUNTER, "destination" => destination.to_string())
            .increment(count);
        Ok(())
    }
}
