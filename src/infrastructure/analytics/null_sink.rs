//! No-op analytics sink for disabled analytics.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::analytics_sink::{AnalyticsResult, AnalyticsSink};

/// A sink that drops every hit.
///
/// Used when analytics is switched off and in tests that only care about
/// routing behavior.
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        debug!("Using NullSink (analytics disabled)");
        Self
    }
}

impl Default for NullSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsSink for NullSink {
    async fn record(&self, _destination: &str, _count: u64) -> AnalyticsResult<()> {
        Ok(())
    }
}
