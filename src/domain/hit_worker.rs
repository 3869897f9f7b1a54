//! Background worker draining the hit event queue.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::analytics_sink::AnalyticsSink;
use crate::domain::hit_event::HitEvent;

/// Consumes hit events and forwards them to the analytics sink.
///
/// Runs until every sender half of the channel is dropped. Sink failures
/// are logged and the event is discarded; the worker keeps draining so a
/// broken backend can never back up into request handling.
pub async fn run_hit_worker(mut rx: mpsc::Receiver<HitEvent>, sink: Arc<dyn AnalyticsSink>) {
    while let Some(event) = rx.recv().await {
        match sink.record(&event.url, event.count).await {
            Ok(()) => debug!(url = %event.url, count = event.count, "Recorded hit"),
            Err(e) => warn!(url = %event.url, "Failed to record hit: {}", e),
        }
    }

    debug!("Hit queue closed, worker exiting");
}
