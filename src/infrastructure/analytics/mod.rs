//! Analytics sink implementations.
//!
//! Implements [`crate::domain::analytics_sink::AnalyticsSink`] three ways:
//! - [`LogSink`] - structured log events (default)
//! - [`MetricsSink`] - counters via the `metrics` facade
//! - [`NullSink`] - no-op for disabled analytics

mod log_sink;
mod metrics_sink;
mod null_sink;

pub use log_sink::LogSink;
pub use metrics_sink::MetricsSink;
pub use null_sink::NullSink;
