//! Domain layer containing the mapping table and core logic.
//!
//! # Architecture
//!
//! - [`mapping`] - The immutable, ordered short-code table
//! - [`suggest`] - Edit-distance suggestions for missed codes
//! - [`analytics_sink`] - Hit reporting trait definition
//! - [`hit_event`] - Redirect hit event model
//! - [`hit_worker`] - Asynchronous hit processing worker
//!
//! # Design Principles
//!
//! - The domain layer has no dependency on HTTP or infrastructure concerns
//! - The [`analytics_sink::AnalyticsSink`] trait is implemented by the
//!   infrastructure layer and mocked in tests
//!
//! # Hit Processing Flow
//!
//! 1. The redirect handler serves a 301 for a known code
//! 2. A [`hit_event::HitEvent`] is sent to an async channel (non-blocking)
//! 3. [`hit_worker::run_hit_worker`] drains the channel
//! 4. Hits are delivered to the configured sink; failures are logged and dropped

pub mod analytics_sink;
pub mod hit_event;
pub mod hit_worker;
pub mod mapping;
pub mod suggest;

pub use analytics_sink::{AnalyticsError, AnalyticsResult, AnalyticsSink};
pub use hit_event::HitEvent;
pub use mapping::{MappingEntry, MappingError, UrlMap};

#[cfg(test)]
pub use analytics_sink::MockAnalyticsSink;
