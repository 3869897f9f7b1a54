use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::domain::hit_event::HitEvent;
use crate::domain::mapping::UrlMap;

/// Shared per-request state: the immutable table, the moment it was loaded,
/// and the sender half of the hit event queue.
#[derive(Clone)]
pub struct AppState {
    pub map: Arc<UrlMap>,
    pub build_time: DateTime<Utc>,
    pub hit_tx: mpsc::Sender<HitEvent>,
}

impl AppState {
    pub fn new(map: Arc<UrlMap>, build_time: DateTime<Utc>, hit_tx: mpsc::Sender<HitEvent>) -> Self {
        Self {
            map,
            build_time,
            hit_tx,
        }
    }
}
