#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use linkmap::prelude::{HitEvent, UrlMap};
use linkmap::state::AppState;
use tokio::sync::mpsc;

/// A small mapping with a known order, shared across handler tests.
pub fn sample_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("gh", "https://github.com/example"),
        ("docs", "https://docs.example.com/"),
        ("blog", "https://blog.example.com/posts"),
    ]
}

/// Builds an `AppState` over the given pairs, handing back the receiver
/// half of the hit queue so tests can assert on recorded hits.
pub fn create_test_state(
    pairs: Vec<(&'static str, &'static str)>,
) -> (AppState, mpsc::Receiver<HitEvent>) {
    let map = UrlMap::from_entries(pairs).unwrap();
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(Arc::new(map), Utc::now(), tx);

    (state, rx)
}
