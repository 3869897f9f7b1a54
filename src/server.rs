//! HTTP server initialization and runtime setup.
//!
//! Handles mapping load, sink selection, worker spawning, and Axum server
//! lifecycle.

use std::fs;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use chrono::Utc;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::domain::analytics_sink::AnalyticsSink;
use crate::domain::hit_worker::run_hit_worker;
use crate::domain::mapping::UrlMap;
use crate::infrastructure::analytics::{LogSink, MetricsSink, NullSink};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The short-link table from `MAPPING_PATH` (refusing to start on
///   invalid input, so handlers never see a bad entry)
/// - The analytics sink selected by `ANALYTICS`
/// - The background hit worker
/// - The Axum HTTP server, with graceful shutdown on SIGINT/SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The mapping file is missing or fails validation
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let document = fs::read_to_string(&config.mapping_path)
        .with_context(|| format!("Failed to read mapping file '{}'", config.mapping_path))?;

    let map = UrlMap::from_json_str(&document)
        .with_context(|| format!("Invalid mapping file '{}'", config.mapping_path))?;

    let build_time = Utc::now();
    tracing::info!(
        "Loaded {} short links from '{}'",
        map.len(),
        config.mapping_path
    );

    let sink: Arc<dyn AnalyticsSink> = match config.analytics.as_str() {
        "metrics" => {
            tracing::info!("Analytics enabled (metrics)");
            Arc::new(MetricsSink::new())
        }
        "off" => {
            tracing::info!("Analytics disabled (NullSink)");
            Arc::new(NullSink::new())
        }
        _ => {
            tracing::info!("Analytics enabled (log)");
            Arc::new(LogSink::new())
        }
    };

    let (hit_tx, hit_rx) = mpsc::channel(config.hit_queue_capacity);
    tokio::spawn(run_hit_worker(hit_rx, sink));
    tracing::info!("Hit worker started");

    let state = AppState::new(Arc::new(map), build_time, hit_tx);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
