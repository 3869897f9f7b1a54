//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `MAPPING_PATH` - Path to the mapping JSON file (default: `urls.json`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `HIT_QUEUE_CAPACITY` - Hit event buffer size (default: 10000, min: 100)
//! - `ANALYTICS` - Hit sink: `log`, `metrics`, or `off` (default: `log`)
//!
//! All variables are optional; an instance started with no environment at
//! all serves `urls.json` from the working directory.

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the mapping document loaded at startup.
    pub mapping_path: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Bounded capacity of the hit event channel. When full, further hits
    /// are dropped rather than delaying redirects.
    pub hit_queue_capacity: usize,
    /// Which analytics sink records redirect hits.
    pub analytics: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let mapping_path = env::var("MAPPING_PATH").unwrap_or_else(|_| "urls.json".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let hit_queue_capacity = env::var("HIT_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let analytics = env::var("ANALYTICS").unwrap_or_else(|_| "log".to_string());

        Self {
            mapping_path,
            listen_addr,
            log_level,
            log_format,
            hit_queue_capacity,
            analytics,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `mapping_path` is empty
    /// - `listen_addr` is not in `host:port` form
    /// - `log_format` is not `text` or `json`
    /// - `hit_queue_capacity` is out of bounds
    /// - `analytics` names an unknown sink
    pub fn validate(&self) -> Result<()> {
        if self.mapping_path.is_empty() {
            anyhow::bail!("MAPPING_PATH must not be empty");
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.hit_queue_capacity < 100 {
            anyhow::bail!(
                "HIT_QUEUE_CAPACITY must be at least 100, got {}",
                self.hit_queue_capacity
            );
        }

        if self.hit_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "HIT_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.hit_queue_capacity
            );
        }

        match self.analytics.as_str() {
            "log" | "metrics" | "off" => {}
            other => anyhow::bail!("ANALYTICS must be 'log', 'metrics', or 'off', got '{other}'"),
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Mapping file: {}", self.mapping_path);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Hit queue capacity: {}", self.hit_queue_capacity);
        tracing::info!("  Analytics sink: {}", self.analytics);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
