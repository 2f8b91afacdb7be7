//! Arenaboard Server
//!
//! Run with: cargo run --bin arenaboard
//!
//! # Configuration
//!
//! Read from `config.toml` (see `arenaboard-cli config`), overridden by:
//! - `ARENABOARD_HOST`, `ARENABOARD_PORT`: bind address (default: 0.0.0.0:3000)
//! - `ARENABOARD_DATA_FILE`: CSV replacing the built-in dataset
//! - `ARENABOARD_TELEMETRY_URL`: analytics endpoint (enables page-view events)
//! - `ARENABOARD_LOG_LEVEL`, `ARENABOARD_LOG_FORMAT`: logging
//! - `RUST_LOG`: full filter, wins over the configured level

use arenaboard::api::{serve, AppState};
use arenaboard::chart::ChartConfig;
use arenaboard::config::{Config, TelemetryConfig};
use arenaboard::leaderboard::{default_palette, Leaderboard};
use arenaboard::telemetry::{HttpSink, NoopSink, TelemetrySink};
use arenaboard::view::Metadata;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = Config::load_default();
    arenaboard::logging::init(&loaded.config.logging);
    loaded.log();
    let config = loaded.config;

    tracing::info!("Starting Arenaboard v{}", env!("CARGO_PKG_VERSION"));

    let leaderboard = match &config.dashboard.data_file {
        Some(path) => {
            tracing::info!("Loading dataset from {}", path);
            Leaderboard::from_csv_path(Path::new(path), default_palette())?
        }
        None => {
            tracing::info!("Using built-in dataset");
            Leaderboard::builtin()
        }
    };
    tracing::info!(
        "Dataset: {} records, {} providers",
        leaderboard.data().len(),
        leaderboard.palette().len()
    );

    let telemetry = telemetry_sink(&config.telemetry);
    let state = AppState::new(
        leaderboard,
        &ChartConfig::default(),
        &Metadata::default(),
        telemetry,
    );

    serve(state, &config.server).await?;

    tracing::info!("Arenaboard stopped");
    Ok(())
}

/// Pick the page-view sink; a broken telemetry setup only disables telemetry
fn telemetry_sink(config: &TelemetryConfig) -> Arc<dyn TelemetrySink> {
    match (&config.url, config.enabled) {
        (Some(url), true) => match HttpSink::new(url, config.timeout_ms) {
            Ok(sink) => {
                tracing::info!("Telemetry enabled: {}", url);
                Arc::new(sink)
            }
            Err(e) => {
                tracing::warn!("Telemetry disabled, could not build client: {}", e);
                Arc::new(NoopSink)
            }
        },
        (None, true) => {
            tracing::warn!("Telemetry enabled without a url, events will be dropped");
            Arc::new(NoopSink)
        }
        _ => {
            tracing::info!("Telemetry disabled (set ARENABOARD_TELEMETRY_URL to enable)");
            Arc::new(NoopSink)
        }
    }
}
