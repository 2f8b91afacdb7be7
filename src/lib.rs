//! # Arenaboard
//!
//! LM Arena leaderboard trends: a server-rendered dashboard charting the best
//! score per AI provider, month by month.
//!
//! ## Features
//!
//! - **Deterministic rendering**: dataset and palette in, identical HTML/SVG out
//! - **Gap-aware lines**: a missing score leaves a gap, never a guess
//! - **Fixed scale**: y-axis pinned to 1000-1600 whatever the data
//! - **Fire-and-forget telemetry**: page views never hold up the page
//! - **Snapshot pipeline**: rebuild the dataset from monthly leaderboard CSVs
//!
//! ## Modules
//!
//! - [`leaderboard`]: Dataset, palette, CSV import/export
//! - [`chart`]: Scales, monotone curves, SVG rendering
//! - [`view`]: Document shell and dashboard markup
//! - [`telemetry`]: Page-view sinks and the detached beacon
//! - [`pipeline`]: Monthly snapshot aggregation
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use arenaboard::chart::ChartConfig;
//! use arenaboard::leaderboard::Leaderboard;
//! use arenaboard::view::{render_page, Metadata};
//!
//! let board = Leaderboard::builtin();
//! let html = render_page(&board, &ChartConfig::default(), &Metadata::default());
//!
//! assert!(html.contains("LM Arena Leaderboard"));
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod leaderboard;
pub mod logging;
pub mod pipeline;
pub mod telemetry;
pub mod view;

// Re-export top-level types for convenience
pub use leaderboard::{
    default_palette, DataPoint, Leaderboard, LeaderboardError, LeaderboardResult,
    ProviderAliases, SeriesColor, SeriesPalette,
};

pub use chart::{render_svg, ChartConfig, ChartLayout, YDomain};

pub use view::{render_page, Dashboard, Metadata};

pub use telemetry::{spawn_page_view, HttpSink, NoopSink, PageView, TelemetryError, TelemetrySink};

pub use pipeline::{AggregationReport, MonthlyAggregator, PipelineError};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    Config, ConfigError, ConfigLoad, DashboardConfig, LoggingConfig, ServerConfig,
    TelemetryConfig,
};
