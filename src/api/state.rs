//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use axum::body::Bytes;
use std::sync::Arc;
use std::time::Instant;

use crate::chart::{render_svg, ChartConfig};
use crate::leaderboard::Leaderboard;
use crate::telemetry::{NoopSink, TelemetrySink};
use crate::view::{render_page, Metadata};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Dataset and palette being shown
    pub leaderboard: Arc<Leaderboard>,
    /// Dashboard document, rendered once at startup
    pub page: Bytes,
    /// Chart surface on its own, rendered once at startup
    pub chart_svg: Bytes,
    /// Page-view sink, fired per dashboard load
    pub telemetry: Arc<dyn TelemetrySink>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Render the dashboard for `leaderboard` and keep it ready to serve
    pub fn new(
        leaderboard: Leaderboard,
        chart: &ChartConfig,
        meta: &Metadata,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        let page = render_page(&leaderboard, chart, meta);
        let chart_svg = render_svg(&leaderboard, chart);

        tracing::debug!(
            page_bytes = page.len(),
            chart_bytes = chart_svg.len(),
            "Dashboard rendered"
        );

        Self {
            leaderboard: Arc::new(leaderboard),
            page: Bytes::from(page),
            chart_svg: Bytes::from(chart_svg),
            telemetry,
            start_time: Instant::now(),
        }
    }

    /// Built-in dataset, default styling, telemetry off
    pub fn builtin() -> Self {
        Self::new(
            Leaderboard::builtin(),
            &ChartConfig::default(),
            &Metadata::default(),
            Arc::new(NoopSink),
        )
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
