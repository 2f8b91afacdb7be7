//! Page-View Telemetry
//!
//! Best-effort analytics: one `PageView` event per dashboard load, sent by a
//! detached task. The page response never waits on it and a failed send is
//! only logged.
//!
//! ## Sinks
//!
//! - `HttpSink`: POSTs the event as JSON to an analytics endpoint
//! - `NoopSink`: drops events (telemetry disabled)

mod http;

pub use http::HttpSink;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

/// A single page load
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub id: String,
    pub path: String,
    pub occurred_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

impl PageView {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            path: path.into(),
            occurred_at: Utc::now(),
            user_agent: None,
            referrer: None,
        }
    }

    pub fn user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn referrer(mut self, referrer: Option<String>) -> Self {
        self.referrer = referrer;
        self
    }
}

/// Telemetry errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Request could not be built or sent
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Endpoint returned {0}")]
    Status(u16),

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Endpoint unreachable
    #[error("Endpoint unavailable")]
    Unavailable,
}

/// Destination for page-view events
#[async_trait]
pub trait TelemetrySink: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Deliver one event
    async fn record(&self, event: &PageView) -> Result<(), TelemetryError>;
}

/// Sink that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

#[async_trait]
impl TelemetrySink for NoopSink {
    fn name(&self) -> &str {
        "noop"
    }

    async fn record(&self, _event: &PageView) -> Result<(), TelemetryError> {
        Ok(())
    }
}

/// Fire a page-view event on a detached task
///
/// Callers may drop the returned handle. A failed send, or a panic inside
/// the sink, stays inside the task.
pub fn spawn_page_view(sink: Arc<dyn TelemetrySink>, event: PageView) -> JoinHandle<()> {
    tokio::spawn(async move {
        match sink.record(&event).await {
            Ok(()) => {
                tracing::trace!(sink = sink.name(), event_id = %event.id, "Page view recorded");
            }
            Err(e) => {
                tracing::debug!(sink = sink.name(), event_id = %event.id, error = %e, "Page view not recorded");
            }
        }
    })
}
