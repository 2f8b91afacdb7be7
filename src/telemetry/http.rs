//! HTTP analytics sink

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{PageView, TelemetryError, TelemetrySink};

/// POSTs page views as JSON to an analytics endpoint
pub struct HttpSink {
    client: Client,
    url: String,
}

impl HttpSink {
    /// Create a sink for `url` with a per-request timeout
    pub fn new(url: impl Into<String>, timeout_ms: u64) -> Result<Self, TelemetryError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(concat!("arenaboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TelemetrySink for HttpSink {
    fn name(&self) -> &str {
        "http"
    }

    async fn record(&self, event: &PageView) -> Result<(), TelemetryError> {
        let response = self
            .client
            .post(&self.url)
            .json(event)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TelemetryError::Timeout
                } else if e.is_connect() {
                    TelemetryError::Unavailable
                } else {
                    TelemetryError::Request(e)
                }
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(TelemetryError::Status(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let sink = HttpSink::new("http://127.0.0.1:9/collect", 500).unwrap();
        let result = sink.record(&PageView::new("/")).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_url() {
        let sink = HttpSink::new("http://localhost:9999/collect", 1000).unwrap();
        assert_eq!(sink.url(), "http://localhost:9999/collect");
        assert_eq!(sink.name(), "http");
    }
}
