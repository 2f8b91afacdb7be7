//! Data Transfer Objects
//!
//! Response types for the JSON endpoints.

use serde::Serialize;

use crate::leaderboard::{DataPoint, SeriesColor};

/// GET /api/v1/leaderboard response
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    /// Providers in legend order
    pub palette: Vec<SeriesColor>,
    /// Monthly records in display order
    pub data: Vec<DataPoint>,
}

/// GET /health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Number of series drawn
    pub providers: usize,
    /// Number of monthly records
    pub records: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
