//! Leaderboard Routes
//!
//! - GET /api/v1/leaderboard - Dataset and palette as JSON

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::LeaderboardResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/leaderboard
///
/// The exact records and palette the dashboard is drawn from.
pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<LeaderboardResponse>> {
    let board = &state.leaderboard;

    Ok(Json(LeaderboardResponse {
        palette: board.palette().iter().cloned().collect(),
        data: board.data().to_vec(),
    }))
}

/// Fallback for unknown paths
pub async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
