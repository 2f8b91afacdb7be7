//! Page Routes
//!
//! - GET / - The dashboard document; fires a page-view beacon
//! - GET /chart.svg - The chart surface alone

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Uri},
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::telemetry::{spawn_page_view, PageView};

/// GET /
///
/// Serves the pre-rendered dashboard. The page-view event goes out on a
/// detached task; its handle is dropped so the response never waits on it.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Html<Bytes> {
    let event = PageView::new(uri.path())
        .user_agent(header_value(&headers, header::USER_AGENT))
        .referrer(header_value(&headers, header::REFERER));
    let _ = spawn_page_view(Arc::clone(&state.telemetry), event);

    Html(state.page.clone())
}

/// GET /chart.svg
pub async fn chart(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "image/svg+xml")],
        state.chart_svg.clone(),
    )
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
