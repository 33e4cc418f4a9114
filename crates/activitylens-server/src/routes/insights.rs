//! AI insight routes — categorize and summarize.
//!
//! Each route is one stateless round trip to the external service. A failure
//! is scoped to its own endpoint: the charts and the other insight are
//! unaffected. With no credential configured the route reports
//! `skipped: true` rather than an error.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tracing::warn;

use crate::state::AppState;
use activitylens_insights::{categorize, summarize, InsightError, INSIGHT_MODEL};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/insights/categorize", post(run_categorize))
        .route("/insights/summarize", post(run_summarize))
}

/// POST /api/insights/categorize — classify a sample of titles.
///
/// The response text is passed through verbatim; it is expected to be a JSON
/// list of {activity, category} but is intentionally not validated.
async fn run_categorize(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let Some(dataset) = state.dataset() else {
        return super::no_dataset();
    };
    let Some(api_key) = state.credential() else {
        return skipped();
    };

    match categorize(&state.http, &api_key, &dataset.records).await {
        Ok(text) => success(text),
        Err(e) => failure("categorize", e),
    }
}

/// POST /api/insights/summarize — plain-English summary of the latest day.
async fn run_summarize(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let Some(dataset) = state.dataset() else {
        return super::no_dataset();
    };
    let Some(api_key) = state.credential() else {
        return skipped();
    };

    match summarize(&state.http, &api_key, &dataset.records).await {
        Ok(text) => success(text),
        Err(e) => failure("summarize", e),
    }
}

fn success(text: String) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "skipped": false,
            "model": INSIGHT_MODEL,
            "text": text,
        })),
    )
}

fn skipped() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "skipped": true })),
    )
}

fn failure(operation: &str, error: InsightError) -> (StatusCode, Json<serde_json::Value>) {
    warn!("Insight {} failed: {}", operation, error);
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({
            "skipped": false,
            "errorKind": error.kind,
            "error": error.to_string(),
        })),
    )
}
