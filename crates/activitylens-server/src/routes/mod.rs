//! HTTP route handlers for the dashboard frontend.

pub mod activity;
pub mod credential;
pub mod dashboard;
pub mod insights;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(activity::routes())
        .merge(dashboard::routes())
        .merge(credential::routes())
        .merge(insights::routes())
}

/// 409 body for dashboard/insight routes hit before any upload.
pub(crate) fn no_dataset() -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    let err = activitylens_core::Error::NoDataset("upload an export first".into());
    (
        axum::http::StatusCode::CONFLICT,
        axum::Json(serde_json::json!({ "error": err.to_string() })),
    )
}
