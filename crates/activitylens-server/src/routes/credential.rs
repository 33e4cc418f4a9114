//! Session credential routes.
//!
//! The credential lives in process memory for the session only. Responses
//! never contain the secret, and nothing here writes it to disk or to logs.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/credential", get(get_credential).put(set_credential))
        .route("/credential/test", post(test_credential))
}

/// GET /api/credential — whether a credential is configured. Never echoes it.
async fn get_credential(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "configured": state.credential_configured(),
    }))
}

#[derive(Deserialize)]
struct CredentialUpdate {
    /// Empty or absent clears the credential.
    #[serde(rename = "apiKey", default)]
    api_key: Option<String>,
}

/// PUT /api/credential — set or clear the session credential.
async fn set_credential(
    State(state): State<Arc<AppState>>,
    Json(update): Json<CredentialUpdate>,
) -> Json<serde_json::Value> {
    state.set_credential(update.api_key);
    Json(serde_json::json!({
        "configured": state.credential_configured(),
    }))
}

/// POST /api/credential/test — minimal authenticated request against the
/// external service to verify the stored credential.
async fn test_credential(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let Some(api_key) = state.credential() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "No credential configured" })),
        );
    };

    match activitylens_insights::test_api_key(&state.http, &api_key).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "valid": true }))),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "valid": false, "error": e })),
        ),
    }
}
