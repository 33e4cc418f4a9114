//! Upload and raw-record routes.

use std::sync::Arc;

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::state::{AppState, Dataset};
use activitylens_pipeline::{extract_records, normalize};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activity/upload", post(upload_activity))
        .route("/records", get(list_records))
}

/// POST /api/activity/upload — parse an export file and replace the dataset.
///
/// The first multipart field carrying data is taken as the document; a
/// malformed top-level document fails the whole upload with 400 and leaves
/// any previous dataset in place.
async fn upload_activity(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let bytes = loop {
        match multipart.next_field().await {
            Ok(Some(field)) => match field.bytes().await {
                Ok(b) if !b.is_empty() => break b,
                Ok(_) => continue,
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(serde_json::json!({ "error": format!("Read failed: {}", e) })),
                    );
                }
            },
            Ok(None) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "error": "No file in upload" })),
                );
            }
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "error": format!("Multipart error: {}", e) })),
                );
            }
        }
    };

    let doc: serde_json::Value = match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": format!("Not valid JSON: {}", e) })),
            );
        }
    };

    let records = match extract_records(&doc) {
        Ok(r) => r,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            );
        }
    };

    let outcome = normalize(records);
    let dataset = Dataset {
        id: uuid::Uuid::new_v4().to_string(),
        dropped: outcome.dropped,
        uploaded_at: chrono::Utc::now().to_rfc3339(),
        records: outcome.records,
    };

    info!(
        "Loaded dataset {}: {} records, {} dropped",
        dataset.id,
        dataset.records.len(),
        dataset.dropped
    );

    let response = serde_json::json!({
        "datasetId": dataset.id,
        "totalRecords": dataset.records.len(),
        "droppedRecords": dataset.dropped,
        "uploadedAt": dataset.uploaded_at,
    });
    state.set_dataset(dataset);

    (StatusCode::OK, Json(response))
}

#[derive(Deserialize)]
struct RecordsQuery {
    limit: Option<usize>,
}

/// GET /api/records?limit=N — raw-record preview, capped at the configured
/// preview limit.
async fn list_records(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecordsQuery>,
) -> impl IntoResponse {
    let Some(dataset) = state.dataset() else {
        return super::no_dataset();
    };

    let cap = state.config.preview_limit;
    let limit = query.limit.unwrap_or(cap).min(cap);
    let rows: Vec<_> = dataset.records.iter().take(limit).collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "records": rows,
            "returned": rows.len(),
            "total": dataset.records.len(),
        })),
    )
}
