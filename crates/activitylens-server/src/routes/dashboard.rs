//! Dashboard aggregate routes — what the charts are drawn from.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;
use activitylens_pipeline::{aggregate, build_corpus, word_frequencies};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/summary", get(get_summary))
        .route("/dashboard/products", get(get_products))
        .route("/dashboard/hours", get(get_hours))
        .route("/dashboard/weekdays", get(get_weekdays))
        .route("/dashboard/corpus", get(get_corpus))
}

/// GET /api/dashboard/summary — scalar summary values.
async fn get_summary(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let Some(dataset) = state.dataset() else {
        return super::no_dataset();
    };
    let summary = aggregate(&dataset.records);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "datasetId": dataset.id,
            "totalRecords": summary.total_records,
            "distinctProducts": summary.distinct_products,
            "minDate": summary.min_date,
            "maxDate": summary.max_date,
            "droppedRecords": dataset.dropped,
        })),
    )
}

/// GET /api/dashboard/products — (product, count) pairs, descending count.
async fn get_products(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let Some(dataset) = state.dataset() else {
        return super::no_dataset();
    };
    let summary = aggregate(&dataset.records);

    (
        StatusCode::OK,
        Json(serde_json::json!({ "products": summary.by_product })),
    )
}

/// GET /api/dashboard/hours — 24 zero-filled hour buckets.
async fn get_hours(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let Some(dataset) = state.dataset() else {
        return super::no_dataset();
    };
    let summary = aggregate(&dataset.records);

    (
        StatusCode::OK,
        Json(serde_json::json!({ "hours": summary.by_hour })),
    )
}

/// GET /api/dashboard/weekdays — 7 buckets, Monday through Sunday.
async fn get_weekdays(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let Some(dataset) = state.dataset() else {
        return super::no_dataset();
    };
    let summary = aggregate(&dataset.records);

    (
        StatusCode::OK,
        Json(serde_json::json!({ "weekdays": summary.by_weekday })),
    )
}

/// GET /api/dashboard/corpus — title corpus and top word frequencies for the
/// browser-side word-cloud renderer. Empty corpus yields empty tables, not
/// an error.
async fn get_corpus(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let Some(dataset) = state.dataset() else {
        return super::no_dataset();
    };

    let corpus = build_corpus(&dataset.records);
    let words = word_frequencies(&corpus, state.config.corpus_top_words);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "corpus": corpus,
            "words": words,
        })),
    )
}
