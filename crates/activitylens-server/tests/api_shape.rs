//! API shape tests — validates that the response shapes the route handlers
//! build match what the dashboard frontend expects, and that a full export
//! file round-trips through the pipeline the way the upload handler runs it.

use activitylens_pipeline::{aggregate, build_corpus, extract_records, normalize, word_frequencies};

/// Verify the upload response shape:
/// { datasetId, totalRecords, droppedRecords, uploadedAt }
#[test]
fn test_upload_response_shape() {
    let response = serde_json::json!({
        "datasetId": "6f9619ff-8b86-d011-b42d-00c04fc964ff",
        "totalRecords": 2,
        "droppedRecords": 1,
        "uploadedAt": "2024-01-01T10:00:00+00:00",
    });

    assert!(response["datasetId"].is_string());
    assert!(response["totalRecords"].is_number());
    assert!(response["droppedRecords"].is_number());
    assert!(response["uploadedAt"].is_string());
}

/// Verify the summary response shape and that null date markers survive
/// serialization for an empty dataset.
#[test]
fn test_summary_response_shape() {
    let summary = aggregate(&[]);
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["totalRecords"], 0);
    assert_eq!(json["distinctProducts"], 0);
    assert!(json["minDate"].is_null());
    assert!(json["maxDate"].is_null());
    assert_eq!(json["byHour"].as_array().unwrap().len(), 24);
    assert_eq!(json["byWeekday"].as_array().unwrap().len(), 7);
    assert!(json["byProduct"].as_array().unwrap().is_empty());
}

/// Verify the chart table shapes: products carry {product, count}, hours
/// carry {hour, count}, weekdays carry {weekday, count} with display names.
#[test]
fn test_chart_table_shapes() {
    let doc = serde_json::json!([
        {"time": "2024-01-01T10:00:00Z", "header": "Search", "title": "cats"},
        {"time": "2024-01-01T10:30:00Z", "header": "YouTube", "title": "dogs"},
    ]);
    let records = normalize(extract_records(&doc).unwrap()).records;
    let summary = aggregate(&records);
    let json = serde_json::to_value(&summary).unwrap();

    let product = &json["byProduct"][0];
    assert!(product["product"].is_string());
    assert!(product["count"].is_number());

    let hour = &json["byHour"][10];
    assert_eq!(hour["hour"], 10);
    assert_eq!(hour["count"], 2);

    let monday = &json["byWeekday"][0];
    assert_eq!(monday["weekday"], "Monday");
    assert_eq!(monday["count"], 2);
}

/// Verify the corpus response shape: corpus text plus {word, count} rows.
#[test]
fn test_corpus_response_shape() {
    let doc = serde_json::json!([
        {"time": "2024-01-01T10:00:00Z", "header": "Search", "title": "rust tutorial"},
        {"time": "2024-01-01T11:00:00Z", "header": "Search", "title": "rust book"},
    ]);
    let records = normalize(extract_records(&doc).unwrap()).records;
    let corpus = build_corpus(&records);
    let words = word_frequencies(&corpus, 100);

    assert_eq!(corpus, "rust tutorial rust book");
    let json = serde_json::to_value(&words).unwrap();
    assert_eq!(json[0]["word"], "rust");
    assert_eq!(json[0]["count"], 2);
}

/// Verify the credential status shape never carries the secret.
#[test]
fn test_credential_response_has_no_secret() {
    let secret = "sk-test-credential";
    let response = serde_json::json!({ "configured": true });

    assert!(response["configured"].is_boolean());
    assert!(!serde_json::to_string(&response).unwrap().contains(secret));
}

/// Verify insight response shapes for the three outcomes the frontend
/// distinguishes: success, skipped (no credential), and failure.
#[test]
fn test_insight_response_shapes() {
    let success = serde_json::json!({
        "skipped": false,
        "model": "gpt-4o-mini",
        "text": "[{\"activity\": \"cats\", \"category\": \"Entertainment\"}]",
    });
    assert!(success["text"].is_string());
    assert_eq!(success["model"], "gpt-4o-mini");

    let skipped = serde_json::json!({ "skipped": true });
    assert_eq!(skipped["skipped"], true);

    let failure = serde_json::json!({
        "skipped": false,
        "errorKind": "api",
        "error": "API error 401 Unauthorized: invalid key",
    });
    assert!(failure["errorKind"].is_string());
    assert!(failure["error"].is_string());
}

/// Round-trip a small export file from disk through the same pipeline the
/// upload handler runs: parse, extract, normalize, aggregate.
#[test]
fn test_export_file_round_trip() {
    let export = serde_json::json!([
        {"time": "2024-01-01T10:00:00Z", "header": "Search", "title": "cats",
         "titleUrl": "https://example.com/cats"},
        {"time": "2024-01-01T10:00:00Z", "header": "Search", "title": "dogs"},
        {"time": "bad-date", "header": "Search", "title": "x"},
        {"header": "Maps"},
    ]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("MyActivity.json");
    std::fs::write(&path, serde_json::to_vec(&export).unwrap()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let outcome = normalize(extract_records(&doc).unwrap());

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.dropped, 2);

    let summary = aggregate(&outcome.records);
    assert_eq!(summary.total_records, 2);
    assert_eq!(summary.distinct_products, 1);
    assert_eq!(summary.min_date.unwrap().to_string(), "2024-01-01");
    assert_eq!(summary.max_date.unwrap().to_string(), "2024-01-01");
}

/// A document that is not a sequence of entries fails extraction — the only
/// condition that aborts a whole upload.
#[test]
fn test_malformed_document_aborts_upload() {
    let doc = serde_json::json!({"Browser History": []});
    assert!(extract_records(&doc).is_err());
}
