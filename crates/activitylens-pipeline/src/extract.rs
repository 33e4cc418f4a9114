//! Record extraction from the raw export document.
//!
//! Takeout exports are loosely typed: any of the fields we care about can be
//! missing, and extra fields are common. Presence is validated, shape is not —
//! a non-string `header` counts as absent and gets the default.

use serde_json::Value;

use crate::types::ActivityRecord;
use activitylens_core::{Error, Result};

/// Product label used when an entry has no `header`.
pub const UNKNOWN_PRODUCT: &str = "Unknown";

/// Convert the export document into activity records.
///
/// The top level must be an array of objects; anything else fails the whole
/// run with [`Error::Parse`]. Individual entries never fail: missing fields
/// get defaults, and a missing `time` stays `None` for the normalizer to drop.
pub fn extract_records(doc: &Value) -> Result<Vec<ActivityRecord>> {
    let entries = doc
        .as_array()
        .ok_or_else(|| Error::Parse("expected a top-level array of entries".into()))?;

    let mut records = Vec::with_capacity(entries.len());

    for (idx, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            return Err(Error::Parse(format!(
                "entry {} is not a key-value object",
                idx
            )));
        }

        records.push(ActivityRecord {
            time: entry
                .get("time")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            product: entry
                .get("header")
                .and_then(|v| v.as_str())
                .unwrap_or(UNKNOWN_PRODUCT)
                .to_string(),
            title: entry
                .get("title")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            url: entry
                .get("titleUrl")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        });
    }

    Ok(records)
}
