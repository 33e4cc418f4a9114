//! Timestamp normalization and calendar-field derivation.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono::{Datelike, Timelike};
use tracing::debug;

use crate::types::{ActivityRecord, NormalizedRecord};

/// Result of normalizing one upload's records.
pub struct NormalizeOutcome {
    /// Records with a valid instant and derived fields, in input order.
    pub records: Vec<NormalizedRecord>,
    /// How many records were dropped for an unparsable or missing timestamp.
    pub dropped: usize,
}

/// Parse each record's timestamp and derive date, hour, and weekday.
///
/// Records whose timestamp is missing or unparsable are dropped, never
/// surfaced as errors; the tally of drops is reported so the dashboard can
/// show how many entries were excluded.
pub fn normalize(records: Vec<ActivityRecord>) -> NormalizeOutcome {
    let total = records.len();
    let mut out = Vec::with_capacity(total);

    for record in records {
        let Some(timestamp) = record.time.as_deref().and_then(parse_timestamp) else {
            continue;
        };

        out.push(NormalizedRecord {
            product: record.product,
            title: record.title,
            url: record.url,
            timestamp,
            date: timestamp.date_naive(),
            hour: timestamp.hour(),
            weekday: timestamp.weekday(),
        });
    }

    let dropped = total - out.len();
    if dropped > 0 {
        debug!("Dropped {} of {} records with unparsable timestamps", dropped, total);
    }

    NormalizeOutcome { records: out, dropped }
}

/// Tolerant timestamp parse: RFC 3339 first (what Takeout emits), then a
/// bare `YYYY-MM-DDTHH:MM:SS` assumed UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    None
}
