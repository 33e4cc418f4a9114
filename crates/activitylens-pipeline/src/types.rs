//! Record types shared across pipeline stages.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// One raw entry from the export, with defaults substituted for
/// missing fields. Immutable after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Raw timestamp string, `None` when the entry had no `time` field.
    pub time: Option<String>,
    /// Originating service label (`header` in the export), "Unknown" if absent.
    pub product: String,
    /// Entry title, empty if absent.
    pub title: String,
    /// Entry URL (`titleUrl` in the export), empty if absent.
    pub url: String,
}

/// A record whose timestamp parsed, augmented with calendar fields
/// derived from the instant. Every record past the normalizer has
/// all of these populated.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedRecord {
    pub product: String,
    pub title: String,
    pub url: String,
    pub timestamp: DateTime<Utc>,
    /// UTC calendar date of the instant.
    pub date: NaiveDate,
    /// Hour of day, 0–23.
    pub hour: u32,
    /// Day of week the instant falls on.
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
}

fn serialize_weekday<S>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(weekday_name(*weekday))
}

/// Full English weekday name, matching the dashboard's display labels.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
