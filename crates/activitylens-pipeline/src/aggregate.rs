//! Grouped counts and scalar summary over normalized records.

use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::types::{weekday_name, NormalizedRecord};

/// Fixed weekday display order for the weekday histogram.
const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One (product, count) row, sorted by descending count for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCount {
    pub product: String,
    pub count: u64,
}

/// One hour-of-day bucket, always present for hours 0–23.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourBucket {
    pub hour: u32,
    pub count: u64,
}

/// One weekday bucket, always present Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayBucket {
    pub weekday: &'static str,
    pub count: u64,
}

/// Everything the dashboard charts are built from. Recomputed in full on
/// every upload; identical inputs always yield identical output.
#[derive(Debug, Clone, Serialize)]
pub struct ActivitySummary {
    #[serde(rename = "totalRecords")]
    pub total_records: u64,
    #[serde(rename = "distinctProducts")]
    pub distinct_products: u64,
    /// `None` when the dataset holds no valid records.
    #[serde(rename = "minDate")]
    pub min_date: Option<NaiveDate>,
    #[serde(rename = "maxDate")]
    pub max_date: Option<NaiveDate>,
    #[serde(rename = "byProduct")]
    pub by_product: Vec<ProductCount>,
    #[serde(rename = "byHour")]
    pub by_hour: Vec<HourBucket>,
    #[serde(rename = "byWeekday")]
    pub by_weekday: Vec<WeekdayBucket>,
}

/// Compute all grouped counts and scalars for one record set.
pub fn aggregate(records: &[NormalizedRecord]) -> ActivitySummary {
    let mut product_counts: HashMap<&str, u64> = HashMap::new();
    let mut hours = [0u64; 24];
    let mut weekdays: HashMap<Weekday, u64> = HashMap::new();
    let mut min_date: Option<NaiveDate> = None;
    let mut max_date: Option<NaiveDate> = None;

    for record in records {
        *product_counts.entry(record.product.as_str()).or_default() += 1;
        hours[record.hour as usize % 24] += 1;
        *weekdays.entry(record.weekday).or_default() += 1;

        min_date = Some(match min_date {
            Some(d) => d.min(record.date),
            None => record.date,
        });
        max_date = Some(match max_date {
            Some(d) => d.max(record.date),
            None => record.date,
        });
    }

    let distinct_products = product_counts.len() as u64;

    let mut by_product: Vec<ProductCount> = product_counts
        .into_iter()
        .map(|(product, count)| ProductCount {
            product: product.to_string(),
            count,
        })
        .collect();
    // Descending by count, ties by name so output is deterministic.
    by_product.sort_by(|a, b| b.count.cmp(&a.count).then(a.product.cmp(&b.product)));

    let by_hour = hours
        .iter()
        .enumerate()
        .map(|(hour, &count)| HourBucket {
            hour: hour as u32,
            count,
        })
        .collect();

    let by_weekday = WEEKDAY_ORDER
        .iter()
        .map(|&day| WeekdayBucket {
            weekday: weekday_name(day),
            count: weekdays.get(&day).copied().unwrap_or(0),
        })
        .collect();

    ActivitySummary {
        total_records: records.len() as u64,
        distinct_products,
        min_date,
        max_date,
        by_product,
        by_hour,
        by_weekday,
    }
}
