//! Prompt templates and record sampling for the two insight operations.

use activitylens_pipeline::NormalizedRecord;

/// How many titled records the categorize prompt samples.
pub const CATEGORIZE_SAMPLE: usize = 20;
/// How many latest-day records the summary prompt embeds.
pub const SUMMARY_SAMPLE: usize = 50;

pub const CATEGORIZE_PERSONA: &str = "You are a helpful assistant.";
pub const SUMMARY_PERSONA: &str = "You are a personal activity analyst.";

/// First `CATEGORIZE_SAMPLE` records with a non-empty title, in record order.
pub fn categorize_sample(records: &[NormalizedRecord]) -> Vec<&str> {
    records
        .iter()
        .filter(|r| !r.title.is_empty())
        .take(CATEGORIZE_SAMPLE)
        .map(|r| r.title.as_str())
        .collect()
}

/// Up to `SUMMARY_SAMPLE` records on the most recent date in the dataset.
pub fn latest_day_sample(records: &[NormalizedRecord]) -> Vec<&NormalizedRecord> {
    let Some(max_date) = records.iter().map(|r| r.date).max() else {
        return Vec::new();
    };
    records
        .iter()
        .filter(|r| r.date == max_date)
        .take(SUMMARY_SAMPLE)
        .collect()
}

/// Fixed categorization instruction around the sampled titles.
pub fn build_categorize_prompt(titles: &[&str]) -> String {
    let mut prompt = String::from(
        "Categorize the following user activities into one of:\n\
         - Learning\n\
         - Work/Productivity\n\
         - Entertainment\n\
         - Social Media\n\
         Activities:\n",
    );
    for title in titles {
        prompt.push_str("- ");
        prompt.push_str(title);
        prompt.push('\n');
    }
    prompt.push_str("Return results as a JSON list of {activity, category}.");
    prompt
}

/// Fixed summary instruction around the latest day's (product, title) rows.
pub fn build_summary_prompt(records: &[&NormalizedRecord]) -> String {
    let mut prompt = String::from("Summarize this activity data:\n");
    for record in records {
        prompt.push_str(&record.product);
        prompt.push_str(" | ");
        prompt.push_str(&record.title);
        prompt.push('\n');
    }
    prompt.push_str("Write it in simple English.");
    prompt
}
