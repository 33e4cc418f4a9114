//! AI insights over the activity dataset.
//!
//! Two independent, stateless operations against the OpenAI Chat Completions
//! API: categorize a sample of titles, and summarize the most recent day.
//! Each is a single round trip with no conversation history; failures are
//! returned as values and never abort the rest of the dashboard.

pub mod client;
pub mod prompts;
pub mod types;

pub use client::{categorize, summarize, test_api_key, INSIGHT_MODEL};
pub use types::{InsightError, InsightErrorKind};
