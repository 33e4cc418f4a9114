//! ActivityLens pipeline: export JSON → records → derived fields → aggregates.
//!
//! The stages run in order on every upload and share no state between runs:
//! [`extract`] turns the loosely-typed export into [`ActivityRecord`]s,
//! [`normalize`] parses timestamps and derives calendar fields, and
//! [`aggregate`] / [`corpus`] compute what the dashboard renders.

pub mod aggregate;
pub mod corpus;
pub mod extract;
pub mod normalize;
pub mod types;

pub use aggregate::{aggregate, ActivitySummary};
pub use corpus::{build_corpus, word_frequencies};
pub use extract::extract_records;
pub use normalize::{normalize, NormalizeOutcome};
pub use types::{ActivityRecord, NormalizedRecord};
