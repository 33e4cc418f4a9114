//! Insight request/response types.

use serde::Serialize;
use thiserror::Error;

/// What went wrong with an outbound insight call. Scoped to the one
/// operation that failed; other dashboard sections are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightErrorKind {
    /// The request never completed (connect, DNS, TLS, body read).
    Transport,
    /// The service answered with a non-success status.
    Api,
}

#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct InsightError {
    pub kind: InsightErrorKind,
    pub message: String,
}

impl InsightError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: InsightErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn api(status: reqwest::StatusCode, body: &str) -> Self {
        Self {
            kind: InsightErrorKind::Api,
            message: format!("API error {}: {}", status, body),
        }
    }

    /// A success status whose body does not carry the expected envelope.
    pub fn malformed(detail: &str) -> Self {
        Self {
            kind: InsightErrorKind::Api,
            message: format!("Malformed API response: {}", detail),
        }
    }
}

/// Role-tagged message in an outbound request.
#[derive(Debug, Clone, Serialize)]
pub struct InsightMessage {
    pub role: &'static str,
    pub content: String,
}
