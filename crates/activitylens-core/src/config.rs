//! Server configuration.

use serde::{Deserialize, Serialize};

/// Default HTTP port when `PORT` is not set.
const DEFAULT_PORT: u16 = 3020;

/// Top-level ActivityLens configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server port.
    pub port: u16,
    /// Maximum rows returned by the raw-record preview.
    pub preview_limit: usize,
    /// How many distinct words the corpus frequency table reports.
    pub corpus_top_words: usize,
}

impl AppConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            preview_limit: 100,
            corpus_top_words: 100,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            preview_limit: 100,
            corpus_top_words: 100,
        }
    }
}
