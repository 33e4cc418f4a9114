//! Error types for ActivityLens.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The uploaded document is not a sequence of key-value entries.
    /// This is the only condition that aborts a whole pipeline run.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No dataset loaded: {0}")]
    NoDataset(String),
}

pub type Result<T> = std::result::Result<T, Error>;
