//! Error types for snippet construction.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning an upstream record into a snippet.
#[derive(Error, Debug)]
pub enum Error {
    /// The record has no `published` timestamp, so version and status dates
    /// cannot be derived.
    #[error("record {msid} has no published date")]
    MissingPublished {
        /// Manuscript id of the offending record.
        msid: String,
    },

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
