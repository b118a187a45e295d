//! Publisher error types.

use thiserror::Error;

/// Result type alias for the publisher.
pub type Result<T> = std::result::Result<T, PublishError>;

/// Errors that can occur while publishing.
///
/// Diagnostics printed by the provider CLI are not errors here: they are
/// relayed verbatim and only become `CommandFailed` when the caller opts in.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Holiday data error: {0}")]
    Holiday(#[from] holidays_core::HolidayError),

    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Command exited with {status}")]
    CommandFailed { status: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
