use thiserror::Error;

/// Result type alias for holiday operations.
pub type Result<T> = std::result::Result<T, HolidayError>;

/// Errors that can occur when building or decoding holiday data.
#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Invalid environment variable name: {0}")]
    InvalidRegionKey(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
