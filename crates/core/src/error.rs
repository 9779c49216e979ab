//! Error types for the Roamer domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error enum. A lookup that finds no
//! location is not an error at all: the engine answers it with guidance text.

use thiserror::Error;

/// Failure to load one data source. Fatal to that source only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source identifier itself was refused (absolute path, URL, hidden file...).
    #[error("{reason}")]
    Rejected { reason: String },

    #[error("error opening file: {0}")]
    Open(String),

    #[error("error reading CSV: {0}")]
    Read(String),

    /// Fewer than a header row plus one data row.
    #[error("CSV file is empty or missing data rows")]
    Empty,

    #[error("invalid data at row {row}: wrong number of fields (expected {expected}, found {found})")]
    FieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A field carried content the validator refuses.
    #[error("invalid data at row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
}

impl SourceError {
    /// Whether the source was structurally malformed rather than hostile or unreadable.
    pub fn is_malformed(&self) -> bool {
        matches!(self, SourceError::Empty | SourceError::FieldCount { .. })
    }
}

#[derive(Debug, Clone, Error)]
pub enum AugmentError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by augmenter, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Augmentation timed out after {0}s")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Augmenter returned an empty reply")]
    EmptyReply,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Transport connection lost: {0}")]
    ConnectionLost(String),

    #[error("Answer delivery failed: {0}")]
    DeliveryFailed(String),
}
