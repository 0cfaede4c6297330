//! Error types for annotation parsing.

use thiserror::Error;

/// Result type for transcript operations.
pub type Result<T> = std::result::Result<T, TranscriptError>;

#[derive(Debug, Error)]
pub enum TranscriptError {
    /// A line could not be split into a time stamp and a label.
    #[error("malformed annotation line {position} ('{line}'): {reason}")]
    Parse {
        position: usize,
        line: String,
        reason: String,
    },
}
