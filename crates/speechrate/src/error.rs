use std::path::PathBuf;

use speechrate_transcript::TranscriptError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RateError>;

#[derive(Debug, Error)]
pub enum RateError {
    /// A line inside a context window could not be parsed.
    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    /// Reference position outside the annotation body `start..end`.
    #[error("reference position {position} is outside the annotation body {start}..{end}")]
    Index {
        position: usize,
        start: usize,
        end: usize,
    },

    /// Failed to read config file.
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid JSON or misses a field.
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
