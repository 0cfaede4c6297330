//! Window configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use speechrate_transcript::{BreakLabels, LineFormat};

use crate::error::{RateError, Result};

/// Parameters for a speech rate measurement.
///
/// ```json
/// { "span": 5, "break_labels": ["<SIL>", "<HES-"], "line_format": "buckeye" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Maximum number of tokens on each side of the reference token.
    pub span: usize,
    #[serde(default)]
    pub break_labels: BreakLabels,
    #[serde(default)]
    pub line_format: LineFormat,
}

impl RateConfig {
    pub fn new(span: usize) -> Self {
        Self {
            span,
            break_labels: BreakLabels::default(),
            line_format: LineFormat::default(),
        }
    }

    pub fn with_break_labels(mut self, break_labels: BreakLabels) -> Self {
        self.break_labels = break_labels;
        self
    }

    pub fn with_line_format(mut self, line_format: LineFormat) -> Self {
        self.line_format = line_format;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RateError::ReadConfig {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            span = config.span,
            break_labels = config.break_labels.len(),
            "config_loaded"
        );
        Ok(config)
    }
}
