//! Annotation model for time-aligned speech corpus transcripts.
//!
//! A recording is a sequence of raw lines, optionally preceded by a header
//! block that ends with a line containing only `#`. Each body line starts
//! with the end time of a token followed by its label:
//!
//! ```text
//! 0.50 the
//! 0.90 cat
//! 1.30 <SIL>
//! ```

mod error;
mod labels;

pub use error::{Result, TranscriptError};
pub use labels::{BreakLabels, DEFAULT_BREAK_LABELS};

use serde::{Deserialize, Serialize};

/// Line that terminates the header block.
pub const HEADER_DELIMITER: &str = "#";

/// A parsed annotation line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// End time of the token in seconds.
    pub time: f64,
    pub word: String,
}

/// Column layout of annotation lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineFormat {
    /// `<time> <label> [columns...]`
    #[default]
    Plain,
    /// `<time> <color> <label> [columns...]`, as in Buckeye `.words` files.
    Buckeye,
}

impl LineFormat {
    /// Whitespace-separated field holding the label.
    pub fn label_field(self) -> usize {
        match self {
            LineFormat::Plain => 1,
            LineFormat::Buckeye => 2,
        }
    }
}

/// Parse one annotation line.
///
/// `position` is only used to name the line in errors.
pub fn parse_line(line: &str, position: usize, format: LineFormat) -> Result<Token> {
    let malformed = |reason: String| TranscriptError::Parse {
        position,
        line: line.trim_end().to_string(),
        reason,
    };

    let mut fields = line.split_whitespace();

    let time_field = fields
        .next()
        .ok_or_else(|| malformed("empty line".to_string()))?;
    let time: f64 = time_field
        .parse()
        .map_err(|_| malformed(format!("invalid time stamp '{time_field}'")))?;
    if !time.is_finite() {
        return Err(malformed(format!("time stamp '{time_field}' is not finite")));
    }

    let word = fields
        .nth(format.label_field() - 1)
        .ok_or_else(|| malformed("missing label field".to_string()))?;

    Ok(Token {
        time,
        word: word.to_string(),
    })
}

/// Split off the header block.
///
/// Returns the number of lines dropped together with the remaining body.
/// Without a delimiter line nothing is dropped.
pub fn strip_header<S: AsRef<str>>(lines: &[S]) -> (usize, &[S]) {
    match lines
        .iter()
        .position(|l| l.as_ref().trim() == HEADER_DELIMITER)
    {
        Some(delimiter) => {
            let header_len = delimiter + 1;
            tracing::debug!(header_len, "header_stripped");
            (header_len, &lines[header_len..])
        }
        None => (0, lines),
    }
}
