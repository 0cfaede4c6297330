//! Local speech rate for tokens of a time-aligned transcript.
//!
//! The rate of a reference token is estimated from the tokens around it:
//! [`ContextExtractor`] collects the temporal distances of nearby tokens on
//! each side, bounded by pauses, noise and other break labels, and
//! [`speech_rate`] turns them into the duration per token.
//!
//! # Example
//!
//! ```ignore
//! use speechrate::{measure, RateConfig};
//!
//! let lines = ["0.10 <SIL>", "0.50 the", "0.90 cat", "1.30 sat", "1.80 <SIL>"];
//! let rate = measure(&lines, 3, &RateConfig::new(5))?;
//! ```

mod config;
mod context;
mod error;
mod rate;

pub use config::RateConfig;
pub use context::{extract_context, ContextExtractor, ContextWindows};
pub use error::{RateError, Result};
pub use rate::speech_rate;
pub use speechrate_transcript::{BreakLabels, LineFormat, Token, DEFAULT_BREAK_LABELS};

/// Speech rate of the token at `ref_pos`, or `None` when both context
/// windows are empty.
pub fn measure<S: AsRef<str>>(
    lines: &[S],
    ref_pos: usize,
    config: &RateConfig,
) -> Result<Option<f64>> {
    let windows = ContextExtractor::from_config(config).extract(lines, ref_pos, config.span)?;
    Ok(windows.rate())
}
