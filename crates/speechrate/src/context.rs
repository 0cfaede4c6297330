//! Context window extraction around a reference token.
//!
//! The left window is anchored at the start time of the reference token,
//! which is the end time of the token right before it. The right window is
//! anchored at the end time of the reference token itself. Both windows
//! grow away from the reference token until `span` tokens are covered, the
//! recording ends, or a break label is reached.

use speechrate_transcript::{parse_line, strip_header, BreakLabels, LineFormat, Token};

use crate::config::RateConfig;
use crate::error::{RateError, Result};
use crate::rate::speech_rate;

/// Temporal distances of context tokens from the reference token, in seconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextWindows {
    /// Distances before the reference token, nearest first.
    pub left: Vec<f64>,
    /// Distances after the reference token, nearest first.
    pub right: Vec<f64>,
}

impl ContextWindows {
    /// Speech rate over both windows, `None` when both are empty.
    pub fn rate(&self) -> Option<f64> {
        speech_rate(&self.left, &self.right)
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Extracts context windows, bounded by a set of break labels.
#[derive(Debug, Clone, Default)]
pub struct ContextExtractor {
    break_labels: BreakLabels,
    line_format: LineFormat,
}

impl ContextExtractor {
    pub fn new(break_labels: BreakLabels) -> Self {
        Self {
            break_labels,
            line_format: LineFormat::default(),
        }
    }

    pub fn from_config(config: &RateConfig) -> Self {
        Self::new(config.break_labels.clone()).with_line_format(config.line_format)
    }

    pub fn with_line_format(mut self, line_format: LineFormat) -> Self {
        self.line_format = line_format;
        self
    }

    pub fn break_labels(&self) -> &BreakLabels {
        &self.break_labels
    }

    /// Extract the left and right context windows of the token at `ref_pos`.
    ///
    /// `lines` may still contain the header block; `ref_pos` indexes the
    /// lines as given and is rebased past the header.
    pub fn extract<S: AsRef<str>>(
        &self,
        lines: &[S],
        ref_pos: usize,
        span: usize,
    ) -> Result<ContextWindows> {
        let (header_len, body) = strip_header(lines);

        let body_pos = ref_pos
            .checked_sub(header_len)
            .filter(|&pos| pos < body.len())
            .ok_or(RateError::Index {
                position: ref_pos,
                start: header_len,
                end: lines.len(),
            })?;

        let windows = ContextWindows {
            left: self.left_window(body, body_pos, span, header_len)?,
            right: self.right_window(body, body_pos, span, header_len)?,
        };

        if windows
            .left
            .iter()
            .chain(&windows.right)
            .any(|d| *d < 0.0)
        {
            tracing::warn!(
                position = ref_pos,
                "negative context distance, time stamps are out of order"
            );
        }

        tracing::debug!(
            position = ref_pos,
            body_pos,
            span,
            left = windows.left.len(),
            right = windows.right.len(),
            "context_extracted"
        );

        Ok(windows)
    }

    fn left_window<S: AsRef<str>>(
        &self,
        body: &[S],
        ref_pos: usize,
        span: usize,
        offset: usize,
    ) -> Result<Vec<f64>> {
        // One extra token supplies the reference start time, and the
        // earliest token only bounds the walk.
        let start = ref_pos.saturating_sub(span.saturating_add(2));
        tracing::debug!(l_start = start, ref_pos, "left_window_bounds");
        let tokens = self.parse_range(body, start, ref_pos, offset)?;

        let Some(anchor) = tokens.last() else {
            return Ok(Vec::new());
        };
        let start_time = anchor.time;

        let mut distances = Vec::with_capacity(tokens.len());
        for token in tokens.iter().skip(1).rev() {
            distances.push(start_time - token.time);
            tracing::trace!(word = %token.word, distance = start_time - token.time, "left_step");

            if let Some(label) = self.break_labels.matching(&token.word) {
                tracing::debug!(word = %token.word, label, "left_window_break");
                break;
            }
        }

        // The nearest token defines the anchor and is not part of the window.
        if !distances.is_empty() {
            distances.remove(0);
        }
        Ok(distances)
    }

    fn right_window<S: AsRef<str>>(
        &self,
        body: &[S],
        ref_pos: usize,
        span: usize,
        offset: usize,
    ) -> Result<Vec<f64>> {
        let end = ref_pos
            .saturating_add(span)
            .saturating_add(1)
            .min(body.len());
        tracing::debug!(ref_pos, r_end = end, "right_window_bounds");
        let tokens = self.parse_range(body, ref_pos, end, offset)?;

        let Some((reference, following)) = tokens.split_first() else {
            return Ok(Vec::new());
        };
        let end_time = reference.time;

        let mut distances = Vec::with_capacity(following.len());
        for token in following {
            if let Some(label) = self.break_labels.matching(&token.word) {
                tracing::debug!(word = %token.word, label, "right_window_break");
                break;
            }
            distances.push(token.time - end_time);
            tracing::trace!(word = %token.word, distance = token.time - end_time, "right_step");
        }

        Ok(distances)
    }

    fn parse_range<S: AsRef<str>>(
        &self,
        body: &[S],
        start: usize,
        end: usize,
        offset: usize,
    ) -> Result<Vec<Token>> {
        body[start..end]
            .iter()
            .enumerate()
            .map(|(i, line)| {
                parse_line(line.as_ref(), offset + start + i, self.line_format)
                    .map_err(RateError::from)
            })
            .collect()
    }
}

/// Extract context windows with the default break labels and line format.
pub fn extract_context<S: AsRef<str>>(
    lines: &[S],
    ref_pos: usize,
    span: usize,
) -> Result<ContextWindows> {
    ContextExtractor::default().extract(lines, ref_pos, span)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: &[&str] = &[
        "0.10 <SIL>",
        "0.50 the",
        "0.90 cat",
        "1.30 sat",
        "1.80 <SIL>",
    ];

    fn assert_distances(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn test_break_labels_bound_both_windows() {
        let windows = extract_context(LINES, 3, 5).unwrap();
        assert_distances(&windows.left, &[0.4]);
        assert!(windows.right.is_empty());
        assert!((windows.rate().unwrap() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_left_window_is_nearest_first() {
        let lines = ["0.2 a", "0.4 b", "0.7 c", "1.0 d", "1.5 e", "1.9 ref"];
        let windows = extract_context(&lines, 5, 10).unwrap();
        // Anchor is e (1.5); a only bounds the walk.
        assert_distances(&windows.left, &[0.5, 0.8, 1.1]);
    }

    #[test]
    fn test_span_limits_left_window() {
        let lines = ["0.2 a", "0.4 b", "0.7 c", "1.0 d", "1.5 e", "1.9 ref"];
        let windows = extract_context(&lines, 5, 2).unwrap();
        // start = 5 - 4 = 1, tokens b..e, walk e, d, c.
        assert_distances(&windows.left, &[0.5, 0.8]);
    }

    #[test]
    fn test_span_limits_right_window() {
        let lines = ["0.5 ref", "0.8 a", "1.0 b", "1.6 c", "2.0 d"];
        let windows = extract_context(&lines, 0, 2).unwrap();
        assert!(windows.left.is_empty());
        assert_distances(&windows.right, &[0.3, 0.5]);
    }

    #[test]
    fn test_left_break_distance_is_kept() {
        let lines = ["0.1 x", "0.3 a", "0.6 <NOISE>", "0.9 b", "1.2 c", "1.6 ref"];
        let windows = extract_context(&lines, 5, 10).unwrap();
        // Walk: c (0.0), b (0.3), <NOISE> (0.6) and stop.
        assert_distances(&windows.left, &[0.3, 0.6]);
    }

    #[test]
    fn test_right_break_distance_is_dropped() {
        let lines = ["0.5 ref", "0.8 a", "1.1 <laugh>", "1.5 b"];
        let windows = extract_context(&lines, 0, 10).unwrap();
        assert_distances(&windows.right, &[0.3]);
    }

    #[test]
    fn test_adjacent_break_empties_side() {
        let lines = ["0.2 a", "0.4 b", "0.6 <SIL>", "0.9 ref", "1.2 {E_TRANS}", "1.5 c"];
        let windows = extract_context(&lines, 3, 5).unwrap();
        assert!(windows.left.is_empty());
        assert!(windows.right.is_empty());
        assert_eq!(windows.rate(), None);
    }

    #[test]
    fn test_recording_boundaries() {
        let lines = ["0.3 first", "0.6 middle", "0.9 last"];
        assert!(extract_context(&lines, 0, 3).unwrap().left.is_empty());
        assert!(extract_context(&lines, 1, 3).unwrap().left.is_empty());
        assert!(extract_context(&lines, 2, 3).unwrap().right.is_empty());
    }

    #[test]
    fn test_zero_span() {
        let windows = extract_context(LINES, 2, 0).unwrap();
        assert!(windows.is_empty());
    }

    #[test]
    fn test_custom_prefix_stops_window() {
        let lines = ["0.5 ref", "0.8 a", "1.1 <hes-the>", "1.5 b"];
        let extractor = ContextExtractor::new(BreakLabels::default().with_prefix("<HES-"));
        assert!(extractor.break_labels().is_break("<HES-a>"));
        let windows = extractor.extract(&lines, 0, 10).unwrap();
        assert_distances(&windows.right, &[0.3]);

        let windows = extract_context(&lines, 0, 10).unwrap();
        assert_eq!(windows.right.len(), 3);
    }

    #[test]
    fn test_out_of_range_position() {
        let err = extract_context(LINES, 5, 3).unwrap_err();
        assert!(matches!(
            err,
            RateError::Index {
                position: 5,
                start: 0,
                end: 5
            }
        ));
    }

    #[test]
    fn test_position_inside_header() {
        let lines = ["header", "#", "0.1 a", "0.2 b"];
        let err = extract_context(&lines, 1, 3).unwrap_err();
        assert!(matches!(err, RateError::Index { start: 2, .. }));
    }

    #[test]
    fn test_parse_error_reports_original_position() {
        let lines = ["header", "#", "0.1 a", "oops b", "0.3 ref"];
        let err = extract_context(&lines, 4, 3).unwrap_err();
        match err {
            RateError::Transcript(speechrate_transcript::TranscriptError::Parse {
                position,
                ..
            }) => assert_eq!(position, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_lines_outside_window_are_ignored() {
        let lines = ["garbage", "0.1 a", "0.2 b", "0.3 c", "0.4 ref"];
        assert!(extract_context(&lines, 4, 1).is_ok());
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let first = extract_context(LINES, 2, 2).unwrap();
        let second = extract_context(LINES, 2, 2).unwrap();
        assert_eq!(first, second);
    }
}
