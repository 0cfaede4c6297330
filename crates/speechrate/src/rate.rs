//! Speech rate from context window distances.

/// Duration of the context windows divided by the number of tokens in them.
///
/// The largest distance on each side is that window's duration. An empty
/// side is ignored; with both sides empty the rate is undefined.
pub fn speech_rate(left: &[f64], right: &[f64]) -> Option<f64> {
    let count = left.len() + right.len();
    if count == 0 {
        return None;
    }
    let duration = window_duration(left) + window_duration(right);
    Some(duration / count as f64)
}

fn window_duration(distances: &[f64]) -> f64 {
    distances
        .iter()
        .copied()
        .reduce(f64::max)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("rate should be defined");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_both_empty_is_undefined() {
        assert_eq!(speech_rate(&[], &[]), None);
    }

    #[test]
    fn test_left_only() {
        approx(speech_rate(&[2.0, 3.0], &[]), 3.0 / 2.0);
    }

    #[test]
    fn test_right_only() {
        approx(speech_rate(&[], &[1.0, 2.0, 4.0]), 4.0 / 3.0);
    }

    #[test]
    fn test_both_sides() {
        approx(speech_rate(&[1.0, 3.0], &[2.0, 5.0]), (3.0 + 5.0) / 4.0);
    }

    #[test]
    fn test_uses_maximum_not_last() {
        approx(speech_rate(&[4.0, 1.0], &[]), 2.0);
    }
}
