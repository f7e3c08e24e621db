//! Small numeric helpers shared across analysis dimensions.
//!
//! Every aggregation here fails soft: zero-length input yields `0.0`
//! rather than a division error.

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = values.len() as f64;
    values.iter().sum::<f64>() / denom
}

/// Sample standard deviation (n−1 denominator); `0.0` for fewer than
/// two values.
pub(crate) fn sample_stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    #[allow(clippy::cast_precision_loss)]
    let denom = (values.len() - 1) as f64;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / denom;
    variance.sqrt()
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Truncate `text` to `max_chars` characters, appending `...` when
/// anything was cut. Char-based, so multi-byte input never splits.
pub(crate) fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let mut cut: String = text.chars().take(max_chars).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_of_values() {
        assert!((mean(&[1.0, 2.0, 3.0]) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stddev_of_single_value_is_zero() {
        assert_eq!(sample_stddev(&[5.0]), 0.0);
    }

    #[test]
    fn stddev_uses_sample_denominator() {
        // [1, 3]: mean 2, sample variance ((1)^2 + (1)^2) / 1 = 2
        let sd = sample_stddev(&[1.0, 3.0]);
        assert!((sd - 2.0_f64.sqrt()).abs() < 1e-12, "got {sd}");
    }

    #[test]
    fn excerpt_short_text_unchanged() {
        assert_eq!(excerpt("short", 100), "short");
    }

    #[test]
    fn excerpt_long_text_gets_ellipsis() {
        let long = "x".repeat(120);
        let e = excerpt(&long, 100);
        assert_eq!(e.chars().count(), 103);
        assert!(e.ends_with("..."));
    }

    #[test]
    fn excerpt_exact_boundary_unchanged() {
        let text = "y".repeat(100);
        assert_eq!(excerpt(&text, 100), text);
    }

    #[test]
    fn rounding_helpers() {
        assert!((round2(0.854) - 0.85).abs() < f64::EPSILON);
        assert!((round1(12.34) - 12.3).abs() < f64::EPSILON);
    }
}
