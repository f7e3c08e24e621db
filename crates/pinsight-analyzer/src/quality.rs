//! Content quality heuristics.

use std::collections::HashSet;

use crate::signals::{QualityIndicators, QualitySignal, ReadabilityTier};
use crate::stats::{round2, sample_stddev};

/// Assess batch-level content quality from length and vocabulary.
///
/// Readability is `good` when the average text length sits strictly
/// between 50 and 200 characters. Richness is unique whitespace words
/// per character. The score is `0.7` (good) or `0.4` plus
/// `min(richness × 10, 0.3)` — the formula can exceed `1.0` for short,
/// vocabulary-dense batches and is intentionally not clamped.
#[must_use]
pub fn assess_content_quality(texts: &[String]) -> QualitySignal {
    if texts.is_empty() {
        return QualitySignal::empty();
    }

    let lengths: Vec<usize> = texts.iter().map(|t| t.chars().count()).collect();
    let total_chars: usize = lengths.iter().sum();

    #[allow(clippy::cast_precision_loss)]
    let average_length = total_chars as f64 / texts.len() as f64;

    #[allow(clippy::cast_precision_loss)]
    let length_values: Vec<f64> = lengths.iter().map(|l| *l as f64).collect();
    let length_variance = sample_stddev(&length_values);

    let readability = if average_length > 50.0 && average_length < 200.0 {
        ReadabilityTier::Good
    } else {
        ReadabilityTier::NeedsImprovement
    };

    let combined = texts.join(" ").to_lowercase();
    let unique_words: HashSet<&str> = combined.split_whitespace().collect();
    #[allow(clippy::cast_precision_loss)]
    let richness = if total_chars > 0 {
        unique_words.len() as f64 / total_chars as f64
    } else {
        0.0
    };

    let base = if readability == ReadabilityTier::Good {
        0.7
    } else {
        0.4
    };
    let score = round2(base + (richness * 10.0).min(0.3));

    QualitySignal {
        score,
        indicators: QualityIndicators {
            average_length,
            length_variance,
            readability,
            richness,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn empty_batch_scores_zero() {
        let signal = assess_content_quality(&[]);
        assert_eq!(signal.score, 0.0);
    }

    #[test]
    fn mid_length_text_reads_good() {
        // 80 chars: inside the (50, 200) readability band.
        let text = "a".repeat(40) + " " + &"b".repeat(39);
        let signal = assess_content_quality(&[text]);
        assert_eq!(signal.indicators.readability, ReadabilityTier::Good);
        assert!(signal.score >= 0.7);
    }

    #[test]
    fn short_text_needs_improvement() {
        let signal = assess_content_quality(&texts(&["tiny"]));
        assert_eq!(
            signal.indicators.readability,
            ReadabilityTier::NeedsImprovement
        );
        assert!(signal.score < 0.7 + 0.3 + f64::EPSILON);
    }

    #[test]
    fn readability_band_is_exclusive() {
        let at_fifty = "x".repeat(50);
        let signal = assess_content_quality(&[at_fifty]);
        assert_eq!(
            signal.indicators.readability,
            ReadabilityTier::NeedsImprovement
        );
    }

    #[test]
    fn richness_contribution_caps_at_point_three() {
        // Few chars, all unique words: richness × 10 far exceeds 0.3.
        let signal = assess_content_quality(&texts(&["ab cd ef"]));
        assert!(signal.indicators.richness * 10.0 > 0.3);
        assert_eq!(signal.score, 0.7);
    }

    #[test]
    fn score_reaches_ceiling_at_richness_cap() {
        // Good readability plus capped richness lands at exactly 1.0; the
        // formula has no clamp beyond the richness cap itself.
        let words: Vec<String> = (0..20).map(|i| format!("word{i:02}")).collect();
        let text = words.join(" "); // 20 unique 6-char words, 139 chars
        let signal = assess_content_quality(&[text]);
        assert_eq!(signal.indicators.readability, ReadabilityTier::Good);
        assert_eq!(signal.score, 1.0);
    }

    #[test]
    fn variance_zero_for_single_text() {
        let signal = assess_content_quality(&texts(&["only one"]));
        assert_eq!(signal.indicators.length_variance, 0.0);
    }

    #[test]
    fn variance_positive_for_uneven_lengths() {
        let signal = assess_content_quality(&texts(&["ab", &"z".repeat(100)]));
        assert!(signal.indicators.length_variance > 0.0);
    }
}
