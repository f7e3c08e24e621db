//! Emotion classification beyond positive/negative sentiment.

use std::collections::BTreeMap;

use crate::lexicon::emotion_keywords;
use crate::signals::{Emotion, EmotionSignal};
use crate::stats::round2;

/// Classify a batch of texts over the six emotion categories.
///
/// Per text, each category scores the number of its keywords present;
/// category totals are normalized by the grand total so the distribution
/// sums to ≤1. Dominant holds up to three non-zero categories, strongest
/// first (ties keep category order). Mixed flags more than one category
/// above weight 0.1.
#[must_use]
pub fn analyze_emotions(texts: &[String]) -> EmotionSignal {
    let mut scores: BTreeMap<Emotion, usize> = Emotion::ALL.iter().map(|e| (*e, 0)).collect();

    for text in texts {
        let lower = text.to_lowercase();
        for emotion in Emotion::ALL {
            let hits = emotion_keywords(emotion)
                .iter()
                .filter(|kw| lower.contains(*kw))
                .count();
            *scores.entry(emotion).or_insert(0) += hits;
        }
    }

    let total: usize = scores.values().sum();

    #[allow(clippy::cast_precision_loss)]
    let distribution: BTreeMap<Emotion, f64> = Emotion::ALL
        .iter()
        .map(|e| {
            let weight = if total > 0 {
                round2(scores[e] as f64 / total as f64)
            } else {
                0.0
            };
            (*e, weight)
        })
        .collect();

    // Stable sort keeps category order on equal weights.
    let mut ranked: Vec<(Emotion, f64)> = Emotion::ALL.iter().map(|e| (*e, distribution[e])).collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let dominant: Vec<Emotion> = ranked
        .iter()
        .take(3)
        .filter(|(_, w)| *w > 0.0)
        .map(|(e, _)| *e)
        .collect();

    let intensity = distribution.values().copied().fold(0.0, f64::max);
    let mixed = distribution.values().filter(|w| **w > 0.1).count() > 1;

    EmotionSignal {
        distribution,
        dominant,
        intensity,
        mixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn empty_batch_has_zero_distribution() {
        let signal = analyze_emotions(&[]);
        assert!(signal.distribution.values().all(|w| *w == 0.0));
        assert!(signal.dominant.is_empty());
        assert!(!signal.mixed);
    }

    #[test]
    fn joy_keywords_dominate() {
        let signal = analyze_emotions(&texts(&["so happy and excited, amazing product"]));
        assert_eq!(signal.dominant.first(), Some(&Emotion::Joy));
        assert!(signal.distribution[&Emotion::Joy] > 0.5);
    }

    #[test]
    fn dominant_excludes_zero_weight_categories() {
        let signal = analyze_emotions(&texts(&["happy"]));
        assert_eq!(signal.dominant, vec![Emotion::Joy]);
    }

    #[test]
    fn mixed_when_two_categories_exceed_threshold() {
        let signal = analyze_emotions(&texts(&["happy but worried and scared"]));
        assert!(signal.mixed);
    }

    #[test]
    fn single_category_is_not_mixed() {
        let signal = analyze_emotions(&texts(&["happy excited wonderful"]));
        assert!(!signal.mixed);
    }

    #[test]
    fn distribution_sums_to_at_most_one() {
        let signal = analyze_emotions(&texts(&[
            "happy and reliable",
            "angry about the terrible unit",
            "unexpected surprise, wow",
        ]));
        let sum: f64 = signal.distribution.values().sum();
        assert!(sum <= 1.01, "distribution sum {sum} exceeds 1");
    }

    #[test]
    fn intensity_is_max_weight() {
        let signal = analyze_emotions(&texts(&["happy happy person"]));
        let max = signal.distribution.values().copied().fold(0.0, f64::max);
        assert_eq!(signal.intensity, max);
    }
}
