//! Lexicon-based sentiment with confidence and intensity.

use crate::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::signals::{SentimentDistribution, SentimentLabel, SentimentSignal};
use crate::stats::{mean, round2, sample_stddev};

/// Score one lowercased text: `(pos − neg) / (pos + neg)`, counting which
/// lexicon words occur in it. `0.0` when no lexicon word hits.
#[allow(clippy::cast_precision_loss)]
fn text_score(lower: &str) -> f64 {
    let pos = POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
    let neg = NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
    if pos + neg == 0 {
        0.0
    } else {
        (pos as f64 - neg as f64) / (pos + neg) as f64
    }
}

/// Aggregate sentiment over a batch of texts.
///
/// Per-text scores are averaged; the label is decided at ±0.1 on the mean.
/// Confidence is `1 − stddev(scores)` (sample stddev, clamped to `[0,1]`)
/// so a consistent batch scores higher than a polarized one. Intensity is
/// the absolute mean. Empty input yields the neutral sentinel.
#[must_use]
pub fn analyze_sentiment(texts: &[String]) -> SentimentSignal {
    if texts.is_empty() {
        return SentimentSignal::empty();
    }

    let scores: Vec<f64> = texts.iter().map(|t| text_score(&t.to_lowercase())).collect();

    let avg = mean(&scores);
    let label = if avg > 0.1 {
        SentimentLabel::Positive
    } else if avg < -0.1 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    let confidence = (1.0 - sample_stddev(&scores)).clamp(0.0, 1.0);

    let mut distribution = SentimentDistribution::default();
    for s in &scores {
        if *s > 0.1 {
            distribution.positive += 1;
        } else if *s < -0.1 {
            distribution.negative += 1;
        } else {
            distribution.neutral += 1;
        }
    }

    SentimentSignal {
        label,
        confidence: round2(confidence),
        intensity: round2(avg.abs()),
        score: round2(avg),
        distribution,
    }
}
