//! Business intent classification.

use std::collections::BTreeMap;

use crate::lexicon::intent_keywords;
use crate::signals::{Intent, IntentSignal};
use crate::stats::round2;

/// Classify the primary business intent of a batch.
///
/// Category scores are keyword-presence counts summed over all texts and
/// normalized by the grand total. The primary intent is the arg-max of
/// the normalized distribution (first category wins ties); no hits at all
/// yields `Intent::Unknown` with zero confidence. Mixed flags more than
/// one category above 0.2.
#[must_use]
pub fn analyze_intent(texts: &[String]) -> IntentSignal {
    let mut scores: BTreeMap<Intent, usize> =
        Intent::CATEGORIES.iter().map(|i| (*i, 0)).collect();

    for text in texts {
        let lower = text.to_lowercase();
        for intent in Intent::CATEGORIES {
            let hits = intent_keywords(intent)
                .iter()
                .filter(|kw| lower.contains(*kw))
                .count();
            *scores.entry(intent).or_insert(0) += hits;
        }
    }

    let total: usize = scores.values().sum();
    if total == 0 {
        return IntentSignal::empty();
    }

    #[allow(clippy::cast_precision_loss)]
    let distribution: BTreeMap<Intent, f64> = Intent::CATEGORIES
        .iter()
        .map(|i| (*i, round2(scores[i] as f64 / total as f64)))
        .collect();

    let mut primary = Intent::Unknown;
    let mut best = f64::MIN;
    for intent in Intent::CATEGORIES {
        let weight = distribution[&intent];
        if weight > best {
            best = weight;
            primary = intent;
        }
    }

    let mixed = distribution.values().filter(|w| **w > 0.2).count() > 1;

    IntentSignal {
        primary,
        confidence: best,
        distribution,
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
    fn empty_batch_is_unknown() {
        let signal = analyze_intent(&[]);
        assert_eq!(signal.primary, Intent::Unknown);
        assert_eq!(signal.confidence, 0.0);
        assert!(!signal.mixed);
    }

    #[test]
    fn no_keyword_hits_is_unknown() {
        let signal = analyze_intent(&texts(&["the sky is blue today"]));
        assert_eq!(signal.primary, Intent::Unknown);
        assert_eq!(signal.confidence, 0.0);
    }

    #[test]
    fn complaint_keywords_classify_as_complaint() {
        let signal = analyze_intent(&texts(&[
            "this unit arrived broken",
            "serious problem, requesting a refund",
        ]));
        assert_eq!(signal.primary, Intent::Complaint);
        assert!(signal.confidence > 0.5);
    }

    #[test]
    fn feature_request_keywords_classify_as_feature_request() {
        let signal = analyze_intent(&texts(&["i wish this had a dark mode, my suggestion"]));
        assert_eq!(signal.primary, Intent::FeatureRequest);
    }

    #[test]
    fn mixed_when_two_categories_exceed_threshold() {
        let signal = analyze_intent(&texts(&["want to buy", "but there is a problem and error"]));
        assert!(signal.mixed);
    }

    #[test]
    fn distribution_sums_to_about_one() {
        let signal = analyze_intent(&texts(&["want to purchase", "please help, question"]));
        let sum: f64 = signal.distribution.values().sum();
        assert!((sum - 1.0).abs() < 0.05, "distribution sum was {sum}");
    }
}
