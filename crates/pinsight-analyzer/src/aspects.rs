//! Per-aspect sentiment: sentiment scored over the subset of texts that
//! mention each product aspect.

use std::collections::BTreeMap;

use crate::lexicon::aspect_keywords;
use crate::sentiment::analyze_sentiment;
use crate::signals::{Aspect, AspectSentiment};

/// Score sentiment for each of the seven product aspects.
///
/// An aspect is present in the result only when at least one text contains
/// one of its keywords; the sentiment for that aspect is computed over the
/// matching subset alone.
#[must_use]
pub fn analyze_aspect_sentiment(texts: &[String]) -> BTreeMap<Aspect, AspectSentiment> {
    let mut out = BTreeMap::new();

    for aspect in Aspect::ALL {
        let keywords = aspect_keywords(aspect);
        let matching: Vec<String> = texts
            .iter()
            .filter(|t| {
                let lower = t.to_lowercase();
                keywords.iter().any(|kw| lower.contains(kw))
            })
            .cloned()
            .collect();

        if matching.is_empty() {
            continue;
        }

        let sentiment = analyze_sentiment(&matching);
        out.insert(
            aspect,
            AspectSentiment {
                sentiment: sentiment.label,
                score: sentiment.score,
                mentions: matching.len(),
                confidence: sentiment.confidence,
            },
        );
    }

    out
}
