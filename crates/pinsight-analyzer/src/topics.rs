//! Keyword-frequency topic extraction.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::lexicon::STOP_WORDS;
use crate::signals::{TopicFrequency, TopicSignal};

const TOP_TOPICS: usize = 10;

/// Extract the most frequent non-stop-word terms across the batch.
///
/// Tokens are alphabetic runs of length ≥3 over the lowercased
/// concatenation of all texts. The top 10 are returned by frequency,
/// ties broken by first encounter; diversity is unique/total tokens
/// after stop-word removal.
#[must_use]
pub fn extract_topics(texts: &[String]) -> TopicSignal {
    let combined = texts.join(" ").to_lowercase();
    let token_re = Regex::new(r"\b[a-zA-Z]{3,}\b").expect("valid token regex");
    let stop: HashSet<&str> = STOP_WORDS.iter().copied().collect();

    let words: Vec<&str> = token_re
        .find_iter(&combined)
        .map(|m| m.as_str())
        .filter(|w| !stop.contains(w))
        .collect();

    if words.is_empty() {
        return TopicSignal::empty();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for &word in &words {
        if !counts.contains_key(word) {
            first_seen.push(word);
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    // Stable sort: equal frequencies keep first-encounter order.
    let mut ranked = first_seen;
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));

    let top_topics: Vec<TopicFrequency> = ranked
        .iter()
        .take(TOP_TOPICS)
        .map(|w| TopicFrequency {
            topic: (*w).to_string(),
            frequency: counts[w],
        })
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let diversity = counts.len() as f64 / words.len() as f64;

    TopicSignal {
        top_topics,
        unique_count: counts.len(),
        diversity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn empty_batch_yields_empty_signal() {
        let signal = extract_topics(&[]);
        assert!(signal.top_topics.is_empty());
        assert_eq!(signal.unique_count, 0);
        assert_eq!(signal.diversity, 0.0);
    }

    #[test]
    fn stop_words_are_excluded() {
        let signal = extract_topics(&texts(&["the battery and the screen"]));
        let topics: Vec<&str> = signal.top_topics.iter().map(|t| t.topic.as_str()).collect();
        assert!(topics.contains(&"battery"));
        assert!(topics.contains(&"screen"));
        assert!(!topics.contains(&"the"));
        assert!(!topics.contains(&"and"));
    }

    #[test]
    fn short_tokens_are_excluded() {
        let signal = extract_topics(&texts(&["go up me ok battery"]));
        let topics: Vec<&str> = signal.top_topics.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(topics, vec!["battery"]);
    }

    #[test]
    fn most_frequent_term_ranks_first() {
        let signal = extract_topics(&texts(&["battery battery battery screen screen camera"]));
        assert_eq!(signal.top_topics[0].topic, "battery");
        assert_eq!(signal.top_topics[0].frequency, 3);
        assert_eq!(signal.top_topics[1].topic, "screen");
    }

    #[test]
    fn ties_keep_first_encounter_order() {
        let signal = extract_topics(&texts(&["zebra apple zebra apple"]));
        assert_eq!(signal.top_topics[0].topic, "zebra");
        assert_eq!(signal.top_topics[1].topic, "apple");
    }

    #[test]
    fn caps_at_ten_topics() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        let signal = extract_topics(&texts(&[text]));
        assert_eq!(signal.top_topics.len(), 10);
        assert_eq!(signal.unique_count, 12);
    }

    #[test]
    fn diversity_is_unique_over_total() {
        let signal = extract_topics(&texts(&["battery battery screen camera"]));
        assert!((signal.diversity - 0.75).abs() < 1e-12);
    }

    #[test]
    fn tokenization_is_case_insensitive() {
        let signal = extract_topics(&texts(&["Battery BATTERY battery"]));
        assert_eq!(signal.top_topics[0].frequency, 3);
    }
}
