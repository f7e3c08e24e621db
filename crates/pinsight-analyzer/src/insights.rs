//! Opportunity/risk scanning and competitive-context extraction.

use crate::lexicon::{COMPARISON_PHRASES, OPPORTUNITY_SIGNALS, RISK_SIGNALS};
use crate::signals::{BusinessInsights, CompetitiveSignal};
use crate::stats::excerpt;

const MAX_EXCERPTS: usize = 5;
const EXCERPT_CHARS: usize = 100;

fn collect_matches(texts: &[String], keywords: &[&str]) -> Vec<String> {
    texts
        .iter()
        .filter(|t| {
            let lower = t.to_lowercase();
            keywords.iter().any(|kw| lower.contains(kw))
        })
        .map(|t| excerpt(t, EXCERPT_CHARS))
        .collect()
}

/// Collect opportunity and risk excerpts, capped at five each in
/// first-match order.
#[must_use]
pub fn generate_business_insights(texts: &[String]) -> BusinessInsights {
    let mut opportunities = collect_matches(texts, OPPORTUNITY_SIGNALS);
    opportunities.truncate(MAX_EXCERPTS);

    let mut risks = collect_matches(texts, RISK_SIGNALS);
    risks.truncate(MAX_EXCERPTS);

    BusinessInsights {
        opportunities,
        risks,
    }
}

/// Collect competitor-comparison excerpts.
///
/// Frequency is computed over the uncapped match count; the returned
/// excerpt list is capped at five.
#[must_use]
pub fn extract_competitive_insights(texts: &[String]) -> CompetitiveSignal {
    let matches = collect_matches(texts, COMPARISON_PHRASES);

    #[allow(clippy::cast_precision_loss)]
    let frequency = if texts.is_empty() {
        0.0
    } else {
        matches.len() as f64 / texts.len() as f64
    };

    let has_context = !matches.is_empty();
    let mut mentions = matches;
    mentions.truncate(MAX_EXCERPTS);

    CompetitiveSignal {
        mentions,
        has_context,
        frequency,
    }
}
