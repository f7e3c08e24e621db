//! Comprehensive analysis orchestration.

use pinsight_core::ContentRecord;

use crate::aspects::analyze_aspect_sentiment;
use crate::emotions::analyze_emotions;
use crate::engagement::analyze_engagement_patterns;
use crate::insights::{extract_competitive_insights, generate_business_insights};
use crate::intent::analyze_intent;
use crate::quality::assess_content_quality;
use crate::recommend::generate_recommendations;
use crate::sentiment::analyze_sentiment;
use crate::signals::AnalysisSignals;
use crate::temporal::analyze_temporal_patterns;
use crate::topics::extract_topics;

/// Pull the analyzable text out of each record.
///
/// Records whose text-bearing field resolves to nothing are dropped
/// silently — missing text is an input anomaly, not an error.
#[must_use]
pub fn extract_texts(records: &[ContentRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.body().map(str::to_string))
        .collect()
}

/// Run every analysis dimension over one batch of records.
///
/// Pure function of the input batch and the static lexicons: repeated
/// calls on the same input return identical signals. A batch with no
/// analyzable text yields the fully-populated empty sentinel; this
/// function has no failure path.
#[must_use]
pub fn comprehensive_analysis(
    records: &[ContentRecord],
    platform: Option<&str>,
) -> AnalysisSignals {
    tracing::info!(
        items = records.len(),
        platform = platform.unwrap_or("unspecified"),
        "starting comprehensive analysis"
    );

    let texts = extract_texts(records);
    if texts.is_empty() {
        tracing::warn!("no text content found for analysis");
        return AnalysisSignals::empty();
    }

    let mut signals = AnalysisSignals {
        sentiment: analyze_sentiment(&texts),
        emotions: analyze_emotions(&texts),
        topics: extract_topics(&texts),
        aspect_sentiment: analyze_aspect_sentiment(&texts),
        intent: analyze_intent(&texts),
        business_insights: generate_business_insights(&texts),
        temporal: analyze_temporal_patterns(records),
        engagement: analyze_engagement_patterns(records),
        quality: assess_content_quality(&texts),
        competitive: extract_competitive_insights(&texts),
        recommendations: Vec::new(),
    };
    signals.recommendations = generate_recommendations(&signals);

    tracing::info!("comprehensive analysis completed");
    signals
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
