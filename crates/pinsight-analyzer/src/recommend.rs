//! Rule-based actionable recommendations.

use crate::signals::{
    AnalysisSignals, Intent, Priority, RateTier, Recommendation, RecommendationCategory,
    RecommendationKind, SentimentLabel,
};

/// Derive recommendations from the computed signals.
///
/// Rules fire in fixed order and are independent, except the two intent
/// rules which are mutually exclusive (primary intent is a single label).
/// No rule firing yields an empty list.
#[must_use]
pub fn generate_recommendations(signals: &AnalysisSignals) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if signals.sentiment.label == SentimentLabel::Negative {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Urgent,
            category: RecommendationCategory::CustomerService,
            action: "Address negative sentiment immediately".to_string(),
            priority: Priority::High,
            description:
                "Negative sentiment detected. Review customer complaints and implement improvements."
                    .to_string(),
        });
    }

    match signals.intent.primary {
        Intent::Complaint => recommendations.push(Recommendation {
            kind: RecommendationKind::Reactive,
            category: RecommendationCategory::Support,
            action: "Improve customer support response".to_string(),
            priority: Priority::High,
            description: "High complaint volume detected. Enhance support processes.".to_string(),
        }),
        Intent::FeatureRequest => recommendations.push(Recommendation {
            kind: RecommendationKind::Strategic,
            category: RecommendationCategory::ProductDevelopment,
            action: "Analyze feature requests for product roadmap".to_string(),
            priority: Priority::Medium,
            description: "Customer feature requests identified. Consider for product development."
                .to_string(),
        }),
        _ => {}
    }

    if signals.engagement.has_data && signals.engagement.rate_tier == RateTier::Low {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Strategic,
            category: RecommendationCategory::ContentStrategy,
            action: "Improve content engagement strategy".to_string(),
            priority: Priority::Medium,
            description: "Low engagement detected. Review content strategy and posting times."
                .to_string(),
        });
    }

    recommendations
}
