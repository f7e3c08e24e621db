//! Multi-dimensional content analysis for ProductInsights.
//!
//! Pure, lexicon-driven analysis of a batch of content records: sentiment,
//! emotion, topics, per-aspect sentiment, intent, business insights,
//! temporal and engagement patterns, quality, competitive context, and
//! rule-based recommendations. No network calls, no randomness, no shared
//! state — the same input always produces the same [`AnalysisSignals`].

pub mod aspects;
pub mod emotions;
pub mod engagement;
pub mod insights;
pub mod intent;
pub mod lexicon;
pub mod pipeline;
pub mod quality;
pub mod recommend;
pub mod report;
pub mod sentiment;
pub mod signals;
pub mod temporal;
pub mod topics;

mod stats;

pub use aspects::analyze_aspect_sentiment;
pub use emotions::analyze_emotions;
pub use engagement::analyze_engagement_patterns;
pub use insights::{extract_competitive_insights, generate_business_insights};
pub use intent::analyze_intent;
pub use pipeline::{comprehensive_analysis, extract_texts};
pub use quality::assess_content_quality;
pub use recommend::generate_recommendations;
pub use report::generate_summary_report;
pub use sentiment::analyze_sentiment;
pub use signals::{
    AnalysisSignals, Aspect, AspectSentiment, BusinessInsights, CompetitiveSignal, DateCount,
    DateRange, Emotion, EmotionSignal, EngagementAverages, EngagementSignal, Intent, IntentSignal,
    Priority, QualityIndicators, QualitySignal, RateTier, ReadabilityTier, Recommendation,
    RecommendationCategory, RecommendationKind, SentimentDistribution, SentimentLabel,
    SentimentSignal, TemporalSignal, TopicFrequency, TopicSignal, Trend,
};
pub use temporal::analyze_temporal_patterns;
pub use topics::extract_topics;
