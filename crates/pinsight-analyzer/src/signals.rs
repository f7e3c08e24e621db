//! Typed analysis signal bundle.
//!
//! Every closed label set is an enum serialized in `snake_case`, so a
//! serialized [`AnalysisSignals`] matches the document shape the dashboard
//! and persistence layers consume.

use std::collections::BTreeMap;

use pinsight_core::EngagementCounts;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

/// The six emotion categories, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Joy,
    Anger,
    Fear,
    Surprise,
    Sadness,
    Trust,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Sadness,
        Emotion::Trust,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Sadness => "sadness",
            Emotion::Trust => "trust",
        }
    }
}

/// Business intent categories. `Unknown` is the no-hits sentinel and never
/// appears in a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    PurchaseIntent,
    Complaint,
    Compliment,
    FeatureRequest,
    SupportNeeded,
    Unknown,
}

impl Intent {
    pub const CATEGORIES: [Intent; 5] = [
        Intent::PurchaseIntent,
        Intent::Complaint,
        Intent::Compliment,
        Intent::FeatureRequest,
        Intent::SupportNeeded,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Intent::PurchaseIntent => "Purchase Intent",
            Intent::Complaint => "Complaint",
            Intent::Compliment => "Compliment",
            Intent::FeatureRequest => "Feature Request",
            Intent::SupportNeeded => "Support Needed",
            Intent::Unknown => "Unknown",
        }
    }
}

/// Product/service aspects scored independently for sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Quality,
    Price,
    Design,
    Performance,
    Usability,
    Support,
    Delivery,
}

impl Aspect {
    pub const ALL: [Aspect; 7] = [
        Aspect::Quality,
        Aspect::Price,
        Aspect::Design,
        Aspect::Performance,
        Aspect::Usability,
        Aspect::Support,
        Aspect::Delivery,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    Low,
    Medium,
    High,
}

impl RateTier {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            RateTier::Low => "Low",
            RateTier::Medium => "Medium",
            RateTier::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityTier {
    Good,
    NeedsImprovement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Urgent,
    Reactive,
    Strategic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    CustomerService,
    Support,
    ProductDevelopment,
    ContentStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

/// Per-label counts of texts bucketed at the ±0.1 score thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSignal {
    pub label: SentimentLabel,
    pub confidence: f64,
    pub intensity: f64,
    pub score: f64,
    pub distribution: SentimentDistribution,
}

impl SentimentSignal {
    /// Neutral sentinel for an empty batch.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            confidence: 0.0,
            intensity: 0.0,
            score: 0.0,
            distribution: SentimentDistribution::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionSignal {
    /// Normalized weight per category; sums to ≤1 when any keyword hit.
    pub distribution: BTreeMap<Emotion, f64>,
    /// Up to three categories with non-zero weight, strongest first.
    pub dominant: Vec<Emotion>,
    pub intensity: f64,
    pub mixed: bool,
}

impl EmotionSignal {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            distribution: Emotion::ALL.iter().map(|e| (*e, 0.0)).collect(),
            dominant: Vec::new(),
            intensity: 0.0,
            mixed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicFrequency {
    pub topic: String,
    pub frequency: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSignal {
    pub top_topics: Vec<TopicFrequency>,
    pub unique_count: usize,
    pub diversity: f64,
}

impl TopicSignal {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            top_topics: Vec::new(),
            unique_count: 0,
            diversity: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSentiment {
    pub sentiment: SentimentLabel,
    pub score: f64,
    pub mentions: usize,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentSignal {
    pub primary: Intent,
    pub confidence: f64,
    pub distribution: BTreeMap<Intent, f64>,
    pub mixed: bool,
}

impl IntentSignal {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            primary: Intent::Unknown,
            confidence: 0.0,
            distribution: Intent::CATEGORIES.iter().map(|i| (*i, 0.0)).collect(),
            mixed: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInsights {
    /// Up to five 100-char excerpts signalling unmet needs.
    pub opportunities: Vec<String>,
    /// Up to five 100-char excerpts signalling dissatisfaction.
    pub risks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCount {
    pub date: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalSignal {
    pub has_data: bool,
    pub date_range: Option<DateRange>,
    /// Average dated items per distinct day.
    pub frequency: f64,
    pub peak_dates: Vec<DateCount>,
    pub trend: Trend,
}

impl TemporalSignal {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            has_data: false,
            date_range: None,
            frequency: 0.0,
            peak_dates: Vec::new(),
            trend: Trend::Stable,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementAverages {
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementSignal {
    pub has_data: bool,
    pub averages: EngagementAverages,
    pub total_average: f64,
    pub rate_tier: RateTier,
    pub best_performing: Option<EngagementCounts>,
}

impl EngagementSignal {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            has_data: false,
            averages: EngagementAverages::default(),
            total_average: 0.0,
            rate_tier: RateTier::Low,
            best_performing: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityIndicators {
    pub average_length: f64,
    pub length_variance: f64,
    pub readability: ReadabilityTier,
    /// Unique whitespace-delimited words per character of text.
    pub richness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitySignal {
    pub score: f64,
    pub indicators: QualityIndicators,
}

impl QualitySignal {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            indicators: QualityIndicators {
                average_length: 0.0,
                length_variance: 0.0,
                readability: ReadabilityTier::NeedsImprovement,
                richness: 0.0,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveSignal {
    pub mentions: Vec<String>,
    pub has_context: bool,
    /// Comparison-bearing texts over all texts (uncapped count).
    pub frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub category: RecommendationCategory,
    pub action: String,
    pub priority: Priority,
    pub description: String,
}

/// The full signal bundle for one batch of content.
///
/// Immutable once computed; owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSignals {
    pub sentiment: SentimentSignal,
    pub emotions: EmotionSignal,
    pub topics: TopicSignal,
    pub aspect_sentiment: BTreeMap<Aspect, AspectSentiment>,
    pub intent: IntentSignal,
    pub business_insights: BusinessInsights,
    pub temporal: TemporalSignal,
    pub engagement: EngagementSignal,
    pub quality: QualitySignal,
    pub competitive: CompetitiveSignal,
    pub recommendations: Vec<Recommendation>,
}

impl AnalysisSignals {
    /// Fully-populated all-neutral/zero sentinel, returned when a batch
    /// carries no analyzable text.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sentiment: SentimentSignal::empty(),
            emotions: EmotionSignal::empty(),
            topics: TopicSignal::empty(),
            aspect_sentiment: BTreeMap::new(),
            intent: IntentSignal::empty(),
            business_insights: BusinessInsights::default(),
            temporal: TemporalSignal::empty(),
            engagement: EngagementSignal::empty(),
            quality: QualitySignal::empty(),
            competitive: CompetitiveSignal::default(),
            recommendations: Vec::new(),
        }
    }
}
