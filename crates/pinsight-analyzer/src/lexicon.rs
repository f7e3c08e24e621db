//! Static English keyword tables driving every analysis dimension.
//!
//! Matching is case-insensitive substring containment against the
//! lowercased text, so `"best"` also hits inside `"bestseller"`. Keywords
//! are lowercase single words or short phrases.

use crate::signals::{Aspect, Emotion, Intent};

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "love",
    "perfect",
    "best",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "worst",
    "hate",
    "disappointing",
    "poor",
];

/// Keywords signalling one of the six emotion categories.
#[must_use]
pub fn emotion_keywords(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Joy => &[
            "happy",
            "excited",
            "amazing",
            "wonderful",
            "fantastic",
            "love",
            "great",
            "excellent",
        ],
        Emotion::Anger => &[
            "angry",
            "frustrated",
            "terrible",
            "awful",
            "horrible",
            "hate",
            "worst",
            "disgusting",
        ],
        Emotion::Fear => &[
            "worried",
            "scared",
            "concerned",
            "afraid",
            "nervous",
            "uncertain",
            "risk",
            "dangerous",
        ],
        Emotion::Surprise => &[
            "unexpected",
            "surprising",
            "wow",
            "incredible",
            "unbelievable",
            "shocking",
        ],
        Emotion::Sadness => &[
            "disappointed",
            "sad",
            "depressed",
            "unhappy",
            "upset",
            "regret",
            "sorry",
        ],
        Emotion::Trust => &[
            "reliable",
            "trustworthy",
            "dependable",
            "honest",
            "authentic",
            "genuine",
            "quality",
        ],
    }
}

/// Keywords signalling a business intent category.
///
/// `Intent::Unknown` has no keywords; it is the no-hits sentinel.
#[must_use]
pub fn intent_keywords(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::PurchaseIntent => &[
            "buy", "purchase", "order", "get", "want", "need", "shopping", "price",
        ],
        Intent::Complaint => &[
            "problem",
            "issue",
            "broken",
            "defective",
            "wrong",
            "error",
            "complaint",
            "refund",
        ],
        Intent::Compliment => &[
            "thank",
            "appreciate",
            "recommend",
            "satisfied",
            "perfect",
            "impressed",
        ],
        Intent::FeatureRequest => &[
            "wish",
            "hope",
            "would like",
            "suggestion",
            "improve",
            "add",
            "feature",
            "update",
        ],
        Intent::SupportNeeded => &[
            "help",
            "assistance",
            "support",
            "how to",
            "question",
            "confused",
            "unclear",
        ],
        Intent::Unknown => &[],
    }
}

/// Keywords selecting texts that mention a product aspect.
#[must_use]
pub fn aspect_keywords(aspect: Aspect) -> &'static [&'static str] {
    match aspect {
        Aspect::Quality => &[
            "quality",
            "build",
            "material",
            "construction",
            "durable",
            "solid",
            "cheap",
            "flimsy",
        ],
        Aspect::Price => &[
            "price",
            "cost",
            "expensive",
            "cheap",
            "value",
            "money",
            "affordable",
            "budget",
        ],
        Aspect::Design => &[
            "design",
            "look",
            "appearance",
            "style",
            "color",
            "beautiful",
            "ugly",
            "attractive",
        ],
        Aspect::Performance => &[
            "performance",
            "speed",
            "fast",
            "slow",
            "efficient",
            "lag",
            "smooth",
            "responsive",
        ],
        Aspect::Usability => &[
            "easy",
            "difficult",
            "user-friendly",
            "complicated",
            "intuitive",
            "confusing",
        ],
        Aspect::Support => &[
            "support",
            "service",
            "help",
            "response",
            "staff",
            "team",
            "customer service",
        ],
        Aspect::Delivery => &[
            "delivery",
            "shipping",
            "fast",
            "slow",
            "arrived",
            "late",
            "on time",
            "packaging",
        ],
    }
}

/// Unmet-need markers collected as business opportunities.
pub const OPPORTUNITY_SIGNALS: &[&str] =
    &["want", "need", "wish", "hope", "would like", "missing", "lack"];

/// Dissatisfaction markers collected as business risks.
pub const RISK_SIGNALS: &[&str] = &[
    "problem",
    "issue",
    "complaint",
    "disappointed",
    "angry",
    "frustrated",
];

/// Phrases marking a text as competitor comparison.
pub const COMPARISON_PHRASES: &[&str] = &[
    "better than",
    "worse than",
    "compared to",
    "vs",
    "versus",
    "alternative to",
];

/// English stop words excluded from topic extraction.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "this", "that", "these", "those", "i", "you", "he", "she", "it", "we",
    "they", "my", "your", "his", "her", "its", "our", "their",
];
