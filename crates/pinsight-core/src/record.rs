//! Normalized content record, ingested from platform collectors.
//!
//! Each platform names its fields differently (a tweet has `text` and
//! `retweet_count`, an Amazon review has `review_text` and `rating`, an
//! Instagram post has `caption` and `like_count`). All fields are optional
//! and resolution happens through fixed fallback chains rather than at the
//! deserialization boundary, so a record round-trips without loss.

use serde::{Deserialize, Serialize};

/// One piece of collected content: a post, review, or comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRecord {
    pub text: Option<String>,
    pub description: Option<String>,
    pub caption: Option<String>,
    pub content: Option<String>,
    pub review_text: Option<String>,
    pub comment: Option<String>,

    pub author: Option<String>,
    pub rating: Option<f64>,

    pub date: Option<String>,
    pub created_at: Option<String>,
    pub timestamp: Option<String>,

    pub like_count: Option<u64>,
    pub likes: Option<u64>,
    pub reply_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub comments: Option<u64>,
    pub retweet_count: Option<u64>,
    pub share_count: Option<u64>,
    pub shares: Option<u64>,
}

/// Normalized engagement counters for one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementCounts {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

impl EngagementCounts {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.likes + self.comments + self.shares
    }
}

impl ContentRecord {
    /// Build a record carrying only a `text` field.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Resolve the text-bearing field.
    ///
    /// The chain is `text` → `description` → `caption` → `content` →
    /// `review_text` → `comment`; the first present, non-empty value wins
    /// and is trimmed. A whitespace-only winner resolves to `None` — it
    /// does NOT fall through to later fields.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        let raw = [
            &self.text,
            &self.description,
            &self.caption,
            &self.content,
            &self.review_text,
            &self.comment,
        ]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())?;

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    /// Resolve the date-like field for temporal analysis:
    /// `date` → `created_at` → `timestamp`, first non-empty value.
    #[must_use]
    pub fn posted_date(&self) -> Option<&str> {
        [&self.date, &self.created_at, &self.timestamp]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
    }

    /// Resolve the date for social-content digests: `created_at` → `date`,
    /// by field presence (an empty `created_at` still wins).
    #[must_use]
    pub fn social_date(&self) -> Option<&str> {
        self.created_at.as_deref().or(self.date.as_deref())
    }

    /// Normalize engagement counters by field presence.
    ///
    /// `like_count` beats `likes`, `reply_count` beats `comment_count`
    /// beats `comments`, `retweet_count` beats `share_count` beats
    /// `shares`. Presence wins even when the value is an explicit 0.
    #[must_use]
    pub fn engagement(&self) -> EngagementCounts {
        EngagementCounts {
            likes: self.like_count.or(self.likes).unwrap_or(0),
            comments: self
                .reply_count
                .or(self.comment_count)
                .or(self.comments)
                .unwrap_or(0),
            shares: self
                .retweet_count
                .or(self.share_count)
                .or(self.shares)
                .unwrap_or(0),
        }
    }
}
