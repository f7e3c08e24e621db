//! Generation orchestration: cached, retried, fallback-protected analysis.
//!
//! Public operations never return an error. Transport failures run
//! through the retry budget; anything that still fails — and every
//! application-level failure — degrades to a locally-computed result.

use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

use pinsight_analyzer::{comprehensive_analysis, generate_summary_report, AnalysisSignals, SentimentLabel};
use pinsight_core::{AppConfig, ContentRecord, EngagementCounts};
use serde::{Deserialize, Serialize};

use crate::cache::ResponseCache;
use crate::client::{GenerateOutcome, GenerationClient};
use crate::error::LlmError;
use crate::prompts;
use crate::retry::retry_generation;
use crate::sample::{clean_texts, sample_records, sanitize_records, truncate_chars};

const SENTIMENT_MAX_TEXTS: usize = 20;
const SENTIMENT_MAX_CHARS: usize = 200;
const REVIEW_SAMPLE: usize = 30;
const REVIEW_TEXT_CHARS: usize = 200;
const SOCIAL_SAMPLE: usize = 25;
const SOCIAL_TEXT_CHARS: usize = 150;
const STRATEGIC_SAMPLE: usize = 10;
const STRATEGIC_TEXT_CHARS: usize = 200;

/// Independent sentiment lexicon for the local fallback path. Deliberately
/// not shared with `pinsight-analyzer`: the fallback approximates what the
/// generation service would have produced, not the analyzer's signal.
const FALLBACK_POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "love", "best", "fantastic", "awesome",
];
const FALLBACK_NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "hate", "worst", "horrible", "disappointing",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// Sentiment classification as produced by the generation service (or the
/// local fallback when the service is unusable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub themes: Vec<String>,
    pub counts: SentimentCounts,
}

impl SentimentReport {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sentiment: SentimentLabel::Neutral,
            confidence: 0.0,
            themes: Vec::new(),
            counts: SentimentCounts::default(),
        }
    }
}

/// End-to-end analysis result: the deterministic signal bundle plus the
/// generated narrative (when available) and the executive summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveResult {
    #[serde(flatten)]
    pub signals: AnalysisSignals,
    /// `None` when narrative generation failed for any reason.
    pub narrative_insight: Option<String>,
    pub executive_summary: String,
}

/// Health-check outcome for the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionStatus {
    pub ok: bool,
    pub detail: Option<String>,
}

#[derive(Serialize)]
struct ReviewDigest {
    rating: f64,
    text: String,
    date: String,
}

#[derive(Serialize)]
struct SocialDigest {
    text: String,
    engagement: EngagementCounts,
    date: String,
}

/// Facade over the generation service, with caching, retry, prompt
/// guardrails, and local fallbacks.
pub struct LlmService {
    client: GenerationClient,
    cache: Arc<ResponseCache>,
    max_attempts: u32,
    retry_base_delay: Duration,
    max_prompt_chars: usize,
}

impl LlmService {
    /// Build a service from configuration, sharing the given cache.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AppConfig, cache: Arc<ResponseCache>) -> Result<Self, LlmError> {
        let client = GenerationClient::new(
            &config.ollama_url,
            &config.ollama_model,
            config.llm_timeout_secs,
        )?;
        Ok(Self {
            client,
            cache,
            max_attempts: config.llm_max_attempts,
            retry_base_delay: Duration::from_secs(config.llm_retry_base_delay_secs),
            max_prompt_chars: config.llm_max_prompt_chars,
        })
    }

    /// One cached, retried generation call.
    ///
    /// The cache is consulted before the size ceiling is applied; on a
    /// miss the (possibly truncated) prompt goes through the retry-wrapped
    /// transport call, and a successful payload is cached under the prompt
    /// that was actually sent.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] only when every transport attempt failed.
    /// Non-2xx service answers come back as
    /// [`GenerateOutcome::ApiError`], not as an `Err`.
    pub async fn generate_response(&self, prompt: &str) -> Result<GenerateOutcome, LlmError> {
        if let Some(cached) = self.cache.get(prompt, self.client.model()) {
            return Ok(GenerateOutcome::Success(cached));
        }

        let bounded = prompts::enforce_prompt_ceiling(prompt, self.max_prompt_chars);
        let client = &self.client;
        let outcome = retry_generation(self.max_attempts, self.retry_base_delay, || {
            let prompt = bounded.clone();
            async move { client.generate(&prompt).await }
        })
        .await?;

        if let GenerateOutcome::Success(response) = &outcome {
            self.cache
                .set(&bounded, self.client.model(), response.clone());
        }
        Ok(outcome)
    }

    /// Classify sentiment via the generation service, falling back to the
    /// local lexicon vote on any failure. Never errors.
    pub async fn analyze_sentiment(&self, texts: &[String]) -> SentimentReport {
        tracing::info!(texts = texts.len(), "starting sentiment analysis");
        if texts.is_empty() {
            tracing::warn!("no texts provided for sentiment analysis");
            return SentimentReport::empty();
        }

        let clean = clean_texts(texts, SENTIMENT_MAX_TEXTS, SENTIMENT_MAX_CHARS);
        let texts_json = serde_json::to_string(&clean).unwrap_or_default();
        let prompt = prompts::sentiment_prompt(&texts_json);

        match self.generate_response(&prompt).await {
            Ok(GenerateOutcome::Success(resp)) => {
                match serde_json::from_str::<SentimentReport>(&resp.response) {
                    Ok(report) => {
                        tracing::info!(sentiment = report.sentiment.as_str(), "generated sentiment parsed");
                        report
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "generated sentiment JSON unparseable — using fallback");
                        fallback_sentiment(&clean)
                    }
                }
            }
            Ok(GenerateOutcome::ApiError { status, .. }) => {
                tracing::warn!(status, "generation service rejected sentiment request — using fallback");
                fallback_sentiment(&clean)
            }
            Err(e) => {
                tracing::error!(error = %e, "sentiment generation failed — using fallback");
                fallback_sentiment(&clean)
            }
        }
    }

    /// Analyze product reviews, falling back to a local statistics summary.
    /// Never errors.
    pub async fn analyze_product_reviews(&self, reviews: &[ContentRecord]) -> String {
        tracing::info!(reviews = reviews.len(), "starting product review analysis");
        if reviews.is_empty() {
            return "No reviews to analyze.".to_string();
        }

        let clean = sanitize_records(reviews);
        let sample = sample_records(&clean, REVIEW_SAMPLE);
        let digest: Vec<ReviewDigest> = sample
            .iter()
            .map(|r| ReviewDigest {
                rating: r.rating.unwrap_or(0.0),
                text: truncate_chars(r.text.as_deref().unwrap_or(""), REVIEW_TEXT_CHARS),
                date: r.date.clone().unwrap_or_default(),
            })
            .collect();

        let digest_json = serde_json::to_string(&digest).unwrap_or_default();
        let prompt = prompts::review_prompt(&digest_json, digest.len(), reviews.len());

        match self.generate_response(&prompt).await {
            Ok(GenerateOutcome::Success(resp)) => {
                tracing::info!(chars = resp.response.len(), "review analysis generated");
                resp.response
            }
            Ok(GenerateOutcome::ApiError { status, .. }) => {
                tracing::warn!(status, "review analysis rejected — using fallback");
                fallback_review_analysis(&digest)
            }
            Err(e) => {
                tracing::error!(error = %e, "review analysis failed — using fallback");
                fallback_review_analysis(&digest)
            }
        }
    }

    /// Analyze social content for one platform, falling back to a local
    /// engagement summary. Never errors.
    pub async fn analyze_social_media_content(
        &self,
        content: &[ContentRecord],
        platform: &str,
    ) -> String {
        if content.is_empty() {
            return format!("No {platform} content to analyze.");
        }

        let clean = sanitize_records(content);
        let sample = sample_records(&clean, SOCIAL_SAMPLE);
        let digest: Vec<SocialDigest> = sample
            .iter()
            .map(|r| SocialDigest {
                text: truncate_chars(social_text(r), SOCIAL_TEXT_CHARS),
                engagement: r.engagement(),
                date: truncate_chars(r.social_date().unwrap_or(""), 10),
            })
            .collect();

        let digest_json = serde_json::to_string(&digest).unwrap_or_default();
        let prompt = prompts::social_prompt(platform, &digest_json, digest.len(), content.len());

        match self.generate_response(&prompt).await {
            Ok(GenerateOutcome::Success(resp)) => resp.response,
            Ok(GenerateOutcome::ApiError { status, .. }) => {
                tracing::warn!(status, platform, "social analysis rejected — using fallback");
                fallback_social_analysis(&digest, platform)
            }
            Err(e) => {
                tracing::error!(error = %e, platform, "social analysis failed — using fallback");
                fallback_social_analysis(&digest, platform)
            }
        }
    }

    /// End-to-end analysis: deterministic signals, a generated strategic
    /// narrative (`None` when generation fails), and the executive
    /// summary. The single entry point callers are expected to use.
    /// Never errors.
    pub async fn analyze_content_comprehensive(
        &self,
        records: &[ContentRecord],
        platform: Option<&str>,
    ) -> ComprehensiveResult {
        tracing::info!(items = records.len(), "starting comprehensive content analysis");

        let signals = comprehensive_analysis(records, platform);

        let sample_texts: Vec<String> = records
            .iter()
            .take(STRATEGIC_SAMPLE)
            .map(|r| {
                truncate_chars(
                    r.text
                        .as_deref()
                        .or(r.description.as_deref())
                        .unwrap_or(""),
                    STRATEGIC_TEXT_CHARS,
                )
            })
            .collect();
        let texts_json = serde_json::to_string(&sample_texts).unwrap_or_default();
        let prompt = prompts::strategic_prompt(platform, &texts_json);

        let narrative_insight = match self.generate_response(&prompt).await {
            Ok(GenerateOutcome::Success(resp)) => {
                tracing::info!("narrative insight generated");
                Some(resp.response)
            }
            Ok(GenerateOutcome::ApiError { status, .. }) => {
                tracing::warn!(status, "narrative generation rejected — insight unavailable");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "narrative generation failed — insight unavailable");
                None
            }
        };

        let executive_summary = generate_summary_report(&signals);
        tracing::info!("comprehensive content analysis completed");

        ComprehensiveResult {
            signals,
            narrative_insight,
            executive_summary,
        }
    }

    /// Probe the generation service with a trivial prompt.
    pub async fn test_connection(&self) -> ConnectionStatus {
        match self.generate_response(prompts::TEST_PROMPT).await {
            Ok(GenerateOutcome::Success(_)) => ConnectionStatus {
                ok: true,
                detail: None,
            },
            Ok(GenerateOutcome::ApiError { status, message }) => ConnectionStatus {
                ok: false,
                detail: Some(format!("service returned status {status}: {message}")),
            },
            Err(e) => ConnectionStatus {
                ok: false,
                detail: Some(e.to_string()),
            },
        }
    }
}

/// Text resolution for social digests: `text` → `description` → `caption`,
/// by field presence.
fn social_text(record: &ContentRecord) -> &str {
    record
        .text
        .as_deref()
        .or(record.description.as_deref())
        .or(record.caption.as_deref())
        .unwrap_or("")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Capitalize the first character, for platform names in fallback text.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Local lexicon vote standing in for the generation service.
///
/// Each text votes positive, negative, or neutral by comparing fallback
/// lexicon hits; the plurality label wins with its vote share as
/// confidence.
fn fallback_sentiment(texts: &[String]) -> SentimentReport {
    tracing::info!(texts = texts.len(), "using fallback sentiment analysis");
    if texts.is_empty() {
        return SentimentReport::empty();
    }

    let mut positive = 0usize;
    let mut negative = 0usize;
    for text in texts {
        let lower = text.to_lowercase();
        let pos = FALLBACK_POSITIVE_WORDS
            .iter()
            .filter(|w| lower.contains(*w))
            .count();
        let neg = FALLBACK_NEGATIVE_WORDS
            .iter()
            .filter(|w| lower.contains(*w))
            .count();
        if pos > neg {
            positive += 1;
        } else if neg > pos {
            negative += 1;
        }
    }
    let neutral = texts.len() - positive - negative;

    #[allow(clippy::cast_precision_loss)]
    let total = texts.len() as f64;
    #[allow(clippy::cast_precision_loss)]
    let (sentiment, confidence) = if positive > negative.max(neutral) {
        (SentimentLabel::Positive, positive as f64 / total)
    } else if negative > positive.max(neutral) {
        (SentimentLabel::Negative, negative as f64 / total)
    } else {
        (SentimentLabel::Neutral, neutral as f64 / total)
    };

    SentimentReport {
        sentiment,
        confidence: round2(confidence),
        themes: vec!["automated_analysis".to_string()],
        counts: SentimentCounts {
            positive,
            negative,
            neutral,
        },
    }
}

/// Rating-statistics summary when review generation is unavailable.
fn fallback_review_analysis(digest: &[ReviewDigest]) -> String {
    if digest.is_empty() {
        return "No reviews available for analysis.".to_string();
    }

    let ratings: Vec<f64> = digest.iter().map(|d| d.rating).filter(|r| *r > 0.0).collect();
    #[allow(clippy::cast_precision_loss)]
    let avg_rating = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<f64>() / ratings.len() as f64
    };

    // Rating histogram in first-encounter order.
    let mut dist: Vec<(f64, usize)> = Vec::new();
    for rating in &ratings {
        if let Some(entry) = dist.iter_mut().find(|(r, _)| r == rating) {
            entry.1 += 1;
        } else {
            dist.push((*rating, 1));
        }
    }

    let satisfaction = if avg_rating >= 4.0 {
        "High customer satisfaction"
    } else if avg_rating >= 3.0 {
        "Mixed customer satisfaction"
    } else {
        "Low customer satisfaction"
    };

    let most_common = dist
        .iter()
        .fold(None::<(f64, usize)>, |best, entry| match best {
            Some(b) if b.1 >= entry.1 => Some(b),
            _ => Some(*entry),
        })
        .map_or_else(|| "N/A".to_string(), |(r, _)| r.to_string());

    let dist_text = dist
        .iter()
        .map(|(r, c)| format!("{r}: {c}"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    let _ = writeln!(out, "**Review Analysis Summary**");
    let _ = writeln!(out);
    let _ = writeln!(out, "**Overview:**");
    let _ = writeln!(out, "- Total Reviews Analyzed: {}", digest.len());
    let _ = writeln!(out, "- Average Rating: {avg_rating:.1}/5.0");
    let _ = writeln!(out, "- Rating Distribution: {{{dist_text}}}");
    let _ = writeln!(out);
    let _ = writeln!(out, "**Key Insights:**");
    let _ = writeln!(out, "- {satisfaction}");
    let _ = writeln!(out, "- Most common rating: {most_common}");
    let _ = writeln!(out, "- Review text analysis requires full LLM processing");
    let _ = writeln!(out);
    let _ = writeln!(out, "**Recommendations:**");
    let _ = writeln!(out, "- Monitor low-rated reviews for specific issues");
    let _ = writeln!(out, "- Analyze high-rated reviews for strengths to emphasize");
    let _ = write!(out, "- Consider implementing feedback collection improvements");
    out
}

/// Engagement-statistics summary when social generation is unavailable.
fn fallback_social_analysis(digest: &[SocialDigest], platform: &str) -> String {
    if digest.is_empty() {
        return format!("No {platform} content available for analysis.");
    }

    let totals: Vec<u64> = digest.iter().map(|d| d.engagement.total()).collect();
    #[allow(clippy::cast_precision_loss)]
    let count = digest.len() as f64;
    #[allow(clippy::cast_precision_loss)]
    let avg_engagement = totals.iter().sum::<u64>() as f64 / count;
    let peak = totals.iter().copied().max().unwrap_or(0);

    #[allow(clippy::cast_precision_loss)]
    let avg_likes = digest.iter().map(|d| d.engagement.likes).sum::<u64>() as f64 / count;
    #[allow(clippy::cast_precision_loss)]
    let avg_comments = digest.iter().map(|d| d.engagement.comments).sum::<u64>() as f64 / count;
    #[allow(clippy::cast_precision_loss)]
    let avg_shares = digest.iter().map(|d| d.engagement.shares).sum::<u64>() as f64 / count;

    let verdict = if avg_engagement > 100.0 {
        "Strong engagement performance"
    } else if avg_engagement > 20.0 {
        "Moderate engagement"
    } else {
        "Focus on improving engagement"
    };

    let mut out = String::new();
    let _ = writeln!(out, "**{} Content Analysis**", title_case(platform));
    let _ = writeln!(out);
    let _ = writeln!(out, "**Overview:**");
    let _ = writeln!(out, "- Total Posts Analyzed: {}", digest.len());
    let _ = writeln!(out, "- Average Engagement: {avg_engagement:.1}");
    let _ = writeln!(out, "- Peak Engagement: {peak}");
    let _ = writeln!(out);
    let _ = writeln!(out, "**Engagement Metrics:**");
    let _ = writeln!(out, "- Average Likes: {avg_likes:.1}");
    let _ = writeln!(out, "- Average Comments: {avg_comments:.1}");
    let _ = writeln!(out, "- Average Shares: {avg_shares:.1}");
    let _ = writeln!(out);
    let _ = writeln!(out, "**Recommendations:**");
    let _ = writeln!(out, "- {verdict}");
    let _ = writeln!(out, "- Analyze top-performing posts for successful content patterns");
    let _ = write!(out, "- Consider timing and frequency optimization");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn fallback_sentiment_empty_is_neutral() {
        let report = fallback_sentiment(&[]);
        assert_eq!(report.sentiment, SentimentLabel::Neutral);
        assert_eq!(report.confidence, 0.0);
    }

    #[test]
    fn fallback_sentiment_positive_plurality() {
        let report = fallback_sentiment(&texts(&["great stuff", "love this", "meh"]));
        assert_eq!(report.sentiment, SentimentLabel::Positive);
        assert_eq!(report.counts.positive, 2);
        assert_eq!(report.counts.neutral, 1);
        assert!((report.confidence - 0.67).abs() < 1e-9);
        assert_eq!(report.themes, vec!["automated_analysis".to_string()]);
    }

    #[test]
    fn fallback_sentiment_negative_plurality() {
        let report = fallback_sentiment(&texts(&["terrible", "awful thing", "hate it"]));
        assert_eq!(report.sentiment, SentimentLabel::Negative);
        assert_eq!(report.counts.negative, 3);
        assert_eq!(report.confidence, 1.0);
    }

    #[test]
    fn fallback_sentiment_tie_is_neutral() {
        let report = fallback_sentiment(&texts(&["great", "terrible"]));
        assert_eq!(report.sentiment, SentimentLabel::Neutral);
    }

    #[test]
    fn fallback_review_summary_contains_statistics() {
        let digest = vec![
            ReviewDigest {
                rating: 5.0,
                text: "great".to_string(),
                date: String::new(),
            },
            ReviewDigest {
                rating: 5.0,
                text: "excellent".to_string(),
                date: String::new(),
            },
            ReviewDigest {
                rating: 3.0,
                text: "ok".to_string(),
                date: String::new(),
            },
        ];
        let summary = fallback_review_analysis(&digest);
        assert!(summary.contains("**Review Analysis Summary**"));
        assert!(summary.contains("Total Reviews Analyzed: 3"));
        assert!(summary.contains("Average Rating: 4.3/5.0"));
        assert!(summary.contains("High customer satisfaction"));
        assert!(summary.contains("Most common rating: 5"));
    }

    #[test]
    fn fallback_review_summary_without_ratings() {
        let digest = vec![ReviewDigest {
            rating: 0.0,
            text: "unrated".to_string(),
            date: String::new(),
        }];
        let summary = fallback_review_analysis(&digest);
        assert!(summary.contains("Average Rating: 0.0/5.0"));
        assert!(summary.contains("Most common rating: N/A"));
        assert!(summary.contains("Low customer satisfaction"));
    }

    #[test]
    fn fallback_social_summary_reports_engagement() {
        let digest = vec![
            SocialDigest {
                text: "post one".to_string(),
                engagement: EngagementCounts {
                    likes: 100,
                    comments: 20,
                    shares: 10,
                },
                date: String::new(),
            },
            SocialDigest {
                text: "post two".to_string(),
                engagement: EngagementCounts {
                    likes: 10,
                    comments: 0,
                    shares: 0,
                },
                date: String::new(),
            },
        ];
        let summary = fallback_social_analysis(&digest, "twitter");
        assert!(summary.starts_with("**Twitter Content Analysis**"));
        assert!(summary.contains("Total Posts Analyzed: 2"));
        assert!(summary.contains("Peak Engagement: 130"));
        assert!(summary.contains("Average Likes: 55.0"));
    }

    #[test]
    fn social_text_resolves_by_presence() {
        let record = ContentRecord {
            description: Some("video desc".to_string()),
            caption: Some("caption".to_string()),
            ..ContentRecord::default()
        };
        assert_eq!(social_text(&record), "video desc");
    }

    #[test]
    fn title_case_capitalizes_platform() {
        assert_eq!(title_case("twitter"), "Twitter");
        assert_eq!(title_case(""), "");
    }
}
