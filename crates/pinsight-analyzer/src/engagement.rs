//! Engagement-metric aggregation.

use pinsight_core::{ContentRecord, EngagementCounts};

use crate::signals::{EngagementAverages, EngagementSignal, RateTier};
use crate::stats::{mean, round1};

/// Aggregate normalized engagement counters across a batch.
///
/// The rate tier is decided on the unrounded sum of the per-metric
/// averages: >100 high, >20 medium, else low. Best-performing is the
/// first record with the maximal likes+comments+shares total.
#[must_use]
pub fn analyze_engagement_patterns(records: &[ContentRecord]) -> EngagementSignal {
    if records.is_empty() {
        return EngagementSignal::empty();
    }

    let counts: Vec<EngagementCounts> = records.iter().map(ContentRecord::engagement).collect();

    #[allow(clippy::cast_precision_loss)]
    let likes: Vec<f64> = counts.iter().map(|c| c.likes as f64).collect();
    #[allow(clippy::cast_precision_loss)]
    let comments: Vec<f64> = counts.iter().map(|c| c.comments as f64).collect();
    #[allow(clippy::cast_precision_loss)]
    let shares: Vec<f64> = counts.iter().map(|c| c.shares as f64).collect();

    let avg_likes = mean(&likes);
    let avg_comments = mean(&comments);
    let avg_shares = mean(&shares);
    let total = avg_likes + avg_comments + avg_shares;

    let rate_tier = if total > 100.0 {
        RateTier::High
    } else if total > 20.0 {
        RateTier::Medium
    } else {
        RateTier::Low
    };

    // First maximal record wins ties.
    let mut best = counts[0];
    for c in &counts[1..] {
        if c.total() > best.total() {
            best = *c;
        }
    }

    EngagementSignal {
        has_data: true,
        averages: EngagementAverages {
            likes: round1(avg_likes),
            comments: round1(avg_comments),
            shares: round1(avg_shares),
        },
        total_average: round1(total),
        rate_tier,
        best_performing: Some(best),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_counts(likes: u64, comments: u64, shares: u64) -> ContentRecord {
        ContentRecord {
            text: Some("post".to_string()),
            likes: Some(likes),
            comments: Some(comments),
            shares: Some(shares),
            ..ContentRecord::default()
        }
    }

    #[test]
    fn empty_batch_has_no_data() {
        let signal = analyze_engagement_patterns(&[]);
        assert!(!signal.has_data);
        assert!(signal.best_performing.is_none());
    }

    #[test]
    fn averages_are_per_metric_means() {
        let records = vec![with_counts(10, 2, 0), with_counts(20, 4, 2)];
        let signal = analyze_engagement_patterns(&records);
        assert!((signal.averages.likes - 15.0).abs() < f64::EPSILON);
        assert!((signal.averages.comments - 3.0).abs() < f64::EPSILON);
        assert!((signal.averages.shares - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tier_thresholds() {
        let low = analyze_engagement_patterns(&[with_counts(5, 1, 0)]);
        assert_eq!(low.rate_tier, RateTier::Low);

        let medium = analyze_engagement_patterns(&[with_counts(20, 5, 0)]);
        assert_eq!(medium.rate_tier, RateTier::Medium);

        let high = analyze_engagement_patterns(&[with_counts(90, 10, 5)]);
        assert_eq!(high.rate_tier, RateTier::High);
    }

    #[test]
    fn tier_boundary_is_exclusive() {
        // Exactly 20 total stays low; exactly 100 stays medium.
        let at_twenty = analyze_engagement_patterns(&[with_counts(20, 0, 0)]);
        assert_eq!(at_twenty.rate_tier, RateTier::Low);

        let at_hundred = analyze_engagement_patterns(&[with_counts(100, 0, 0)]);
        assert_eq!(at_hundred.rate_tier, RateTier::Medium);
    }

    #[test]
    fn best_performing_is_argmax_by_total() {
        let records = vec![with_counts(5, 0, 0), with_counts(50, 10, 3), with_counts(8, 1, 0)];
        let signal = analyze_engagement_patterns(&records);
        let best = signal.best_performing.unwrap();
        assert_eq!(best.likes, 50);
        assert_eq!(best.total(), 63);
    }

    #[test]
    fn best_performing_first_wins_ties() {
        let records = vec![with_counts(10, 0, 0), with_counts(0, 10, 0)];
        let signal = analyze_engagement_patterns(&records);
        assert_eq!(signal.best_performing.unwrap().likes, 10);
    }

    #[test]
    fn records_without_counters_average_zero() {
        let records = vec![ContentRecord::from_text("bare")];
        let signal = analyze_engagement_patterns(&records);
        assert!(signal.has_data);
        assert_eq!(signal.rate_tier, RateTier::Low);
        assert_eq!(signal.total_average, 0.0);
    }
}
