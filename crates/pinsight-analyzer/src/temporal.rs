//! Posting-pattern analysis over record dates.

use std::collections::HashMap;

use chrono::NaiveDate;
use pinsight_core::ContentRecord;

use crate::signals::{DateCount, DateRange, TemporalSignal, Trend};

const PEAK_DATES: usize = 3;

/// Analyze posting dates across a batch of records.
///
/// The date field resolves through `date` → `created_at` → `timestamp`
/// and is truncated to its 10-character `YYYY-MM-DD` prefix; prefixes
/// that do not parse as calendar dates are dropped, never an error.
/// Records without usable dates leave `has_data` false.
///
/// The trend value only reflects the dated-item count (more than 10 ⇒
/// `increasing`), not the shape of the series.
#[must_use]
pub fn analyze_temporal_patterns(records: &[ContentRecord]) -> TemporalSignal {
    let mut dates: Vec<String> = Vec::new();
    for record in records {
        if let Some(raw) = record.posted_date() {
            let prefix: String = raw.chars().take(10).collect();
            if NaiveDate::parse_from_str(&prefix, "%Y-%m-%d").is_ok() {
                dates.push(prefix);
            }
        }
    }

    if dates.is_empty() {
        return TemporalSignal::empty();
    }

    let start = dates.iter().min().cloned().unwrap_or_default();
    let end = dates.iter().max().cloned().unwrap_or_default();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for date in &dates {
        if !counts.contains_key(date.as_str()) {
            first_seen.push(date.as_str());
        }
        *counts.entry(date.as_str()).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let frequency = dates.len() as f64 / counts.len() as f64;

    // Stable sort: equal counts keep first-encounter order.
    let mut ranked = first_seen;
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
    let peak_dates: Vec<DateCount> = ranked
        .iter()
        .take(PEAK_DATES)
        .map(|d| DateCount {
            date: (*d).to_string(),
            count: counts[d],
        })
        .collect();

    let trend = if dates.len() > 10 {
        Trend::Increasing
    } else {
        Trend::Stable
    };

    TemporalSignal {
        has_data: true,
        date_range: Some(DateRange { start, end }),
        frequency,
        peak_dates,
        trend,
    }
}
