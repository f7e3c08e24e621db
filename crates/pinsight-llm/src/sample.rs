//! Input sampling and sanitization for prompt construction.
//!
//! Everything here protects the prompt-size budget: field values are
//! whitespace-collapsed and truncated, and over-cap batches are sampled
//! from the head, middle, and tail rather than head-truncated, so the
//! prompt keeps the batch's temporal spread.

use pinsight_core::ContentRecord;

/// Truncate to `max_chars` characters on a char boundary, no ellipsis.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn clean_field(field: &mut Option<String>) {
    if let Some(value) = field {
        *value = truncate_chars(&collapse_whitespace(value), 500);
    }
}

/// Clean every string field of each record: collapse runs of whitespace
/// and cap at 500 characters. Numeric fields pass through unchanged.
#[must_use]
pub fn sanitize_records(records: &[ContentRecord]) -> Vec<ContentRecord> {
    records
        .iter()
        .map(|record| {
            let mut clean = record.clone();
            clean_field(&mut clean.text);
            clean_field(&mut clean.description);
            clean_field(&mut clean.caption);
            clean_field(&mut clean.content);
            clean_field(&mut clean.review_text);
            clean_field(&mut clean.comment);
            clean_field(&mut clean.author);
            clean_field(&mut clean.date);
            clean_field(&mut clean.created_at);
            clean_field(&mut clean.timestamp);
            clean
        })
        .collect()
}

/// Take a representative sample of at most `max_items` items.
///
/// Batches within the cap pass through whole. Over the cap (and for caps
/// of at least 10) the sample combines the first third, a slice centered
/// on the middle, and the last third of the batch; smaller caps fall back
/// to plain head truncation.
#[must_use]
pub fn sample_records<T: Clone>(records: &[T], max_items: usize) -> Vec<T> {
    if records.len() <= max_items {
        return records.to_vec();
    }
    if max_items < 10 {
        return records[..max_items].to_vec();
    }

    let third = max_items / 3;
    let last_len = max_items.div_ceil(3);
    let middle_start = records.len() / 2 - max_items / 6;

    let mut sample = Vec::with_capacity(max_items);
    sample.extend_from_slice(&records[..third]);
    sample.extend_from_slice(&records[middle_start..middle_start + third]);
    sample.extend_from_slice(&records[records.len() - last_len..]);
    sample
}

/// Trim, drop empties, truncate to `max_chars`, and cap the batch at
/// `max_items`.
#[must_use]
pub fn clean_texts(texts: &[String], max_items: usize, max_chars: usize) -> Vec<String> {
    texts
        .iter()
        .filter_map(|t| {
            let trimmed = t.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(truncate_chars(trimmed, max_chars))
            }
        })
        .take(max_items)
        .collect()
}
