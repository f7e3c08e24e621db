//! Prompt templates and the prompt-size guardrail.

/// Health-check prompt for [`crate::LlmService::test_connection`].
pub(crate) const TEST_PROMPT: &str = "Say 'Hello' if you can hear me.";

/// Notice appended when a prompt is cut at the size ceiling.
const TRUNCATION_NOTICE: &str = "...\n\nProvide analysis based on available data.";

/// Enforce the hard prompt-size ceiling.
///
/// Oversized prompts are truncated and the partial-data notice appended,
/// instructing the model to work from what survived — never sent whole,
/// never rejected.
pub(crate) fn enforce_prompt_ceiling(prompt: &str, max_chars: usize) -> String {
    if prompt.chars().count() <= max_chars {
        return prompt.to_string();
    }
    let mut truncated: String = prompt.chars().take(max_chars).collect();
    truncated.push_str(TRUNCATION_NOTICE);
    truncated
}

/// Strict-JSON sentiment classification prompt.
pub(crate) fn sentiment_prompt(texts_json: &str) -> String {
    format!(
        r#"Analyze the sentiment of these texts. Respond ONLY with valid JSON:

Texts: {texts_json}

Required JSON format:
{{
    "sentiment": "positive|negative|neutral",
    "confidence": 0.85,
    "themes": ["theme1", "theme2"],
    "counts": {{"positive": 0, "negative": 0, "neutral": 0}}
}}"#
    )
}

/// Product-review analysis prompt over a sampled digest.
pub(crate) fn review_prompt(digest_json: &str, sampled: usize, total: usize) -> String {
    format!(
        "Analyze these product reviews and provide actionable insights:\n\n\
         Reviews Sample ({sampled} of {total} total):\n{digest_json}\n\n\
         Provide analysis covering:\n\
         1. Common complaints and issues\n\
         2. Areas for improvement\n\
         3. Customer suggestions\n\
         4. Quality concerns\n\
         5. Competitive advantages\n\n\
         Keep response concise and actionable."
    )
}

/// Platform-specific social content prompt over a sampled digest.
pub(crate) fn social_prompt(
    platform: &str,
    digest_json: &str,
    sampled: usize,
    total: usize,
) -> String {
    format!(
        "Analyze this {platform} content for insights:\n\n\
         Content Sample ({sampled} of {total} total):\n{digest_json}\n\n\
         Provide insights on:\n\
         1. Engagement patterns and trends\n\
         2. Top performing content types\n\
         3. Audience response indicators\n\
         4. Content optimization recommendations\n\
         5. Platform-specific strategy suggestions\n\n\
         Focus on actionable insights for {platform}."
    )
}

/// Strategic-insight prompt used to enrich the comprehensive analysis.
pub(crate) fn strategic_prompt(platform: Option<&str>, texts_json: &str) -> String {
    let subject = platform.unwrap_or("content");
    format!(
        "Analyze this {subject} data and provide strategic business insights:\n\n\
         Content Sample: {texts_json}\n\n\
         Please provide:\n\
         1. Strategic opportunities based on customer feedback\n\
         2. Potential risks or threats to monitor\n\
         3. Competitive positioning insights\n\
         4. Actionable recommendations for business growth\n\
         5. Market trends or patterns you observe\n\n\
         Focus on business-actionable insights rather than just sentiment."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_prompt_passes_through() {
        assert_eq!(enforce_prompt_ceiling("short", 8000), "short");
    }

    #[test]
    fn oversized_prompt_truncates_with_notice() {
        let prompt = "p".repeat(100);
        let bounded = enforce_prompt_ceiling(&prompt, 50);
        assert!(bounded.starts_with(&"p".repeat(50)));
        assert!(bounded.ends_with("Provide analysis based on available data."));
        assert!(bounded.chars().count() < 100 + TRUNCATION_NOTICE.len());
    }

    #[test]
    fn prompt_at_exact_ceiling_is_untouched() {
        let prompt = "q".repeat(50);
        assert_eq!(enforce_prompt_ceiling(&prompt, 50), prompt);
    }

    #[test]
    fn sentiment_prompt_demands_json() {
        let prompt = sentiment_prompt(r#"["great"]"#);
        assert!(prompt.contains("Respond ONLY with valid JSON"));
        assert!(prompt.contains(r#"["great"]"#));
        assert!(prompt.contains(r#""counts""#));
    }

    #[test]
    fn social_prompt_names_platform() {
        let prompt = social_prompt("twitter", "[]", 10, 40);
        assert!(prompt.contains("Analyze this twitter content"));
        assert!(prompt.contains("(10 of 40 total)"));
    }

    #[test]
    fn strategic_prompt_defaults_subject() {
        let prompt = strategic_prompt(None, "[]");
        assert!(prompt.contains("Analyze this content data"));
    }
}
