//! Human-readable executive summary.

use std::fmt::Write as _;

use crate::signals::AnalysisSignals;

/// Render a fixed-structure Markdown summary of the signal bundle.
///
/// Total function: every field it reads exists on the sentinel too, so a
/// degraded analysis still formats cleanly.
#[must_use]
pub fn generate_summary_report(signals: &AnalysisSignals) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "## Content Analysis Summary Report");
    let _ = writeln!(report);
    let _ = writeln!(report, "### Overall Sentiment");
    let _ = writeln!(
        report,
        "- **Sentiment**: {} (Confidence: {:.0}%)",
        signals.sentiment.label.title(),
        signals.sentiment.confidence * 100.0
    );
    let _ = writeln!(
        report,
        "- **Primary Intent**: {}",
        signals.intent.primary.title()
    );

    let dominant: Vec<&str> = signals
        .emotions
        .dominant
        .iter()
        .take(3)
        .map(|e| e.as_str())
        .collect();
    let _ = writeln!(
        report,
        "- **Dominant Emotions**: {}",
        if dominant.is_empty() {
            "None detected".to_string()
        } else {
            dominant.join(", ")
        }
    );

    let _ = writeln!(report);
    let _ = writeln!(report, "### Key Insights");
    let _ = writeln!(
        report,
        "- **Top Opportunities**: {} identified",
        signals.business_insights.opportunities.len()
    );
    let _ = writeln!(
        report,
        "- **Risk Areas**: {} found",
        signals.business_insights.risks.len()
    );
    let _ = writeln!(
        report,
        "- **Content Quality**: {:.0}%",
        signals.quality.score * 100.0
    );

    let _ = writeln!(report);
    let _ = writeln!(report, "### Recommendations");
    for rec in signals.recommendations.iter().take(5) {
        let _ = writeln!(report, "- {}", rec.action);
    }

    let _ = writeln!(report);
    let _ = writeln!(report, "### Engagement Analysis");
    if signals.engagement.has_data {
        let _ = writeln!(
            report,
            "- **Engagement Rate**: {}",
            signals.engagement.rate_tier.title()
        );
        let _ = writeln!(
            report,
            "- **Average Likes**: {}",
            signals.engagement.averages.likes
        );
        let _ = writeln!(
            report,
            "- **Average Comments**: {}",
            signals.engagement.averages.comments
        );
    } else {
        let _ = writeln!(report, "- No engagement data available");
    }

    report.trim().to_string()
}
