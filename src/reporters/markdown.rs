//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for sharing with a caregiver or clinician,
//! pasting into notes, or archiving alongside recordings.

use crate::models::{AnalysisReport, BandLabel, RawMetric, RiskTier};
use anyhow::Result;
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');
    md.push_str(&render_summary(report));
    md.push('\n');
    md.push_str(&render_signals(report));
    md.push('\n');
    md.push_str(&render_recommendations(report));
    md.push('\n');
    md.push_str(&render_transcript(report));
    md.push_str(&render_footer());

    Ok(md)
}

fn risk_emoji(risk: RiskTier) -> &'static str {
    match risk {
        RiskTier::Low => "🟢",
        RiskTier::LowModerate => "🟡",
        RiskTier::Moderate => "🟠",
        RiskTier::Higher => "🔴",
    }
}

fn band_indicator(band: BandLabel) -> &'static str {
    match band {
        BandLabel::Optimal => "✅ Optimal",
        BandLabel::Good => "✅ Good",
        BandLabel::Fair => "⚠️ Fair",
        BandLabel::Poor => "⚠️ Poor",
        BandLabel::VeryPoor => "❌ Very poor",
    }
}

fn render_header(report: &AnalysisReport) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"# {} Kina Speech Analysis Report

**Score: {:.1}/100** | **Risk: {}** | **Cognitive age: {:.1}**

Generated: {}
"#,
        risk_emoji(report.risk),
        report.overall_score,
        report.risk,
        report.cognitive_age,
        timestamp
    )
}

fn render_summary(report: &AnalysisReport) -> String {
    let mut md = format!(
        r#"## Summary

| Metric | Value |
|--------|-------|
| **Language** | {} |
| **Duration** | {:.1}s |
| **Words** | {} ({} unique) |
| **Sentences** | {} |
"#,
        report.language,
        report.duration_secs,
        report.stats.total_words,
        report.stats.unique_words,
        report.stats.sentence_count
    );

    for note in &report.notes {
        md.push_str(&format!("\n> ⚠️ {}\n", note));
    }
    md
}

fn render_signals(report: &AnalysisReport) -> String {
    let mut md = String::from(
        "## Signal Scores\n\n| Signal | Score | Band | Detail |\n|--------|-------|------|--------|\n",
    );

    for component in &report.components {
        md.push_str(&format!(
            "| {} | {:.0}/100 | {} | {} |\n",
            component.kind.label(),
            component.score,
            band_indicator(component.band),
            raw_detail(&component.raw)
        ));
    }
    md
}

fn raw_detail(raw: &RawMetric) -> String {
    match raw {
        RawMetric::Diversity {
            ratio,
            total_words,
            unique_words,
        } => format!(
            "{}/{} unique words (ratio {:.2})",
            unique_words, total_words, ratio
        ),
        RawMetric::Rate { words_per_sec, .. } => format!("{:.2} words/sec", words_per_sec),
        RawMetric::Complexity {
            avg_sentence_len,
            conjunction_count,
            ..
        } => format!(
            "{:.1} words/sentence, {} connecting words",
            avg_sentence_len, conjunction_count
        ),
        RawMetric::Polarity { value } => format!("polarity {:+.2}", value),
    }
}

fn render_recommendations(report: &AnalysisReport) -> String {
    let mut md = String::from("## Recommendations\n\n");
    for recommendation in &report.recommendations {
        md.push_str(&format!("- {}\n", recommendation));
    }
    md
}

fn render_transcript(report: &AnalysisReport) -> String {
    if report.text.trim().is_empty() {
        return String::new();
    }
    format!("## Transcript\n\n> {}\n\n", report.text.trim())
}

fn render_footer() -> String {
    r#"---

*Generated by Kina - speech-to-cognitive-insights analysis. Scores are
screening signals, not a medical diagnosis.*
"#
    .to_string()
}
