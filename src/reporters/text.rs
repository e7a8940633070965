//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisReport, BandLabel, RawMetric, RiskTier};
use crate::text;
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Transcript wrap width in the report body.
const WRAP_WIDTH: usize = 80;

/// Risk tier colors (ANSI escape codes)
fn risk_color(risk: RiskTier) -> &'static str {
    match risk {
        RiskTier::Low => "\x1b[32m",         // Green
        RiskTier::LowModerate => "\x1b[92m", // Light green
        RiskTier::Moderate => "\x1b[33m",    // Yellow
        RiskTier::Higher => "\x1b[31m",      // Red
    }
}

/// Band colors
fn band_color(band: BandLabel) -> &'static str {
    match band {
        BandLabel::Optimal => "\x1b[32m",  // Green
        BandLabel::Good => "\x1b[92m",     // Light green
        BandLabel::Fair => "\x1b[33m",     // Yellow
        BandLabel::Poor => "\x1b[91m",     // Light red
        BandLabel::VeryPoor => "\x1b[31m", // Red
    }
}

fn raw_metric_detail(raw: &RawMetric) -> String {
    match raw {
        RawMetric::Diversity {
            ratio,
            total_words,
            unique_words,
        } => format!("ratio {:.2} ({}/{} unique)", ratio, unique_words, total_words),
        RawMetric::Rate { words_per_sec, .. } => format!("{:.2} words/sec", words_per_sec),
        RawMetric::Complexity {
            avg_sentence_len,
            conjunction_count,
            ..
        } => format!(
            "{:.1} words/sentence, {} conjunction{}",
            avg_sentence_len,
            conjunction_count,
            if *conjunction_count == 1 { "" } else { "s" }
        ),
        RawMetric::Polarity { value } => format!("polarity {:+.2}", value),
    }
}

/// Render report as formatted terminal output.
pub fn render(report: &AnalysisReport, color: bool) -> Result<String> {
    let rendered = render_colored(report);
    if color {
        Ok(rendered)
    } else {
        Ok(strip_ansi(&rendered))
    }
}

fn render_colored(report: &AnalysisReport) -> String {
    let mut out = String::new();

    // Header
    let risk_c = risk_color(report.risk);
    out.push_str(&format!("\n{BOLD}Kina Speech Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {BOLD}{:.1}/100{RESET}  Risk: {risk_c}{BOLD}{}{RESET}  Cognitive age: {BOLD}{:.1}{RESET}\n",
        report.overall_score, report.risk, report.cognitive_age
    ));
    out.push_str(&format!(
        "Language: {}  Duration: {:.1}s  Words: {}  Sentences: {}\n\n",
        report.language,
        report.duration_secs,
        report.stats.total_words,
        report.stats.sentence_count
    ));

    // Component table
    out.push_str(&format!("{BOLD}SIGNALS{RESET}\n"));
    out.push_str(&format!(
        "{DIM}  SIGNAL                  SCORE  BAND       DETAIL{RESET}\n"
    ));
    out.push_str(&format!(
        "{DIM}  ──────────────────────────────────────────────────────────────{RESET}\n"
    ));
    for component in &report.components {
        let band_c = band_color(component.band);
        out.push_str(&format!(
            "  {:<22}  {:>5.0}  {band_c}{:<9}{RESET}  {DIM}{}{RESET}\n",
            component.kind.label(),
            component.score,
            component.band.to_string(),
            raw_metric_detail(&component.raw)
        ));
    }
    out.push('\n');

    // Recommendations
    out.push_str(&format!("{BOLD}RECOMMENDATIONS{RESET}\n"));
    for recommendation in &report.recommendations {
        out.push_str(&format!("  - {}\n", recommendation));
    }
    out.push('\n');

    // Notes
    if !report.notes.is_empty() {
        for note in &report.notes {
            out.push_str(&format!("{DIM}note: {}{RESET}\n", note));
        }
        out.push('\n');
    }

    // Transcript
    if !report.text.trim().is_empty() {
        out.push_str(&format!("{BOLD}TRANSCRIPT{RESET}\n"));
        for line in text::wrap(&report.text, WRAP_WIDTH).lines() {
            out.push_str(&format!("  {DIM}{}{RESET}\n", line));
        }
    }

    out
}

/// Drop ANSI escape sequences for --no-color and file output.
fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip to the terminating 'm' of the CSI sequence.
            for e in chars.by_ref() {
                if e == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
