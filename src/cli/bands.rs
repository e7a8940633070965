//! Bands command - print the active scoring configuration
//!
//! Makes the banding tables inspectable: what you see here is exactly what
//! the engine will apply, including any kina.toml overrides.

use crate::config;
use crate::models::SignalKind;
use crate::scoring::{BandRow, ScoringConfig};
use crate::signals;

use anyhow::Result;
use console::style;
use std::path::Path;

pub fn run(json: bool) -> Result<()> {
    let project_config = config::load_config(Path::new("."))?;
    let scoring = &project_config.scoring;

    if json {
        println!("{}", serde_json::to_string_pretty(scoring)?);
        return Ok(());
    }

    println!("\n{}", style("Kina scoring configuration").bold());

    println!("\n{}", style("WEIGHTS").bold());
    for signal in signals::default_signals() {
        println!(
            "  {:<22} {:.2}",
            signal.kind().label(),
            scoring.weights.for_kind(signal.kind())
        );
    }

    println!("\n{}", style("RISK TIERS (overall score)").bold());
    println!("  {:<14} >= {:.0}", "low", scoring.risk.low);
    println!("  {:<14} >= {:.0}", "low-moderate", scoring.risk.low_moderate);
    println!("  {:<14} >= {:.0}", "moderate", scoring.risk.moderate);
    println!("  {:<14} below {:.0}", "higher", scoring.risk.moderate);

    println!("\n{}", style("COGNITIVE AGE").bold());
    println!(
        "  baseline {:.0}, {:+.1} years per point below an overall of {:.0}, floor {:.0}",
        scoring.age.baseline_age,
        scoring.age.slope,
        scoring.age.optimal_score,
        scoring.age.floor
    );

    for signal in signals::default_signals() {
        println!(
            "\n{} {}",
            style(signal.kind().label().to_uppercase()).bold(),
            style(format!("- {}", signal.description())).dim()
        );
        print_table(signal.kind(), scoring);
    }
    println!();

    Ok(())
}

fn print_table(kind: SignalKind, scoring: &ScoringConfig) {
    match kind {
        SignalKind::LexicalDiversity => print_rows(&scoring.bands.lexical),
        SignalKind::SpeechFluency => print_rows(&scoring.bands.fluency),
        SignalKind::SentenceComplexity => {
            let gate = &scoring.bands.complexity.optimal;
            println!(
                "  {:<28} {:>5.0}  {}",
                format!(
                    "{:.0}-{:.0} w/sentence, {}+ conj",
                    gate.min_len, gate.max_len, gate.min_conjunctions
                ),
                gate.score,
                gate.label
            );
            print_rows(&scoring.bands.complexity.fallback);
        }
        SignalKind::EmotionalExpression => print_rows(&scoring.bands.emotional),
    }
}

fn print_rows(rows: &[BandRow]) {
    for row in rows {
        let range = match (row.min, row.max) {
            (Some(min), Some(max)) => format!("{min} to {max}"),
            (Some(min), None) => format!("{min} and up"),
            (None, Some(max)) => format!("up to {max}"),
            (None, None) => "anything else".to_string(),
        };
        println!("  {:<28} {:>5.0}  {}", range, row.score, row.label);
    }
}
