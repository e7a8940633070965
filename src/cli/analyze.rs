//! Analyze command implementation
//!
//! This command performs a full transcript analysis:
//! 1. Load project configuration (kina.toml, if present)
//! 2. Read the transcript from a file or stdin
//! 3. Run the scoring engine
//! 4. Render the report (text, json, markdown)
//! 5. Optionally fail the process on a high risk tier (CI mode)

use crate::cli::AnalyzeArgs;
use crate::config;
use crate::engine;
use crate::models::{RiskTier, Transcript};
use crate::reporters;
use crate::sentiment::LexiconAnalyzer;

use anyhow::{bail, Context, Result};
use console::style;
use std::path::Path;

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let Some(transcript_path) = &args.transcript else {
        bail!("no transcript given. Usage: kina <FILE> --duration <SECONDS> (see kina --help)");
    };
    let Some(duration) = args.duration else {
        bail!(
            "--duration is required: pass the recording length in seconds \
             (e.g. kina {} --duration 30)",
            transcript_path.display()
        );
    };

    let project_config = config::load_config(Path::new("."))?;
    let language = args
        .language
        .clone()
        .unwrap_or_else(|| project_config.defaults.language.clone());
    let format = args
        .format
        .clone()
        .unwrap_or_else(|| project_config.defaults.format.clone());

    let text = read_transcript(transcript_path)?;
    let transcript = Transcript::new(text.trim_end(), language, duration);

    let report = engine::analyze(&transcript, &project_config.scoring, &LexiconAnalyzer::new())
        .context("analysis failed")?;

    // Color only for terminal text output; files and pipes get plain text.
    let color = !args.no_color && args.output.is_none();
    let rendered = reporters::report(&report, &format, color)?;

    match &args.output {
        Some(out_path) => {
            std::fs::write(out_path, &rendered)
                .with_context(|| format!("failed to write {}", out_path.display()))?;
            println!(
                "{} Report saved to {}",
                style("✓").green(),
                style(out_path.display()).cyan()
            );
        }
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    check_fail_risk(&args.fail_risk, report.risk)
}

/// Read the transcript text from a file, or stdin when the path is '-'.
fn read_transcript(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("failed to read transcript from stdin")
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript {}", path.display()))
    }
}

/// CI gate: error out (exit code 1) when the risk tier reaches the threshold.
fn check_fail_risk(fail_risk: &Option<String>, risk: RiskTier) -> Result<()> {
    let Some(threshold) = fail_risk else {
        return Ok(());
    };
    let threshold: RiskTier = threshold
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    if risk >= threshold {
        bail!("risk tier '{}' is at or above the --fail-risk threshold '{}'", risk, threshold);
    }
    Ok(())
}
