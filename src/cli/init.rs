//! Init command - write a kina.toml with example settings

use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

pub fn run(path: &Path) -> Result<()> {
    let dir = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!(
            "{} {} already exists at {}",
            style("✓").green(),
            CONFIG_FILE_NAME,
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    let default_config = r#"# Kina configuration
# Every section is optional; absent values fall back to the documented
# defaults. Run `kina bands` to see the active scoring tables.

[scoring.weights]
# Signal weights must sum to 1.0.
lexical = 0.30
fluency = 0.25
complexity = 0.25
emotional = 0.20

[scoring.risk]
# Inclusive overall-score floor of each tier; below `moderate` is Higher.
low = 80.0
low_moderate = 65.0
moderate = 50.0

[scoring.age]
# cognitive age = max(floor, baseline_age + slope * (optimal_score - overall))
baseline_age = 35.0
optimal_score = 85.0
slope = 0.3
floor = 20.0

[defaults]
# Output format: text, json, markdown
format = "text"

# Language tag assumed when --language is not given
language = "en"
"#;
    std::fs::write(&config_path, default_config)
        .with_context(|| format!("Failed to create {}", CONFIG_FILE_NAME))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );

    println!("\n{} Ready to analyze!", style("✨").bold());
    println!("\nNext steps:");
    println!(
        "  {}   Analyze a transcript",
        style("kina speech.txt --duration 30").cyan()
    );
    println!(
        "  {}                      Inspect the scoring tables",
        style("kina bands").cyan()
    );

    Ok(())
}
