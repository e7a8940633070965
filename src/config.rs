//! Project configuration (`kina.toml`)
//!
//! Loads per-project configuration from a `kina.toml` file in the working
//! directory. Everything is optional: an absent or partial file falls back
//! to the documented defaults.
//!
//! # Configuration format
//!
//! ```toml
//! # kina.toml
//!
//! [scoring.weights]
//! lexical = 0.30
//! fluency = 0.25
//! complexity = 0.25
//! emotional = 0.20
//!
//! [scoring.risk]
//! low = 80.0
//! low_moderate = 65.0
//! moderate = 50.0
//!
//! [defaults]
//! format = "text"
//! language = "en"
//! ```

use crate::scoring::ScoringConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "kina.toml";

/// Default CLI flag values, overridable per project.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliDefaults {
    /// Output format: text, json, markdown.
    pub format: String,
    /// Language tag assumed when `--language` is not given.
    pub language: String,
}

impl Default for CliDefaults {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Top-level project configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KinaConfig {
    pub scoring: ScoringConfig,
    pub defaults: CliDefaults,
}

/// Load configuration from `kina.toml` in `dir`, falling back to defaults
/// when the file is absent. A present-but-invalid file is an error: a bad
/// scoring table must never silently skew results.
pub fn load_config(dir: &Path) -> Result<KinaConfig> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!("no {} found in {}, using defaults", CONFIG_FILE_NAME, dir.display());
        return Ok(KinaConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: KinaConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    config
        .scoring
        .validate()
        .with_context(|| format!("invalid scoring configuration in {}", path.display()))?;

    if config.scoring != ScoringConfig::default() {
        warn!("scoring tables overridden by {}", path.display());
    }
    debug!("loaded configuration from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config(dir.path()).expect("load");
        assert_eq!(config.defaults.format, "text");
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
[defaults]
format = "json"
"#,
        )
        .expect("write config");

        let config = load_config(dir.path()).expect("load");
        assert_eq!(config.defaults.format, "json");
        assert_eq!(config.defaults.language, "en");
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn weight_overrides_are_validated() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
[scoring.weights]
lexical = 0.9
fluency = 0.25
complexity = 0.25
emotional = 0.20
"#,
        )
        .expect("write config");

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn balanced_weight_overrides_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
[scoring.weights]
lexical = 0.25
fluency = 0.25
complexity = 0.25
emotional = 0.25
"#,
        )
        .expect("write config");

        let config = load_config(dir.path()).expect("load");
        assert_eq!(config.scoring.weights.lexical, 0.25);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "not [valid toml").expect("write");
        assert!(load_config(dir.path()).is_err());
    }
}
