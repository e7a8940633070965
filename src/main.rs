//! Kina - speech-to-cognitive-insights CLI
//!
//! Scores transcribed speech samples on four linguistic signals and renders
//! the result as a text, JSON, or Markdown report.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = kina::cli::Cli::parse();

    // RUST_LOG wins; otherwise use the --log-level flag. Logs go to stderr
    // so JSON reports on stdout stay parseable.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    kina::cli::run(cli)
}
