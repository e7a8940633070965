//! Kina - speech-to-cognitive-insights analysis
//!
//! Kina scores a transcribed speech sample on four independent linguistic
//! signals (lexical diversity, speech fluency, sentence complexity,
//! emotional expression), combines them into a weighted overall score, and
//! derives a risk tier, an estimated cognitive age, and templated
//! recommendations.
//!
//! The engine is a pure, deterministic function of its inputs: transcription
//! and sentiment are external collaborators (see [`sentiment`]), and all
//! presentation lives in [`reporters`].
//!
//! ```no_run
//! use kina::engine;
//! use kina::models::Transcript;
//!
//! let transcript = Transcript::new(
//!     "I walked to the park because the weather was lovely.",
//!     "en",
//!     12.0,
//! );
//! let report = engine::analyze_with_defaults(&transcript)?;
//! println!("{:.1}/100 ({})", report.overall_score, report.risk);
//! # Ok::<(), kina::engine::EngineError>(())
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod models;
pub mod recommend;
pub mod reporters;
pub mod scoring;
pub mod sentiment;
pub mod signals;
pub mod text;
