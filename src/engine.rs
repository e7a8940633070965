//! Analysis engine
//!
//! The single public entry point: transcript + duration + language in, an
//! immutable [`AnalysisReport`] out. The four signal calculators have no
//! dependencies on each other, so they run through a rayon fan-out and join
//! before aggregation. The whole computation is pure and reentrant: no
//! shared state, no I/O beyond `tracing` diagnostics.

use crate::models::{AnalysisReport, Transcript, TranscriptStats};
use crate::recommend;
use crate::scoring::{self, ScoringConfig};
use crate::sentiment::{LexiconAnalyzer, SentimentAnalyzer};
use crate::signals::{
    EmotionalExpression, LexicalDiversity, SentenceComplexity, Signal, SignalInput, SpeechFluency,
};
use crate::text;
use tracing::{debug, info, warn};

/// Recordings shorter than this degrade fluency quality.
pub const MIN_RECOMMENDED_DURATION: f64 = 10.0;
/// Recordings longer than this degrade fluency quality.
pub const MAX_RECOMMENDED_DURATION: f64 = 60.0;

/// Input-validation faults at the engine boundary.
///
/// Degenerate-but-typed input (empty text, zero duration) is not an error;
/// it produces the documented zero scores instead.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid duration {0}: must be a finite, non-negative number of seconds")]
    InvalidDuration(f64),
    #[error("language tag must not be empty")]
    EmptyLanguage,
}

/// Analyze a transcript with the default scoring tables and the bundled
/// lexicon sentiment provider.
pub fn analyze_with_defaults(transcript: &Transcript) -> Result<AnalysisReport, EngineError> {
    analyze(transcript, &ScoringConfig::default(), &LexiconAnalyzer::new())
}

/// Analyze a transcript.
///
/// Deterministic and side-effect free: identical inputs produce identical
/// reports. Safe to call concurrently from any number of callers.
pub fn analyze(
    transcript: &Transcript,
    config: &ScoringConfig,
    sentiment: &dyn SentimentAnalyzer,
) -> Result<AnalysisReport, EngineError> {
    if !transcript.duration_secs.is_finite() || transcript.duration_secs < 0.0 {
        return Err(EngineError::InvalidDuration(transcript.duration_secs));
    }
    if transcript.language.trim().is_empty() {
        return Err(EngineError::EmptyLanguage);
    }

    let tokens = text::tokenize(&transcript.text);

    let raw_polarity = sentiment.polarity(&transcript.text);
    let polarity = raw_polarity.clamp(-1.0, 1.0);
    if polarity != raw_polarity {
        warn!(
            raw_polarity,
            "sentiment provider returned out-of-range polarity; clamped"
        );
    }

    let input = SignalInput {
        tokens: &tokens,
        duration_secs: transcript.duration_secs,
        polarity,
    };

    // Fan out the four independent calculators, join on all of them.
    let (lexical, (fluency, (complexity, emotional))) = rayon::join(
        || LexicalDiversity.evaluate(&input, config),
        || {
            rayon::join(
                || SpeechFluency.evaluate(&input, config),
                || {
                    rayon::join(
                        || SentenceComplexity.evaluate(&input, config),
                        || EmotionalExpression.evaluate(&input, config),
                    )
                },
            )
        },
    );

    let components = vec![lexical, fluency, complexity, emotional];
    for component in &components {
        debug!(
            signal = %component.kind,
            score = component.score,
            band = %component.band,
            "signal scored"
        );
    }

    let overall_score = scoring::aggregate(&config.weights, &components);
    let risk = config.risk.classify(overall_score);
    let cognitive_age = config.age.estimate(overall_score);
    let recommendations = recommend::for_components(&components);

    let mut notes = Vec::new();
    if transcript.duration_secs < MIN_RECOMMENDED_DURATION {
        warn!(
            duration = transcript.duration_secs,
            "recording shorter than the recommended window"
        );
        notes.push(format!(
            "Recording is {:.1}s; samples shorter than {MIN_RECOMMENDED_DURATION:.0}s make the fluency score less reliable.",
            transcript.duration_secs
        ));
    } else if transcript.duration_secs > MAX_RECOMMENDED_DURATION {
        warn!(
            duration = transcript.duration_secs,
            "recording longer than the recommended window"
        );
        notes.push(format!(
            "Recording is {:.1}s; samples longer than {MAX_RECOMMENDED_DURATION:.0}s make the fluency score less reliable.",
            transcript.duration_secs
        ));
    }

    info!(
        overall = overall_score,
        risk = %risk,
        cognitive_age,
        "analysis complete"
    );

    Ok(AnalysisReport {
        text: transcript.text.clone(),
        language: transcript.language.clone(),
        duration_secs: transcript.duration_secs,
        stats: TranscriptStats {
            total_words: tokens.total_words(),
            unique_words: tokens.unique_words,
            sentence_count: tokens.sentence_count(),
        },
        components,
        overall_score,
        risk,
        cognitive_age,
        recommendations,
        notes,
    })
}
