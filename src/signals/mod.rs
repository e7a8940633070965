//! Signal calculators
//!
//! The four linguistic signals behind the overall score. Each calculator is
//! a stateless pure function from the tokenized transcript (plus duration
//! and polarity) to a banded [`ComponentScore`]; none of them depends on
//! another, so the engine fans them out in parallel and joins on all four.

mod complexity;
mod emotion;
mod fluency;
mod lexical;

pub use complexity::SentenceComplexity;
pub use emotion::EmotionalExpression;
pub use fluency::SpeechFluency;
pub use lexical::LexicalDiversity;

use crate::models::{ComponentScore, SignalKind};
use crate::scoring::ScoringConfig;
use crate::text::Tokens;

/// Everything a calculator may look at. Built once per analysis and shared
/// read-only across the fan-out.
#[derive(Debug, Clone, Copy)]
pub struct SignalInput<'a> {
    pub tokens: &'a Tokens,
    /// Recording length in seconds (may be zero).
    pub duration_secs: f64,
    /// Sentiment polarity, clamped into [-1, +1] by the engine.
    pub polarity: f64,
}

/// A stateless signal calculator.
///
/// Degenerate inputs (no words, no sentences, zero duration) must produce a
/// well-formed zero score, never an error or a NaN.
pub trait Signal: Send + Sync {
    /// Which of the four signals this calculator produces.
    fn kind(&self) -> SignalKind;

    /// One-line description for `kina bands`.
    fn description(&self) -> &'static str;

    /// Compute the raw metric and band it.
    fn evaluate(&self, input: &SignalInput<'_>, config: &ScoringConfig) -> ComponentScore;
}

/// The four calculators in stable reporting order.
pub fn default_signals() -> Vec<Box<dyn Signal>> {
    vec![
        Box::new(LexicalDiversity),
        Box::new(SpeechFluency),
        Box::new(SentenceComplexity),
        Box::new(EmotionalExpression),
    ]
}
