//! Emotional expression: sentiment polarity banding
//!
//! The polarity itself comes from the sentiment collaborator (see
//! [`crate::sentiment`]); this calculator only bands it. A mildly positive
//! tone is considered optimal; strong swings in either direction score
//! lower.

use crate::models::{BandLabel, ComponentScore, RawMetric, SignalKind};
use crate::scoring::{self, ScoringConfig};
use crate::signals::{Signal, SignalInput};

pub struct EmotionalExpression;

impl Signal for EmotionalExpression {
    fn kind(&self) -> SignalKind {
        SignalKind::EmotionalExpression
    }

    fn description(&self) -> &'static str {
        "Emotional tone as sentiment polarity of the transcript"
    }

    fn evaluate(&self, input: &SignalInput<'_>, config: &ScoringConfig) -> ComponentScore {
        // A transcript with no words has no tone to read; the neutral 0.0 a
        // provider returns for empty text must not score as optimal.
        let (score, band) = if input.tokens.total_words() == 0 {
            (0.0, BandLabel::VeryPoor)
        } else {
            scoring::lookup(&config.bands.emotional, input.polarity)
        };

        ComponentScore {
            kind: self.kind(),
            raw: RawMetric::Polarity {
                value: input.polarity,
            },
            score,
            band,
        }
    }
}
