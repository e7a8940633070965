//! Advisory message generation
//!
//! Each component scoring below the advisory threshold contributes one fixed
//! message, in stable signal order. Fluency has two variants chosen by the
//! raw speaking rate; the 1.5 words/sec cutoff is deliberately independent
//! of the fluency band table. When every component scores well, exactly one
//! all-clear message is emitted instead.

use crate::models::{ComponentScore, RawMetric, SignalKind};

/// Components below this score trigger their advisory.
pub const ADVISORY_THRESHOLD: f64 = 70.0;

/// Raw rate below this picks the slow-speech fluency variant.
const SLOW_RATE_CUTOFF: f64 = 1.5;

const LEXICAL_ADVICE: &str =
    "Vocabulary variety is low. Try retelling a story or describing your day in more detail to stretch word choice.";
const FLUENCY_SLOW_ADVICE: &str =
    "Speech rate is on the slow side. Reading aloud for a few minutes a day can help words come more freely.";
const FLUENCY_FAST_ADVICE: &str =
    "Speech rate is faster than the comfortable range. Pausing briefly between sentences can improve clarity.";
const COMPLEXITY_ADVICE: &str =
    "Sentence structure is simple or flat. Try joining related thoughts with words like 'because' or 'although'.";
const EMOTIONAL_ADVICE: &str =
    "Emotional tone is at an extreme. Talking through a neutral everyday topic can give a more balanced reading.";
const ALL_CLEAR: &str =
    "All speech signals look healthy. Keep up regular conversation and check in again soon.";

/// Build the advisory list for a set of component scores.
///
/// Returns per-component messages in [`SignalKind::ALL`] order, or exactly
/// one all-clear message when nothing triggered.
pub fn for_components(components: &[ComponentScore]) -> Vec<String> {
    let mut messages = Vec::new();

    for kind in SignalKind::ALL {
        let Some(component) = components.iter().find(|c| c.kind == kind) else {
            continue;
        };
        if component.score >= ADVISORY_THRESHOLD {
            continue;
        }
        let message = match kind {
            SignalKind::LexicalDiversity => LEXICAL_ADVICE,
            SignalKind::SpeechFluency => match component.raw {
                RawMetric::Rate { words_per_sec, .. } if words_per_sec < SLOW_RATE_CUTOFF => {
                    FLUENCY_SLOW_ADVICE
                }
                _ => FLUENCY_FAST_ADVICE,
            },
            SignalKind::SentenceComplexity => COMPLEXITY_ADVICE,
            SignalKind::EmotionalExpression => EMOTIONAL_ADVICE,
        };
        messages.push(message.to_string());
    }

    if messages.is_empty() {
        messages.push(ALL_CLEAR.to_string());
    }
    messages
}
