//! Speech fluency: words per second of recording

use crate::models::{BandLabel, ComponentScore, RateDirection, RawMetric, SignalKind};
use crate::scoring::{self, ScoringConfig};
use crate::signals::{Signal, SignalInput};

/// Optimal speaking-rate zone in words/sec. The direction relative to this
/// zone travels with the raw metric; recommendations depend on it.
const OPTIMAL_RATE_MIN: f64 = 2.0;
const OPTIMAL_RATE_MAX: f64 = 3.0;

pub struct SpeechFluency;

impl Signal for SpeechFluency {
    fn kind(&self) -> SignalKind {
        SignalKind::SpeechFluency
    }

    fn description(&self) -> &'static str {
        "Speaking rate in words per second of recording"
    }

    fn evaluate(&self, input: &SignalInput<'_>, config: &ScoringConfig) -> ComponentScore {
        let total_words = input.tokens.total_words();
        let degenerate = input.duration_secs <= 0.0 || total_words == 0;

        let words_per_sec = if degenerate {
            0.0
        } else {
            total_words as f64 / input.duration_secs
        };

        let direction = if words_per_sec < OPTIMAL_RATE_MIN {
            RateDirection::Below
        } else if words_per_sec > OPTIMAL_RATE_MAX {
            RateDirection::Above
        } else {
            RateDirection::Within
        };

        let (score, band) = if degenerate {
            (0.0, BandLabel::VeryPoor)
        } else {
            scoring::lookup(&config.bands.fluency, words_per_sec)
        };

        ComponentScore {
            kind: self.kind(),
            raw: RawMetric::Rate {
                words_per_sec,
                direction,
            },
            score,
            band,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    fn evaluate(word_count: usize, duration_secs: f64) -> ComponentScore {
        let transcript = vec!["word"; word_count].join(" ");
        let tokens = text::tokenize(&transcript);
        let input = SignalInput {
            tokens: &tokens,
            duration_secs,
            polarity: 0.0,
        };
        SpeechFluency.evaluate(&input, &ScoringConfig::default())
    }

    #[test]
    fn optimal_rate_scores_100() {
        // 75 words in 30s -> 2.5 words/sec.
        let score = evaluate(75, 30.0);
        match score.raw {
            RawMetric::Rate {
                words_per_sec,
                direction,
            } => {
                assert!((words_per_sec - 2.5).abs() < 1e-9);
                assert_eq!(direction, RateDirection::Within);
            }
            ref other => panic!("unexpected raw metric: {other:?}"),
        }
        assert_eq!(score.score, 100.0);
        assert_eq!(score.band, BandLabel::Optimal);
    }

    #[test]
    fn slow_and_fast_rates_record_direction() {
        let slow = evaluate(30, 30.0); // 1.0 words/sec
        assert_eq!(slow.score, 60.0);
        assert!(matches!(
            slow.raw,
            RawMetric::Rate {
                direction: RateDirection::Below,
                ..
            }
        ));

        let fast = evaluate(130, 30.0); // ~4.3 words/sec
        assert_eq!(fast.score, 40.0);
        assert!(matches!(
            fast.raw,
            RawMetric::Rate {
                direction: RateDirection::Above,
                ..
            }
        ));
    }

    #[test]
    fn extreme_rates_score_very_poor() {
        assert_eq!(evaluate(5, 30.0).band, BandLabel::VeryPoor);
        assert_eq!(evaluate(200, 30.0).band, BandLabel::VeryPoor);
    }

    #[test]
    fn zero_duration_never_divides() {
        let score = evaluate(50, 0.0);
        assert_eq!(score.score, 0.0);
        assert_eq!(score.band, BandLabel::VeryPoor);
        match score.raw {
            RawMetric::Rate { words_per_sec, .. } => assert_eq!(words_per_sec, 0.0),
            ref other => panic!("unexpected raw metric: {other:?}"),
        }
    }

    #[test]
    fn empty_transcript_is_very_poor_zero() {
        let score = evaluate(0, 30.0);
        assert_eq!(score.score, 0.0);
        assert_eq!(score.band, BandLabel::VeryPoor);
    }
}
