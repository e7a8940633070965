//! Lexical diversity: unique/total word ratio

use crate::models::{BandLabel, ComponentScore, RawMetric, SignalKind};
use crate::scoring::{self, ScoringConfig};
use crate::signals::{Signal, SignalInput};

pub struct LexicalDiversity;

impl Signal for LexicalDiversity {
    fn kind(&self) -> SignalKind {
        SignalKind::LexicalDiversity
    }

    fn description(&self) -> &'static str {
        "Vocabulary variety as the ratio of unique to total words"
    }

    fn evaluate(&self, input: &SignalInput<'_>, config: &ScoringConfig) -> ComponentScore {
        let total_words = input.tokens.total_words();
        let unique_words = input.tokens.unique_words;

        let ratio = if total_words == 0 {
            0.0
        } else {
            unique_words as f64 / total_words as f64
        };

        let (score, band) = if total_words == 0 {
            (0.0, BandLabel::VeryPoor)
        } else {
            scoring::lookup(&config.bands.lexical, ratio)
        };

        ComponentScore {
            kind: self.kind(),
            raw: RawMetric::Diversity {
                ratio,
                total_words,
                unique_words,
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

    fn evaluate(transcript: &str) -> ComponentScore {
        let tokens = text::tokenize(transcript);
        let input = SignalInput {
            tokens: &tokens,
            duration_secs: 30.0,
            polarity: 0.0,
        };
        LexicalDiversity.evaluate(&input, &ScoringConfig::default())
    }

    #[test]
    fn all_unique_words_score_optimal() {
        let score = evaluate("one two three four five");
        assert_eq!(score.score, 100.0);
        assert_eq!(score.band, BandLabel::Optimal);
    }

    #[test]
    fn two_thirds_ratio_lands_in_good() {
        // 9 words, 6 unique -> 0.667, one band below optimal.
        let score = evaluate("sunny morning walks help and calm sunny morning walks");
        match score.raw {
            RawMetric::Diversity {
                ratio,
                total_words,
                unique_words,
            } => {
                assert_eq!(total_words, 9);
                assert_eq!(unique_words, 6);
                assert!((ratio - 2.0 / 3.0).abs() < 1e-9);
            }
            ref other => panic!("unexpected raw metric: {other:?}"),
        }
        assert_eq!(score.score, 80.0);
        assert_eq!(score.band, BandLabel::Good);
    }

    #[test]
    fn heavy_repetition_scores_poor() {
        let score = evaluate("yes yes yes yes yes yes yes yes yes no");
        assert_eq!(score.score, 30.0);
        assert_eq!(score.band, BandLabel::Poor);
    }

    #[test]
    fn empty_transcript_is_very_poor_zero() {
        let score = evaluate("");
        assert_eq!(score.score, 0.0);
        assert_eq!(score.band, BandLabel::VeryPoor);
        match score.raw {
            RawMetric::Diversity { ratio, .. } => assert_eq!(ratio, 0.0),
            ref other => panic!("unexpected raw metric: {other:?}"),
        }
    }
}
