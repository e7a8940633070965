//! Sentence complexity: average sentence length and conjunction use

use crate::models::{BandLabel, ComponentScore, RawMetric, SignalKind};
use crate::scoring::{self, ScoringConfig};
use crate::signals::{Signal, SignalInput};

/// Connecting words counted as whole tokens, case-insensitive. Substring
/// matching would over-count ("sand" contains "and").
const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "because", "although", "since", "while", "if", "when", "though",
];

pub struct SentenceComplexity;

impl SentenceComplexity {
    fn conjunction_count(words: &[String]) -> usize {
        words
            .iter()
            .filter(|w| CONJUNCTIONS.contains(&w.as_str()))
            .count()
    }
}

impl Signal for SentenceComplexity {
    fn kind(&self) -> SignalKind {
        SignalKind::SentenceComplexity
    }

    fn description(&self) -> &'static str {
        "Average sentence length combined with connecting-word use"
    }

    fn evaluate(&self, input: &SignalInput<'_>, config: &ScoringConfig) -> ComponentScore {
        let total_words = input.tokens.total_words();
        let sentence_count = input.tokens.sentence_count();
        let conjunction_count = Self::conjunction_count(&input.tokens.words);

        let avg_sentence_len = if sentence_count == 0 {
            0.0
        } else {
            total_words as f64 / sentence_count as f64
        };

        let tables = &config.bands.complexity;
        let (score, band) = if sentence_count == 0 {
            (0.0, BandLabel::VeryPoor)
        } else if tables.optimal.matches(avg_sentence_len, conjunction_count) {
            (tables.optimal.score, tables.optimal.label)
        } else {
            scoring::lookup(&tables.fallback, avg_sentence_len)
        };

        ComponentScore {
            kind: self.kind(),
            raw: RawMetric::Complexity {
                avg_sentence_len,
                sentence_count,
                conjunction_count,
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
        SentenceComplexity.evaluate(&input, &ScoringConfig::default())
    }

    #[test]
    fn long_sentence_with_conjunctions_is_optimal() {
        let score =
            evaluate("I went to the store because I needed groceries, and I also wanted to buy flowers.");
        match score.raw {
            RawMetric::Complexity {
                avg_sentence_len,
                sentence_count,
                conjunction_count,
            } => {
                assert_eq!(sentence_count, 1);
                assert_eq!(conjunction_count, 2); // because, and
                assert!((avg_sentence_len - 16.0).abs() < 1e-9);
            }
            ref other => panic!("unexpected raw metric: {other:?}"),
        }
        assert_eq!(score.score, 100.0);
        assert_eq!(score.band, BandLabel::Optimal);
    }

    #[test]
    fn optimal_length_without_conjunctions_falls_through_to_good() {
        // 14 words, one sentence, no connecting words: the gate must not
        // award the optimal band.
        let score =
            evaluate("Yesterday morning the garden looked calm, quiet, bright, fresh, tidy, green, damp, cool, alive.");
        match score.raw {
            RawMetric::Complexity {
                avg_sentence_len,
                conjunction_count,
                ..
            } => {
                assert_eq!(conjunction_count, 0);
                assert!(avg_sentence_len >= 12.0 && avg_sentence_len <= 20.0);
            }
            ref other => panic!("unexpected raw metric: {other:?}"),
        }
        assert_eq!(score.score, 80.0);
        assert_eq!(score.band, BandLabel::Good);
    }

    #[test]
    fn conjunctions_match_whole_tokens_only() {
        // "sand" and "origin" contain "and"/"or" but are not conjunctions.
        let score = evaluate("The sand near the origin was warm.");
        match score.raw {
            RawMetric::Complexity {
                conjunction_count, ..
            } => assert_eq!(conjunction_count, 0),
            ref other => panic!("unexpected raw metric: {other:?}"),
        }
    }

    #[test]
    fn short_choppy_sentences_score_low() {
        let score = evaluate("Yes. No. Maybe. Fine.");
        match score.raw {
            RawMetric::Complexity {
                avg_sentence_len, ..
            } => assert_eq!(avg_sentence_len, 1.0),
            ref other => panic!("unexpected raw metric: {other:?}"),
        }
        assert_eq!(score.score, 20.0);
        assert_eq!(score.band, BandLabel::VeryPoor);
    }

    #[test]
    fn rambling_sentences_score_poor() {
        // One 34-word run-on sentence.
        let words = vec!["word"; 34].join(" ");
        let score = evaluate(&format!("{words}."));
        assert_eq!(score.score, 40.0);
        assert_eq!(score.band, BandLabel::Poor);
    }

    #[test]
    fn no_sentences_is_very_poor_zero() {
        let score = evaluate("");
        assert_eq!(score.score, 0.0);
        assert_eq!(score.band, BandLabel::VeryPoor);
    }
}
