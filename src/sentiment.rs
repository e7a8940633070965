//! Sentiment analysis port and the bundled lexicon provider
//!
//! The engine treats sentiment as an external collaborator behind the
//! [`SentimentAnalyzer`] trait: anything that can map text to a polarity in
//! [-1, +1] plugs in here. [`LexiconAnalyzer`] is the in-tree default, a
//! small deterministic word-polarity lexicon with negation and intensifier
//! handling. Whatever a provider returns, the engine clamps defensively
//! before banding.

use crate::text;
use rustc_hash::FxHashMap;

/// Maps transcript text to a sentiment polarity.
///
/// Implementations should return values in [-1, +1]; out-of-range values
/// are clamped by the engine rather than rejected.
pub trait SentimentAnalyzer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

/// Tokens that flip the polarity of the following sentiment word.
const NEGATORS: &[&str] = &["not", "no", "never", "neither", "nor", "cannot", "hardly"];

/// Tokens that scale the polarity of the following sentiment word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("so", 1.2),
    ("quite", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("barely", 0.6),
];

/// Word -> polarity weights. Small on purpose: enough everyday vocabulary to
/// read the tone of a short spoken sample.
const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("wonderful", 1.0),
    ("amazing", 0.9),
    ("fantastic", 0.9),
    ("lovely", 0.8),
    ("beautiful", 0.85),
    ("nice", 0.6),
    ("pleasant", 0.7),
    ("happy", 0.8),
    ("glad", 0.7),
    ("joy", 0.8),
    ("joyful", 0.8),
    ("cheerful", 0.7),
    ("delighted", 0.9),
    ("love", 0.6),
    ("loved", 0.7),
    ("like", 0.3),
    ("liked", 0.4),
    ("enjoy", 0.5),
    ("enjoyed", 0.6),
    ("fun", 0.5),
    ("funny", 0.4),
    ("calm", 0.4),
    ("peaceful", 0.6),
    ("relaxed", 0.5),
    ("comfortable", 0.5),
    ("fresh", 0.4),
    ("warm", 0.4),
    ("bright", 0.4),
    ("sweet", 0.5),
    ("kind", 0.6),
    ("friendly", 0.6),
    ("helpful", 0.5),
    ("interesting", 0.4),
    ("exciting", 0.6),
    ("excited", 0.6),
    ("proud", 0.6),
    ("grateful", 0.7),
    ("thankful", 0.7),
    ("hopeful", 0.6),
    ("better", 0.4),
    ("best", 0.8),
    ("fine", 0.3),
    ("well", 0.3),
    ("perfect", 0.9),
    ("success", 0.6),
    ("successful", 0.6),
    // Negative
    ("bad", -0.7),
    ("terrible", -1.0),
    ("horrible", -1.0),
    ("awful", -0.9),
    ("dreadful", -0.9),
    ("poor", -0.5),
    ("sad", -0.6),
    ("unhappy", -0.7),
    ("miserable", -0.8),
    ("depressed", -0.8),
    ("angry", -0.7),
    ("furious", -0.9),
    ("annoyed", -0.5),
    ("annoying", -0.5),
    ("upset", -0.6),
    ("worried", -0.5),
    ("anxious", -0.6),
    ("afraid", -0.6),
    ("scared", -0.6),
    ("fear", -0.6),
    ("hate", -0.8),
    ("hated", -0.8),
    ("dislike", -0.5),
    ("tired", -0.4),
    ("exhausted", -0.6),
    ("sick", -0.6),
    ("pain", -0.6),
    ("painful", -0.7),
    ("hurt", -0.6),
    ("lonely", -0.6),
    ("alone", -0.3),
    ("lost", -0.4),
    ("confused", -0.4),
    ("difficult", -0.4),
    ("hard", -0.3),
    ("problem", -0.4),
    ("trouble", -0.5),
    ("wrong", -0.5),
    ("worse", -0.6),
    ("worst", -0.9),
    ("fail", -0.6),
    ("failed", -0.6),
    ("failure", -0.7),
    ("broken", -0.5),
    ("boring", -0.4),
    ("stress", -0.5),
    ("stressed", -0.6),
    ("stressful", -0.6),
];

/// Deterministic lexicon-based sentiment provider.
pub struct LexiconAnalyzer {
    lexicon: FxHashMap<&'static str, f64>,
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    /// Average polarity over the sentiment-bearing words, with one-token
    /// lookback for negation ("not good") and intensity ("very good").
    /// Text with no sentiment-bearing words reads as neutral 0.0.
    fn polarity(&self, input: &str) -> f64 {
        let words = text::words(input);

        let mut sum = 0.0;
        let mut hits = 0usize;
        for (i, word) in words.iter().enumerate() {
            let Some(&weight) = self.lexicon.get(word.as_str()) else {
                continue;
            };
            let mut value = weight;
            if i > 0 {
                let prev = words[i - 1].as_str();
                if NEGATORS.contains(&prev) {
                    value *= -0.5;
                } else if let Some(&(_, factor)) =
                    INTENSIFIERS.iter().find(|(name, _)| *name == prev)
                {
                    value *= factor;
                }
            }
            sum += value;
            hits += 1;
        }

        if hits == 0 {
            0.0
        } else {
            (sum / hits as f64).clamp(-1.0, 1.0)
        }
    }
}
