//! Core data models for Kina
//!
//! These models are used throughout the codebase for representing
//! transcripts, component scores, and analysis reports. Everything here is
//! created once per analysis and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A transcribed speech sample, ready for analysis.
///
/// Produced by the external transcription collaborator: the recognizer
/// itself is out of scope, Kina trusts the text as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Raw transcript text (may be empty).
    pub text: String,
    /// Language tag, e.g. `en`, `en-US`, `ja`.
    pub language: String,
    /// Recording length in seconds. Analyses outside the 10-60s window
    /// still run, but fluency quality degrades (a note lands in the report).
    pub duration_secs: f64,
}

impl Transcript {
    pub fn new(text: impl Into<String>, language: impl Into<String>, duration_secs: f64) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            duration_secs,
        }
    }
}

/// The four linguistic signals, in their stable reporting order.
///
/// This order is the order components and recommendations appear in every
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    LexicalDiversity,
    SpeechFluency,
    SentenceComplexity,
    EmotionalExpression,
}

impl SignalKind {
    /// All signals in reporting order.
    pub const ALL: [SignalKind; 4] = [
        SignalKind::LexicalDiversity,
        SignalKind::SpeechFluency,
        SignalKind::SentenceComplexity,
        SignalKind::EmotionalExpression,
    ];

    /// Human-readable label for report headers.
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::LexicalDiversity => "Lexical Diversity",
            SignalKind::SpeechFluency => "Speech Fluency",
            SignalKind::SentenceComplexity => "Sentence Complexity",
            SignalKind::EmotionalExpression => "Emotional Expression",
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Scoring band a component score fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BandLabel {
    Optimal,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl std::fmt::Display for BandLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BandLabel::Optimal => write!(f, "optimal"),
            BandLabel::Good => write!(f, "good"),
            BandLabel::Fair => write!(f, "fair"),
            BandLabel::Poor => write!(f, "poor"),
            BandLabel::VeryPoor => write!(f, "very poor"),
        }
    }
}

/// Where the speaking rate sits relative to the optimal 2-3 words/sec zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateDirection {
    Below,
    Within,
    Above,
}

/// Raw metric behind a component score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum RawMetric {
    /// Unique/total word ratio.
    Diversity {
        ratio: f64,
        total_words: usize,
        unique_words: usize,
    },
    /// Words per second plus which side of the optimal zone it landed on.
    Rate {
        words_per_sec: f64,
        direction: RateDirection,
    },
    /// Average sentence length and connecting-word usage.
    Complexity {
        avg_sentence_len: f64,
        sentence_count: usize,
        conjunction_count: usize,
    },
    /// Sentiment polarity, already clamped into [-1, +1].
    Polarity { value: f64 },
}

/// One scored signal: the raw metric, the 0-100 score, and the band it hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentScore {
    pub kind: SignalKind,
    pub raw: RawMetric,
    pub score: f64,
    pub band: BandLabel,
}

/// Risk tiers, ordered by increasing concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    Low,
    LowModerate,
    Moderate,
    Higher,
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Low => write!(f, "low"),
            RiskTier::LowModerate => write!(f, "low-moderate"),
            RiskTier::Moderate => write!(f, "moderate"),
            RiskTier::Higher => write!(f, "higher"),
        }
    }
}

impl std::str::FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskTier::Low),
            "low-moderate" => Ok(RiskTier::LowModerate),
            "moderate" => Ok(RiskTier::Moderate),
            "higher" => Ok(RiskTier::Higher),
            _ => Err(format!(
                "unknown risk tier '{}'. Valid tiers: low, low-moderate, moderate, higher",
                s
            )),
        }
    }
}

/// Token counts echoed into the report.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TranscriptStats {
    pub total_words: usize,
    pub unique_words: usize,
    pub sentence_count: usize,
}

/// Immutable result of one analysis.
///
/// Everything the rendering layer needs; reporters own all presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Transcript text as analyzed.
    pub text: String,
    /// Language tag the sample was recorded in.
    pub language: String,
    /// Recording length in seconds.
    pub duration_secs: f64,
    /// Token counts from segmentation.
    pub stats: TranscriptStats,
    /// The four component scores, in [`SignalKind::ALL`] order.
    pub components: Vec<ComponentScore>,
    /// Weighted overall score in [0, 100].
    pub overall_score: f64,
    /// Risk tier derived from the overall score.
    pub risk: RiskTier,
    /// Estimated cognitive age (floor 20.0). Derived, not literal.
    pub cognitive_age: f64,
    /// Advisory messages in stable signal order, or exactly one all-clear
    /// message when every component scored well.
    pub recommendations: Vec<String>,
    /// Non-fatal advisories about input quality (e.g. short recordings).
    pub notes: Vec<String>,
}

impl AnalysisReport {
    /// Look up the component score for one signal.
    pub fn component(&self, kind: SignalKind) -> Option<&ComponentScore> {
        self.components.iter().find(|c| c.kind == kind)
    }
}
