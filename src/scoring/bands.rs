//! Step-function scoring tables
//!
//! Every signal maps its raw metric to a score through an ordered list of
//! [`BandRow`]s: rows are evaluated top-down and the first matching row
//! wins. Rows widen around the optimal zone, so a symmetric band like
//! "within [1.5, 3.5] but outside [2.0, 3.0]" falls out of the ordering
//! without interval-union machinery. Tables are plain data: deserializable
//! from `kina.toml` and printable via `kina bands`.

use crate::models::BandLabel;
use serde::{Deserialize, Serialize};

/// One row of a scoring table. `None` bounds are unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandRow {
    /// Inclusive lower bound on the raw metric.
    #[serde(default)]
    pub min: Option<f64>,
    /// Inclusive upper bound on the raw metric.
    #[serde(default)]
    pub max: Option<f64>,
    /// Score awarded when this row matches.
    pub score: f64,
    /// Band label recorded alongside the score.
    pub label: BandLabel,
}

impl BandRow {
    pub fn new(min: Option<f64>, max: Option<f64>, score: f64, label: BandLabel) -> Self {
        Self {
            min,
            max,
            score,
            label,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |m| value >= m) && self.max.map_or(true, |m| value <= m)
    }
}

/// First matching row wins. Tables always end in a catch-all row; the
/// fallback return covers a malformed user-supplied table.
pub fn lookup(rows: &[BandRow], value: f64) -> (f64, BandLabel) {
    rows.iter()
        .find(|row| row.contains(value))
        .map(|row| (row.score, row.label))
        .unwrap_or((0.0, BandLabel::VeryPoor))
}

/// The sentence-complexity optimal band requires both a length range and at
/// least one conjunction. Transcripts of optimal length with no connecting
/// words fall through to the fallback rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConjunctionGate {
    pub min_len: f64,
    pub max_len: f64,
    pub min_conjunctions: usize,
    pub score: f64,
    pub label: BandLabel,
}

impl ConjunctionGate {
    pub fn matches(&self, avg_len: f64, conjunctions: usize) -> bool {
        avg_len >= self.min_len && avg_len <= self.max_len && conjunctions >= self.min_conjunctions
    }
}

/// Sentence-complexity table: the gated optimal row plus length-only
/// fallback rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityBands {
    pub optimal: ConjunctionGate,
    pub fallback: Vec<BandRow>,
}

/// Band tables for all four signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandTables {
    /// Unique/total word ratio.
    pub lexical: Vec<BandRow>,
    /// Words per second.
    pub fluency: Vec<BandRow>,
    /// Average sentence length, gated on conjunction use.
    pub complexity: ComplexityBands,
    /// Sentiment polarity.
    pub emotional: Vec<BandRow>,
}

impl Default for BandTables {
    fn default() -> Self {
        use BandLabel::*;
        Self {
            lexical: vec![
                BandRow::new(Some(0.75), None, 100.0, Optimal),
                BandRow::new(Some(0.6), None, 80.0, Good),
                BandRow::new(Some(0.4), None, 60.0, Fair),
                BandRow::new(None, None, 30.0, Poor),
            ],
            fluency: vec![
                BandRow::new(Some(2.0), Some(3.0), 100.0, Optimal),
                BandRow::new(Some(1.5), Some(3.5), 80.0, Good),
                BandRow::new(Some(1.0), Some(4.0), 60.0, Fair),
                BandRow::new(Some(0.5), Some(5.0), 40.0, Poor),
                BandRow::new(None, None, 20.0, VeryPoor),
            ],
            complexity: ComplexityBands {
                optimal: ConjunctionGate {
                    min_len: 12.0,
                    max_len: 20.0,
                    min_conjunctions: 1,
                    score: 100.0,
                    label: Optimal,
                },
                fallback: vec![
                    BandRow::new(Some(8.0), Some(25.0), 80.0, Good),
                    BandRow::new(Some(6.0), Some(30.0), 60.0, Fair),
                    BandRow::new(Some(4.0), None, 40.0, Poor),
                    BandRow::new(None, None, 20.0, VeryPoor),
                ],
            },
            emotional: vec![
                BandRow::new(Some(-0.1), Some(0.3), 100.0, Optimal),
                BandRow::new(Some(-0.3), Some(0.5), 80.0, Good),
                BandRow::new(Some(-0.5), Some(0.7), 60.0, Fair),
                BandRow::new(None, None, 40.0, Poor),
            ],
        }
    }
}
