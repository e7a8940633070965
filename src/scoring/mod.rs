//! Signal weighting, aggregation, and risk classification
//!
//! The scoring constants live here as one immutable configuration value
//! ([`ScoringConfig`]) passed into the engine, not as scattered literals:
//! band tables, signal weights, risk thresholds, and the cognitive-age
//! model are all plain data with serde defaults, overridable from
//! `kina.toml` and printable via `kina bands`.
//!
//! # Scoring formula
//!
//! ```text
//! overall = 0.30·lexical + 0.25·fluency + 0.25·complexity + 0.20·emotional
//! risk    = Low [80,100] | Low-Moderate [65,80) | Moderate [50,65) | Higher [0,50)
//! age     = max(20, 35 + 0.3·(85 − overall))
//! ```

pub mod bands;

pub use bands::{lookup, BandRow, BandTables, ComplexityBands, ConjunctionGate};

use crate::models::{ComponentScore, RiskTier, SignalKind};
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Fixed weights for the four signals. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    pub lexical: f64,
    pub fluency: f64,
    pub complexity: f64,
    pub emotional: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            lexical: 0.30,
            fluency: 0.25,
            complexity: 0.25,
            emotional: 0.20,
        }
    }
}

impl SignalWeights {
    pub fn for_kind(&self, kind: SignalKind) -> f64 {
        match kind {
            SignalKind::LexicalDiversity => self.lexical,
            SignalKind::SpeechFluency => self.fluency,
            SignalKind::SentenceComplexity => self.complexity,
            SignalKind::EmotionalExpression => self.emotional,
        }
    }

    pub fn sum(&self) -> f64 {
        self.lexical + self.fluency + self.complexity + self.emotional
    }
}

/// Overall-score cutoffs for the risk tiers. Each bound is the inclusive
/// floor of its tier; anything below `moderate` is Higher risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub low: f64,
    pub low_moderate: f64,
    pub moderate: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low: 80.0,
            low_moderate: 65.0,
            moderate: 50.0,
        }
    }
}

impl RiskThresholds {
    pub fn classify(&self, overall: f64) -> RiskTier {
        if overall >= self.low {
            RiskTier::Low
        } else if overall >= self.low_moderate {
            RiskTier::LowModerate
        } else if overall >= self.moderate {
            RiskTier::Moderate
        } else {
            RiskTier::Higher
        }
    }
}

/// Linear deviation model for the estimated cognitive age.
///
/// The estimate is derived, not literal: each point below the assumed
/// optimal overall score adds `slope` years to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeModel {
    pub baseline_age: f64,
    pub optimal_score: f64,
    pub slope: f64,
    pub floor: f64,
}

impl Default for AgeModel {
    fn default() -> Self {
        Self {
            baseline_age: 35.0,
            optimal_score: 85.0,
            slope: 0.3,
            floor: 20.0,
        }
    }
}

impl AgeModel {
    pub fn estimate(&self, overall: f64) -> f64 {
        let deviation = self.optimal_score - overall;
        (self.baseline_age + self.slope * deviation).max(self.floor)
    }
}

/// The full scoring configuration handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: SignalWeights,
    pub risk: RiskThresholds,
    pub age: AgeModel,
    pub bands: BandTables,
}

impl ScoringConfig {
    /// Validate a (possibly user-supplied) configuration. Called at config
    /// load so a bad `kina.toml` fails fast rather than skewing scores.
    pub fn validate(&self) -> Result<()> {
        let sum = self.weights.sum();
        ensure!(
            (sum - 1.0).abs() < 1e-6,
            "signal weights must sum to 1.0, got {sum}"
        );
        ensure!(
            self.risk.low > self.risk.low_moderate && self.risk.low_moderate > self.risk.moderate,
            "risk thresholds must be strictly decreasing (low > low-moderate > moderate)"
        );
        for (name, table) in [
            ("lexical", &self.bands.lexical),
            ("fluency", &self.bands.fluency),
            ("emotional", &self.bands.emotional),
            ("complexity", &self.bands.complexity.fallback),
        ] {
            ensure!(!table.is_empty(), "{name} band table must not be empty");
            let last = &table[table.len() - 1];
            ensure!(
                last.min.is_none() && last.max.is_none(),
                "{name} band table must end in a catch-all row"
            );
        }
        Ok(())
    }
}

/// Weighted overall score, clamped into [0, 100].
///
/// The weights already sum to 1.0, so the clamp is an invariant check
/// rather than a correction.
pub fn aggregate(weights: &SignalWeights, components: &[ComponentScore]) -> f64 {
    let weighted: f64 = components
        .iter()
        .map(|c| weights.for_kind(c.kind) * c.score)
        .sum();
    weighted.clamp(0.0, 100.0)
}
