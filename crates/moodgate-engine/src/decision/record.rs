//! Decision record and its quality signals.

use serde::{Deserialize, Serialize};

use crate::error::ContractViolation;
use crate::ranking::SelectionPath;
use crate::vector::StateKey;

/// How far a named answer can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    Low,
    Medium,
    High,
}

impl ConfidenceBand {
    /// One step lower; `Low` stays `Low`.
    pub fn downgrade(self) -> Self {
        match self {
            ConfidenceBand::High => ConfidenceBand::Medium,
            ConfidenceBand::Medium | ConfidenceBand::Low => ConfidenceBand::Low,
        }
    }
}

/// Non-forcing flag raised when reported certainty is below comfort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClarityFlag {
    /// Certainty at its effective minimum.
    Low,
    /// Certainty below the comfortable level but above the floor.
    Medium,
}

/// Why the engine declined to name a state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UncertaintyReason {
    /// Top score under the floor, certainty at its minimum, and the winner
    /// without its strong signal.
    WeakMatchAtCertaintyFloor { top_score: f32, certainty: f32 },
}

/// Rule that settled a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieMethod {
    /// Exactly one tied state matched its strong signal.
    StrongSignal,
    /// Fixed priority order.
    Priority,
}

/// Diagnostics for a resolved top-score tie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieResolution {
    /// Tied states in ranking order.
    pub tied: Vec<StateKey>,
    pub method: TieMethod,
    pub winner: StateKey,
}

/// Final output of one classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Chosen state, or `uncertain` when forced.
    pub macro_key: StateKey,
    /// Runner-up; the withheld winner when forced uncertain.
    pub secondary_key: Option<StateKey>,
    pub top_score: f32,
    pub second_score: Option<f32>,
    /// `(top − second) / top`, 1.0 without a second entry.
    pub relative_gap: f32,
    pub confidence: ConfidenceBand,
    pub clarity: Option<ClarityFlag>,
    pub forced_uncertain: bool,
    pub uncertainty_reason: Option<UncertaintyReason>,
    /// Top score below the weak-match threshold.
    pub weak_match: bool,
    pub needs_refine: bool,
    pub selection_path: SelectionPath,
    pub tie: Option<TieResolution>,
}

impl DecisionRecord {
    /// Check the record's internal invariants.
    ///
    /// # Errors
    ///
    /// - [`ContractViolation::UncertaintyMismatch`] unless
    ///   `macro_key == uncertain ⇔ forced_uncertain`.
    /// - [`ContractViolation::UncertaintyReasonMismatch`] unless a reason is
    ///   present exactly when forced.
    /// - [`ContractViolation::SentinelWinner`] when another sentinel, or any
    ///   sentinel as tie winner, reached the output.
    pub fn validate(&self) -> Result<(), ContractViolation> {
        let is_uncertain = self.macro_key == StateKey::Uncertain;
        if is_uncertain != self.forced_uncertain {
            return Err(ContractViolation::UncertaintyMismatch {
                macro_key: self.macro_key,
                forced_uncertain: self.forced_uncertain,
            });
        }
        if self.uncertainty_reason.is_some() != self.forced_uncertain {
            return Err(ContractViolation::UncertaintyReasonMismatch {
                reason_present: self.uncertainty_reason.is_some(),
                forced_uncertain: self.forced_uncertain,
            });
        }
        if self.macro_key.is_sentinel() && !is_uncertain {
            return Err(ContractViolation::SentinelWinner(self.macro_key));
        }
        if let Some(tie) = &self.tie {
            if tie.winner.is_sentinel() {
                return Err(ContractViolation::SentinelWinner(tie.winner));
            }
        }
        Ok(())
    }

    /// True when a named state was returned.
    pub fn is_named(&self) -> bool {
        !self.forced_uncertain
    }
}
