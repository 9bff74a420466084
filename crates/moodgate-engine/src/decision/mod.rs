//! Tie-break and uncertainty decision layer.
//!
//! Turns a [`RankingResult`] into a [`DecisionRecord`]. Two outcomes are kept
//! strictly apart:
//!
//! - **Forced uncertainty**: the engine names no state and returns the
//!   `uncertain` sentinel. Rare, and only when every condition in
//!   [`forced_uncertainty`] holds.
//! - **Named but flagged**: every other weak situation keeps the named
//!   state and lowers [`ConfidenceBand`], sets a [`ClarityFlag`] or raises
//!   `weak_match` / `needs_refine`.
//!
//! A tie at the top is resolved first and never leads to forced uncertainty.

mod record;
mod tie_break;
mod uncertainty;


pub use record::{
    ClarityFlag, ConfidenceBand, DecisionRecord, TieMethod, TieResolution, UncertaintyReason,
};
pub use tie_break::{priority_rank, resolve_tie, tied_at_top, PRIORITY};
pub use uncertainty::{clarity_flag, confidence_band, forced_uncertainty, relative_gap};

use tracing::{debug, error};

use crate::config::DecisionConfig;
use crate::error::ContractViolation;
use crate::gates::GateLevels;
use crate::ranking::RankingResult;
use crate::vector::{StateKey, StateVector};

/// Stateless decision layer over a set of thresholds.
#[derive(Debug, Clone, Default)]
pub struct DecisionLayer {
    config: DecisionConfig,
}

impl DecisionLayer {
    pub fn new(config: DecisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Build and validate the decision record for a ranking.
    ///
    /// # Errors
    ///
    /// Returns the [`ContractViolation`] reported by
    /// [`DecisionRecord::validate`] if the record is inconsistent.
    pub fn decide(
        &self,
        ranking: &RankingResult,
        vector: &StateVector,
        levels: &GateLevels,
    ) -> Result<DecisionRecord, ContractViolation> {
        let ranked = ranking.ranked();
        let top = ranking.top();
        let second_score = ranked.get(1).map(|s| s.score);

        let tie = resolve_tie(&tied_at_top(ranked, self.config.tie_epsilon), levels);
        let winner = tie.as_ref().map(|t| t.winner).unwrap_or(top.key);
        if let Some(t) = &tie {
            debug!(tied = t.tied.len(), winner = %t.winner, method = ?t.method, "tie resolved");
        }

        let certainty = vector.certainty;
        let reason = forced_uncertainty(
            winner,
            top.score,
            certainty,
            tie.is_some(),
            levels,
            &self.config,
        );
        let forced_uncertain = reason.is_some();

        let clarity = clarity_flag(certainty, &self.config);
        let relative_gap = relative_gap(top.score, second_score);
        let weak_match = top.score < self.config.weak_match_score;
        let confidence = if forced_uncertain {
            ConfidenceBand::Low
        } else {
            confidence_band(top.score, relative_gap, clarity, &self.config)
        };

        let (macro_key, secondary_key) = if forced_uncertain {
            (StateKey::Uncertain, Some(winner))
        } else {
            let runner_up = ranked.iter().map(|s| s.key).find(|k| *k != winner);
            (winner, runner_up)
        };

        let needs_refine = forced_uncertain
            || confidence == ConfidenceBand::Low
            || weak_match
            || clarity == Some(ClarityFlag::Low)
            || ranking.diagnostics().rescue_used;

        let record = DecisionRecord {
            macro_key,
            secondary_key,
            top_score: top.score,
            second_score,
            relative_gap,
            confidence,
            clarity,
            forced_uncertain,
            uncertainty_reason: reason,
            weak_match,
            needs_refine,
            selection_path: ranking.path(),
            tie,
        };

        if let Err(violation) = record.validate() {
            error!(%violation, "decision record failed validation");
            return Err(violation);
        }

        debug!(
            macro_key = %record.macro_key,
            top = record.top_score,
            confidence = ?record.confidence,
            forced = record.forced_uncertain,
            "decision made"
        );
        Ok(record)
    }
}
