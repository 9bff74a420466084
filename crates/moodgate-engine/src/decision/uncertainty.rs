//! Confidence, clarity and the forced-uncertainty policy.

use super::record::{ClarityFlag, ConfidenceBand, UncertaintyReason};
use crate::config::DecisionConfig;
use crate::eligibility::has_strong_signal;
use crate::gates::GateLevels;
use crate::vector::StateKey;

/// Clarity flag for a certainty value.
///
/// `Low` at or below the floor, `Medium` below comfort, `None` otherwise.
pub fn clarity_flag(certainty: f32, config: &DecisionConfig) -> Option<ClarityFlag> {
    if certainty <= config.certainty_floor {
        Some(ClarityFlag::Low)
    } else if certainty < config.certainty_comfort {
        Some(ClarityFlag::Medium)
    } else {
        None
    }
}

/// `(top − second) / top`; 1.0 without a second score, 0.0 when top is 0.
pub fn relative_gap(top: f32, second: Option<f32>) -> f32 {
    match second {
        None => 1.0,
        Some(_) if top <= 0.0 => 0.0,
        Some(second) => ((top - second) / top).clamp(0.0, 1.0),
    }
}

/// Confidence band from absolute score, gap and clarity.
pub fn confidence_band(
    top_score: f32,
    gap: f32,
    clarity: Option<ClarityFlag>,
    config: &DecisionConfig,
) -> ConfidenceBand {
    let band = if top_score >= config.strong_score && gap >= config.high_gap {
        ConfidenceBand::High
    } else if top_score >= config.weak_match_score {
        ConfidenceBand::Medium
    } else {
        ConfidenceBand::Low
    };
    match clarity {
        Some(ClarityFlag::Low) => band.downgrade(),
        _ => band,
    }
}

/// Decide whether to withhold `winner` and answer `uncertain`.
///
/// Never forces after a tie. Otherwise every condition must hold: the top
/// score is below strong, the winner lacks its strong signal, certainty is
/// at its floor, and the top score is below the uncertainty floor.
pub fn forced_uncertainty(
    winner: StateKey,
    top_score: f32,
    certainty: f32,
    tied: bool,
    levels: &GateLevels,
    config: &DecisionConfig,
) -> Option<UncertaintyReason> {
    let forced = !tied
        && top_score < config.strong_score
        && !has_strong_signal(winner, levels)
        && certainty <= config.certainty_floor
        && top_score < config.uncertainty_floor;

    forced.then_some(UncertaintyReason::WeakMatchAtCertaintyFloor {
        top_score,
        certainty,
    })
}
