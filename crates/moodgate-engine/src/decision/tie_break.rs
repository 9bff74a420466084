//! Deterministic resolution of top-score ties.

use super::record::{TieMethod, TieResolution};
use crate::eligibility::has_strong_signal;
use crate::gates::GateLevels;
use crate::ranking::ScoredState;
use crate::vector::StateKey;

/// Total order over rankable states; earlier wins a tie.
pub const PRIORITY: [StateKey; 14] = [
    StateKey::Overloaded,
    StateKey::Exhausted,
    StateKey::Down,
    StateKey::Pressured,
    StateKey::Blocked,
    StateKey::Averse,
    StateKey::Anxious,
    StateKey::Ashamed,
    StateKey::Resentful,
    StateKey::Detached,
    StateKey::Capable,
    StateKey::Grounded,
    StateKey::Engaged,
    StateKey::Connected,
];

/// Position in [`PRIORITY`]; sentinels sort last.
pub fn priority_rank(key: StateKey) -> usize {
    PRIORITY.iter().position(|k| *k == key).unwrap_or(usize::MAX)
}

/// Leading entries whose score is within `epsilon` of the top score.
///
/// `ranked` must be sorted by descending score.
pub fn tied_at_top(ranked: &[ScoredState], epsilon: f32) -> Vec<StateKey> {
    let Some(top) = ranked.first() else {
        return Vec::new();
    };
    ranked
        .iter()
        .take_while(|s| top.score - s.score <= epsilon)
        .map(|s| s.key)
        .collect()
}

/// Pick one winner from a tied set.
///
/// Returns `None` when fewer than two rankable states are tied. Sentinels in
/// `tied` are ignored, so the winner is never a sentinel.
pub fn resolve_tie(tied: &[StateKey], levels: &GateLevels) -> Option<TieResolution> {
    let tied: Vec<StateKey> = tied.iter().copied().filter(|k| !k.is_sentinel()).collect();
    if tied.len() < 2 {
        return None;
    }

    let signalled: Vec<StateKey> = tied
        .iter()
        .copied()
        .filter(|k| has_strong_signal(*k, levels))
        .collect();
    if let [only] = signalled.as_slice() {
        return Some(TieResolution {
            winner: *only,
            method: TieMethod::StrongSignal,
            tied,
        });
    }

    let winner = tied.iter().copied().min_by_key(|k| priority_rank(*k))?;
    Some(TieResolution {
        winner,
        method: TieMethod::Priority,
        tied,
    })
}
