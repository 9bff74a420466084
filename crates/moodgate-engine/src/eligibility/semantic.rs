//! Semantic hard-blocks.
//!
//! These vetoes hold in every selection stage, including the final fallback
//! and the post-selection re-check. They are not part of [`super::RuleTable`]
//! and cannot be replaced by a custom table.

use super::Cond::{self, Is, Not};
use crate::gates::GateLevels;
use crate::gates::Level::*;
use crate::vector::StateKey;

/// `(state, vetoes)`: the state is blocked when any veto holds.
pub const SEMANTIC_BLOCKS: &[(StateKey, &[Cond])] = &[
    // Warm social connection is never reported while worn out, wound up or low.
    (StateKey::Connected, &[Is(FatHigh), Is(TenHigh), Is(Vneg)]),
    // Positively energised needs positive valence and neither fatigue nor tension high.
    (StateKey::Engaged, &[Not(Vpos), Is(FatHigh), Is(TenHigh)]),
    // Calm and capable excludes high tension and low agency.
    (StateKey::Capable, &[Is(TenHigh), Is(AgLow)]),
];

fn vetoes(key: StateKey) -> &'static [Cond] {
    SEMANTIC_BLOCKS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, conds)| *conds)
        .unwrap_or(&[])
}

/// True when a semantic veto applies to `key`.
pub fn semantically_blocked(key: StateKey, levels: &GateLevels) -> bool {
    vetoes(key).iter().any(|c| c.holds(levels))
}

/// Descriptions of the vetoes that fire for `key`.
pub fn semantic_block_reasons(key: StateKey, levels: &GateLevels) -> Vec<String> {
    vetoes(key)
        .iter()
        .filter(|c| c.holds(levels))
        .map(|c| format!("semantic block {}", c.describe()))
        .collect()
}
