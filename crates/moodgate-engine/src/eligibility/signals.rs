//! Strong (canonical) signal patterns per state.
//!
//! A pattern is a short conjunction that, when it holds, makes the state the
//! obvious reading of the vector. Distinct from eligibility: a state can be
//! eligible without its strong signal, and vice versa.

use super::{all_hold, Cond::{self, Is, Not}};
use crate::gates::GateLevels;
use crate::gates::Level::*;
use crate::vector::StateKey;

pub const STRONG_SIGNALS: &[(StateKey, &[Cond])] = &[
    (StateKey::Grounded, &[Not(Vneg), Is(TenLow), Not(AgLow), Not(CertLow)]),
    (StateKey::Exhausted, &[Is(FatHigh), Is(ArLow)]),
    (StateKey::Overloaded, &[Is(TenHigh), Is(FatHigh)]),
    (StateKey::Pressured, &[Is(TenHigh), Is(ArHigh)]),
    (StateKey::Blocked, &[Is(AgLow), Not(TenLow), Not(ArLow)]),
    (StateKey::Down, &[Is(VveryNeg), Is(ArLow)]),
    (StateKey::Averse, &[Is(OtherBlameHigh), Is(Vneg)]),
    (StateKey::Detached, &[Is(SocLow), Is(ArLow), Not(Vpos)]),
    (StateKey::Connected, &[Is(SocHigh), Is(Vpos), Not(TenHigh)]),
    (StateKey::Capable, &[Is(AgHigh), Is(CertHigh), Not(TenHigh)]),
    (StateKey::Engaged, &[Is(Vpos), Is(ArHigh), Not(FatHigh)]),
    (StateKey::Anxious, &[Is(FearHigh), Is(TenHigh)]),
    (StateKey::Ashamed, &[Is(SelfBlameHigh), Is(Vneg)]),
    (StateKey::Resentful, &[Is(OtherBlameHigh), Not(TenLow)]),
];

/// True when `key` has a pattern and every condition of it holds.
/// Sentinels have no pattern.
pub fn has_strong_signal(key: StateKey, levels: &GateLevels) -> bool {
    STRONG_SIGNALS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, conds)| all_hold(conds, levels))
        .unwrap_or(false)
}
