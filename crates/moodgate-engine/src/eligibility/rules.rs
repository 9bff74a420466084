//! The built-in eligibility table.

use super::{Cond, EligibilityRule};
use crate::gates::Level::*;
use crate::vector::StateKey;

use Cond::{Any, Is, Not};

/// One rule per rankable state, macros first, then deep-mode states.
pub const STANDARD_RULES: &[EligibilityRule] = &[
    EligibilityRule {
        key: StateKey::Grounded,
        requires: &[Not(Vneg), Not(TenHigh), Not(FatHigh), Not(AgLow), Not(CertLow)],
        blocks: &[Is(VveryNeg), Is(TenHigh)],
        hard_blocks: Some(&[Is(VveryNeg)]),
    },
    EligibilityRule {
        key: StateKey::Exhausted,
        requires: &[Is(FatHigh), Not(TenHigh)],
        blocks: &[Is(ArHigh)],
        hard_blocks: None,
    },
    EligibilityRule {
        key: StateKey::Overloaded,
        requires: &[Is(TenHigh), Any(&[FatHigh, AgLow])],
        blocks: &[Is(Vpos)],
        hard_blocks: None,
    },
    EligibilityRule {
        key: StateKey::Pressured,
        requires: &[Is(TenHigh), Not(ArLow), Not(FatHigh)],
        blocks: &[Is(Vpos), Is(FatHigh)],
        hard_blocks: Some(&[Is(Vpos)]),
    },
    EligibilityRule {
        key: StateKey::Blocked,
        requires: &[Is(AgLow), Not(TenLow), Not(FatHigh)],
        blocks: &[Is(Vpos), Is(AgHigh)],
        hard_blocks: Some(&[Is(AgHigh)]),
    },
    EligibilityRule {
        key: StateKey::Down,
        requires: &[Is(Vneg), Is(ArLow)],
        blocks: &[Is(Vpos), Is(ArHigh)],
        hard_blocks: Some(&[Is(Vpos)]),
    },
    EligibilityRule {
        key: StateKey::Averse,
        requires: &[Is(Vneg), Not(ArLow), Any(&[OtherBlameHigh, TenHigh])],
        blocks: &[Is(Vpos)],
        hard_blocks: None,
    },
    EligibilityRule {
        key: StateKey::Detached,
        requires: &[Is(SocLow), Not(Vpos), Not(TenHigh)],
        blocks: &[Is(SocHigh), Is(TenHigh)],
        hard_blocks: Some(&[Is(SocHigh)]),
    },
    EligibilityRule {
        key: StateKey::Connected,
        requires: &[Is(SocHigh), Is(Vpos)],
        blocks: &[Is(FatHigh), Is(TenHigh), Is(Vneg)],
        hard_blocks: None,
    },
    EligibilityRule {
        key: StateKey::Capable,
        requires: &[Is(AgHigh), Not(Vneg), Not(CertLow)],
        blocks: &[Is(TenHigh), Is(AgLow)],
        hard_blocks: None,
    },
    EligibilityRule {
        key: StateKey::Engaged,
        requires: &[Is(Vpos), Is(ArHigh)],
        blocks: &[Not(Vpos), Is(FatHigh), Is(TenHigh)],
        hard_blocks: None,
    },
    EligibilityRule {
        key: StateKey::Anxious,
        requires: &[Is(FearHigh), Not(ArLow)],
        blocks: &[Is(Vpos)],
        hard_blocks: None,
    },
    EligibilityRule {
        key: StateKey::Ashamed,
        requires: &[Is(SelfBlameHigh), Is(Vneg)],
        blocks: &[Is(Vpos)],
        hard_blocks: None,
    },
    EligibilityRule {
        key: StateKey::Resentful,
        requires: &[Is(OtherBlameHigh), Is(Vneg)],
        blocks: &[Is(Vpos)],
        hard_blocks: None,
    },
];
