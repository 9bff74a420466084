//! Micro-state evidence profiles.

use serde::Serialize;

use crate::tags::*;
use crate::vector::StateKey;

/// Tag profile of one micro state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MicroProfile {
    pub key: &'static str,
    /// Tags that define the micro state.
    pub must: &'static [&'static str],
    /// Tags that corroborate it.
    pub supporting: &'static [&'static str],
    /// Axis and context markers worth a small bonus.
    pub context: &'static [&'static str],
}

const fn profile(
    key: &'static str,
    must: &'static [&'static str],
    supporting: &'static [&'static str],
    context: &'static [&'static str],
) -> MicroProfile {
    MicroProfile {
        key,
        must,
        supporting,
        context,
    }
}

const GROUNDED: &[MicroProfile] = &[
    profile("settled", &[TENSION_LOW, BODY_CALM], &[REST_RECENT], &[CTX_HOME]),
    profile("steady", &[CLARITY_HIGH], &[AGENCY_HIGH], &[]),
    profile("content", &[GRATITUDE_PRESENT], &[BELONGING_PRESENT], &[]),
];

const EXHAUSTED: &[MicroProfile] = &[
    profile("drained", &[ENERGY_LOW, WORKLOAD_HIGH], &[TASKS_MANY], &[CTX_WORK]),
    profile("sleep_deprived", &[SLEEP_POOR], &[FATIGUE_HIGH], &[]),
    profile("depleted", &[FATIGUE_HIGH, MEANING_LOW], &[SOCIAL_LOW], &[]),
];

const OVERLOADED: &[MicroProfile] = &[
    profile("swamped", &[TASKS_MANY, WORKLOAD_HIGH], &[DEADLINE_PRESENT], &[CTX_WORK]),
    profile("flooded", &[TENSION_HIGH, CLARITY_LOW], &[RUMINATION_PRESENT], &[]),
    profile("stretched_thin", &[BOUNDARY_CROSSED], &[WORKLOAD_HIGH, SOCIAL_CONFLICT], &[]),
];

const PRESSURED: &[MicroProfile] = &[
    profile("rushed", &[DEADLINE_PRESENT, TENSION_HIGH], &[], &[CTX_WORK]),
    profile("cornered", &[OPTIONS_FEW, AGENCY_LOW], &[CONTROL_LOST], &[]),
    profile("scrutinized", &[EVALUATION_PRESENT], &[FEAR_HIGH, SOCIAL_EXPOSED], &[]),
];

const BLOCKED: &[MicroProfile] = &[
    profile("stuck", &[PROGRESS_STALLED], &[AGENCY_LOW], &[]),
    profile("thwarted", &[OBSTACLE_EXTERNAL, BLAME_OTHER], &[TENSION_HIGH], &[]),
    profile("powerless", &[CONTROL_LOST], &[AGENCY_LOW, OPTIONS_FEW], &[]),
];

const DOWN: &[MicroProfile] = &[
    profile("sad", &[MOOD_LOW, LOSS_PRESENT], &[], &[]),
    profile("discouraged", &[PROGRESS_STALLED, MEANING_LOW], &[], &[]),
    profile("lonely", &[LONELINESS_PRESENT], &[SOCIAL_LOW, WITHDRAWAL_PRESENT], &[]),
];

const AVERSE: &[MicroProfile] = &[
    profile("irritated", &[BLAME_OTHER], &[TENSION_HIGH], &[]),
    profile("repelled", &[DISGUST_PRESENT], &[BOUNDARY_CROSSED], &[]),
    profile("defensive", &[SOCIAL_CONFLICT], &[FEAR_HIGH], &[]),
];

const DETACHED: &[MicroProfile] = &[
    profile("numb", &[NUMBNESS_PRESENT], &[ENERGY_LOW], &[]),
    profile("withdrawn", &[WITHDRAWAL_PRESENT, SOCIAL_LOW], &[], &[]),
    profile("disengaged", &[MEANING_LOW, INTEREST_LOW], &[], &[]),
];

const CONNECTED: &[MicroProfile] = &[
    profile("supported", &[SOCIAL_SUPPORT], &[], &[]),
    profile("belonging", &[BELONGING_PRESENT], &[SOCIAL_HIGH], &[]),
    profile("grateful", &[GRATITUDE_PRESENT], &[SOCIAL_HIGH], &[]),
];

const CAPABLE: &[MicroProfile] = &[
    profile("prepared", &[PREPARATION_DONE], &[CLARITY_HIGH], &[]),
    profile("in_control", &[AGENCY_HIGH, CLARITY_HIGH], &[], &[]),
    profile("competent", &[MASTERY_PRESENT], &[AGENCY_HIGH], &[]),
];

const ENGAGED: &[MicroProfile] = &[
    profile("focused", &[FOCUS_HIGH], &[FLOW_PRESENT], &[CTX_WORK]),
    profile("curious", &[CURIOSITY_PRESENT], &[NOVELTY_PRESENT, INTEREST_HIGH], &[]),
    profile("playful", &[PLAY_PRESENT], &[SOCIAL_HIGH], &[CTX_SOCIAL]),
];

/// Every macro's micro catalogue, in macro declaration order.
pub const MICRO_CATALOGUE: &[(StateKey, &[MicroProfile])] = &[
    (StateKey::Grounded, GROUNDED),
    (StateKey::Exhausted, EXHAUSTED),
    (StateKey::Overloaded, OVERLOADED),
    (StateKey::Pressured, PRESSURED),
    (StateKey::Blocked, BLOCKED),
    (StateKey::Down, DOWN),
    (StateKey::Averse, AVERSE),
    (StateKey::Detached, DETACHED),
    (StateKey::Connected, CONNECTED),
    (StateKey::Capable, CAPABLE),
    (StateKey::Engaged, ENGAGED),
];

/// Micro profiles owned by `key`; empty for deep-mode states and sentinels.
pub fn catalogue(key: StateKey) -> &'static [MicroProfile] {
    MICRO_CATALOGUE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, profiles)| *profiles)
        .unwrap_or(&[])
}
