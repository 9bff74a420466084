//! Topic-gate closure.
//!
//! The adaptive question policy asks one thing of the engine: for a macro
//! and the evidence gathered so far, which topic gates are still open.
//! [`TOPIC_GATE_TAGS`] is the single table of which tags close which gate.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tags;
use crate::vector::StateKey;

/// Follow-up topics a question policy can still ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicGate {
    Agency,
    Clarity,
    Workload,
    Social,
}

impl TopicGate {
    pub const ALL: [TopicGate; 4] = [
        TopicGate::Agency,
        TopicGate::Clarity,
        TopicGate::Workload,
        TopicGate::Social,
    ];

    /// Tags that close this gate.
    pub fn closing_tags(self) -> &'static [&'static str] {
        TOPIC_GATE_TAGS
            .iter()
            .find(|(gate, _)| *gate == self)
            .map(|(_, tags)| *tags)
            .unwrap_or(&[])
    }
}

impl fmt::Display for TopicGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TopicGate::Agency => "agency",
            TopicGate::Clarity => "clarity",
            TopicGate::Workload => "workload",
            TopicGate::Social => "social",
        };
        f.write_str(name)
    }
}

/// Which evidence tags close which topic gate.
pub const TOPIC_GATE_TAGS: &[(TopicGate, &[&str])] = &[
    (
        TopicGate::Agency,
        &[tags::AGENCY_LOW, tags::AGENCY_HIGH, tags::CONTROL_LOST, tags::OPTIONS_FEW],
    ),
    (TopicGate::Clarity, &[tags::CLARITY_LOW, tags::CLARITY_HIGH]),
    (
        TopicGate::Workload,
        &[tags::WORKLOAD_HIGH, tags::TASKS_MANY, tags::DEADLINE_PRESENT],
    ),
    (
        TopicGate::Social,
        &[
            tags::SOCIAL_LOW,
            tags::SOCIAL_HIGH,
            tags::SOCIAL_SUPPORT,
            tags::SOCIAL_CONFLICT,
            tags::LONELINESS_PRESENT,
            tags::BELONGING_PRESENT,
        ],
    ),
];

/// Gates a macro needs settled before its answer is worth refining further.
pub fn relevant_gates(key: StateKey) -> &'static [TopicGate] {
    use TopicGate::*;
    match key {
        StateKey::Grounded => &[Agency, Clarity],
        StateKey::Exhausted => &[Workload],
        StateKey::Overloaded => &[Agency, Clarity, Workload],
        StateKey::Pressured => &[Agency, Workload],
        StateKey::Blocked => &[Agency],
        StateKey::Down | StateKey::Averse | StateKey::Detached | StateKey::Connected => &[Social],
        StateKey::Capable => &[Agency, Clarity],
        StateKey::Engaged => &[Clarity],
        StateKey::Anxious => &[Clarity],
        StateKey::Ashamed => &[Social],
        StateKey::Resentful => &[Agency, Social],
        StateKey::Uncertain | StateKey::Mixed => &TopicGate::ALL,
    }
}

/// Closure state of the four topic gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateClosure {
    pub agency: bool,
    pub clarity: bool,
    pub workload: bool,
    pub social: bool,
}

impl GateClosure {
    pub fn is_closed(&self, gate: TopicGate) -> bool {
        match gate {
            TopicGate::Agency => self.agency,
            TopicGate::Clarity => self.clarity,
            TopicGate::Workload => self.workload,
            TopicGate::Social => self.social,
        }
    }

    pub fn all_closed(&self) -> bool {
        TopicGate::ALL.iter().all(|g| self.is_closed(*g))
    }

    /// Open gates in [`TopicGate::ALL`] order.
    pub fn open_gates(&self) -> Vec<TopicGate> {
        TopicGate::ALL.iter().copied().filter(|g| !self.is_closed(*g)).collect()
    }
}

/// Which topic gates are closed for `key` given the evidence in `evidence`.
///
/// A gate is closed when it is not relevant to the macro or when any of
/// its closing tags is present.
///
/// # Example
///
/// ```
/// use moodgate_engine::gates::{gate_closure, TopicGate};
/// use moodgate_engine::vector::StateKey;
///
/// let closure = gate_closure(StateKey::Pressured, &["sig.deadline.present"]);
/// assert_eq!(closure.open_gates(), vec![TopicGate::Agency]);
/// ```
pub fn gate_closure<S: AsRef<str>>(key: StateKey, evidence: &[S]) -> GateClosure {
    let present: BTreeSet<&str> = evidence.iter().map(|t| t.as_ref()).collect();
    let relevant = relevant_gates(key);
    let closed = |gate: TopicGate| {
        !relevant.contains(&gate) || gate.closing_tags().iter().any(|t| present.contains(t))
    };
    GateClosure {
        agency: closed(TopicGate::Agency),
        clarity: closed(TopicGate::Clarity),
        workload: closed(TopicGate::Workload),
        social: closed(TopicGate::Social),
    }
}
