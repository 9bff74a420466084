//! Named states and their reference vectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StateVector;

/// How a state participates in ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    /// Rankable in every mode.
    Macro,
    /// Rankable only in the evidence-rich deep mode.
    Deep,
    /// Fallback label, never ranked.
    Sentinel,
}

/// Every state key the engine knows about.
///
/// Declaration order is significant: rankings with equal scores keep this
/// order, which keeps output deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateKey {
    Grounded,
    Exhausted,
    Overloaded,
    Pressured,
    Blocked,
    Down,
    Averse,
    Detached,
    Connected,
    Capable,
    Engaged,
    Anxious,
    Ashamed,
    Resentful,
    Uncertain,
    Mixed,
}

impl StateKey {
    /// Full table, declaration order.
    pub const ALL: [StateKey; 16] = [
        StateKey::Grounded,
        StateKey::Exhausted,
        StateKey::Overloaded,
        StateKey::Pressured,
        StateKey::Blocked,
        StateKey::Down,
        StateKey::Averse,
        StateKey::Detached,
        StateKey::Connected,
        StateKey::Capable,
        StateKey::Engaged,
        StateKey::Anxious,
        StateKey::Ashamed,
        StateKey::Resentful,
        StateKey::Uncertain,
        StateKey::Mixed,
    ];

    /// The eleven macros rankable in every mode.
    pub const MACROS: [StateKey; 11] = [
        StateKey::Grounded,
        StateKey::Exhausted,
        StateKey::Overloaded,
        StateKey::Pressured,
        StateKey::Blocked,
        StateKey::Down,
        StateKey::Averse,
        StateKey::Detached,
        StateKey::Connected,
        StateKey::Capable,
        StateKey::Engaged,
    ];

    /// States only ranked in deep mode.
    pub const DEEP: [StateKey; 3] = [StateKey::Anxious, StateKey::Ashamed, StateKey::Resentful];

    pub const fn class(self) -> StateClass {
        match self {
            StateKey::Anxious | StateKey::Ashamed | StateKey::Resentful => StateClass::Deep,
            StateKey::Uncertain | StateKey::Mixed => StateClass::Sentinel,
            _ => StateClass::Macro,
        }
    }

    #[inline]
    pub const fn is_macro(self) -> bool {
        matches!(self.class(), StateClass::Macro)
    }

    #[inline]
    pub const fn is_sentinel(self) -> bool {
        matches!(self.class(), StateClass::Sentinel)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            StateKey::Grounded => "grounded",
            StateKey::Exhausted => "exhausted",
            StateKey::Overloaded => "overloaded",
            StateKey::Pressured => "pressured",
            StateKey::Blocked => "blocked",
            StateKey::Down => "down",
            StateKey::Averse => "averse",
            StateKey::Detached => "detached",
            StateKey::Connected => "connected",
            StateKey::Capable => "capable",
            StateKey::Engaged => "engaged",
            StateKey::Anxious => "anxious",
            StateKey::Ashamed => "ashamed",
            StateKey::Resentful => "resentful",
            StateKey::Uncertain => "uncertain",
            StateKey::Mixed => "mixed",
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        StateKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == needle)
            .ok_or_else(|| format!("unknown state key '{}'", s))
    }
}

//                          val   aro   ten   agy   sbl   obl   cer   soc   fat   fear
const GROUNDED: [f32; 10] = [1.0, 0.5, 0.3, 1.5, 0.0, 0.0, 1.5, 1.0, 0.3, 0.0];
const EXHAUSTED: [f32; 10] = [-1.0, 0.0, 1.0, 0.6, 0.3, 0.2, 0.8, 0.5, 2.7, 0.3];
const OVERLOADED: [f32; 10] = [-2.0, 1.0, 2.6, 0.4, 0.4, 0.4, 0.6, 0.6, 1.8, 1.2];
const PRESSURED: [f32; 10] = [-1.0, 2.0, 2.4, 1.0, 0.3, 0.3, 1.0, 0.8, 0.8, 1.2];
const BLOCKED: [f32; 10] = [-1.0, 1.2, 1.8, 0.3, 0.3, 1.2, 0.8, 0.6, 0.8, 0.5];
const DOWN: [f32; 10] = [-2.2, 0.2, 1.0, 0.5, 1.0, 0.2, 0.8, 0.4, 1.8, 0.6];
const AVERSE: [f32; 10] = [-1.5, 1.5, 2.0, 1.0, 0.2, 1.5, 1.2, 0.5, 0.6, 0.6];
const DETACHED: [f32; 10] = [-0.5, 0.2, 0.6, 0.8, 0.2, 0.2, 0.6, 0.2, 1.2, 0.3];
const CONNECTED: [f32; 10] = [2.0, 1.0, 0.3, 1.3, 0.0, 0.0, 1.4, 1.9, 0.3, 0.0];
const CAPABLE: [f32; 10] = [1.5, 1.3, 0.5, 1.9, 0.0, 0.0, 1.8, 1.0, 0.3, 0.0];
const ENGAGED: [f32; 10] = [2.3, 2.4, 0.8, 1.5, 0.0, 0.0, 1.4, 1.2, 0.2, 0.0];
const ANXIOUS: [f32; 10] = [-1.5, 1.8, 2.4, 0.6, 0.4, 0.2, 0.4, 0.6, 0.8, 2.6];
const ASHAMED: [f32; 10] = [-1.8, 0.8, 1.6, 0.7, 1.9, 0.1, 1.0, 0.5, 1.0, 1.0];
const RESENTFUL: [f32; 10] = [-1.6, 1.4, 1.9, 0.9, 0.1, 1.9, 1.3, 0.5, 0.8, 0.4];
const UNCERTAIN: [f32; 10] = [0.0, 0.5, 1.0, 1.0, 0.3, 0.3, 0.0, 1.0, 0.5, 0.5];
const MIXED: [f32; 10] = [0.0, 1.0, 1.2, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5];

/// Reference vector for a state.
///
/// The table is a compile-time constant; every entry is already in range.
pub fn centroid(key: StateKey) -> StateVector {
    let raw = match key {
        StateKey::Grounded => GROUNDED,
        StateKey::Exhausted => EXHAUSTED,
        StateKey::Overloaded => OVERLOADED,
        StateKey::Pressured => PRESSURED,
        StateKey::Blocked => BLOCKED,
        StateKey::Down => DOWN,
        StateKey::Averse => AVERSE,
        StateKey::Detached => DETACHED,
        StateKey::Connected => CONNECTED,
        StateKey::Capable => CAPABLE,
        StateKey::Engaged => ENGAGED,
        StateKey::Anxious => ANXIOUS,
        StateKey::Ashamed => ASHAMED,
        StateKey::Resentful => RESENTFUL,
        StateKey::Uncertain => UNCERTAIN,
        StateKey::Mixed => MIXED,
    };
    StateVector::new(raw)
}
