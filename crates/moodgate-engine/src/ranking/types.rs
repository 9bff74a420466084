//! Ranking result types.

use serde::{Deserialize, Serialize};

use crate::error::ContractViolation;
use crate::vector::StateKey;

/// Which candidate pool the selector ranks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    /// Lightweight baseline mode: the eleven macros only.
    #[default]
    Baseline,
    /// Evidence-rich mode: macros plus the deep-mode states.
    Deep,
}

impl EngineMode {
    /// Candidate pool in declaration order.
    pub fn candidates(self) -> Vec<StateKey> {
        match self {
            EngineMode::Baseline => StateKey::MACROS.to_vec(),
            EngineMode::Deep => StateKey::MACROS.iter().chain(StateKey::DEEP.iter()).copied().collect(),
        }
    }
}

/// A state and its similarity to the input vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredState {
    pub key: StateKey,
    pub score: f32,
}

impl ScoredState {
    pub fn new(key: StateKey, score: f32) -> Self {
        Self { key, score }
    }
}

/// Selector stage that produced the ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPath {
    Strict,
    Hard,
    FinalFallback,
    LastResort,
}

impl SelectionPath {
    /// Anything past the strict stage is a rescue.
    pub fn is_rescue(self) -> bool {
        !matches!(self, SelectionPath::Strict)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SelectionPath::Strict => "strict",
            SelectionPath::Hard => "hard",
            SelectionPath::FinalFallback => "final_fallback",
            SelectionPath::LastResort => "last_resort",
        }
    }
}

/// A winner replaced by the post-selection semantic re-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub blocked: StateKey,
    pub replacement: StateKey,
}

/// Counts gathered while walking the stages.
///
/// Counts for stages that were never entered are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionDiagnostics {
    pub candidate_count: usize,
    pub strict_count: usize,
    pub hard_count: Option<usize>,
    pub fallback_count: Option<usize>,
    pub rescue_used: bool,
    pub substitution: Option<Substitution>,
}

/// Ordered, never-empty candidate list plus diagnostics.
///
/// Only constructible through [`RankingResult::new`], which rejects empty lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingResult {
    ranked: Vec<ScoredState>,
    path: SelectionPath,
    diagnostics: SelectionDiagnostics,
}

impl RankingResult {
    /// Build a result, rejecting an empty list.
    pub fn new(
        ranked: Vec<ScoredState>,
        path: SelectionPath,
        diagnostics: SelectionDiagnostics,
    ) -> Result<Self, ContractViolation> {
        if ranked.is_empty() {
            return Err(ContractViolation::EmptyRanking {
                pool_size: diagnostics.candidate_count,
            });
        }
        Ok(Self {
            ranked,
            path,
            diagnostics,
        })
    }

    pub fn ranked(&self) -> &[ScoredState] {
        &self.ranked
    }

    /// The winner. The list is never empty.
    pub fn top(&self) -> ScoredState {
        self.ranked[0]
    }

    pub fn path(&self) -> SelectionPath {
        self.path
    }

    pub fn diagnostics(&self) -> &SelectionDiagnostics {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
