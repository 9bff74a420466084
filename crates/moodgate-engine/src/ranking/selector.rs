//! Four-stage ranking and fallback selector.

use tracing::{debug, error, warn};

use super::types::{
    EngineMode, RankingResult, ScoredState, SelectionDiagnostics, SelectionPath, Substitution,
};
use crate::eligibility::{semantically_blocked, Pass, RuleTable};
use crate::error::ContractViolation;
use crate::gates::GateLevels;
use crate::vector::{centroid, similarity, StateKey, StateVector};

/// Ranks a candidate pool by similarity and filters it through the
/// eligibility passes until a stage yields candidates.
///
/// ```text
/// strict ──empty──▶ hard ──empty──▶ final fallback ──empty──▶ last resort
///   │                │                  │                        │
///   └────────────────┴──────────────────┴────────────────────────┘
///                                       ▼
///                          semantic re-check + walk-down
/// ```
///
/// # Example
///
/// ```
/// use moodgate_engine::gates::GateLevels;
/// use moodgate_engine::mapper::{map_baseline, BaselineRatings};
/// use moodgate_engine::ranking::{EngineMode, RankingSelector, SelectionPath};
/// use moodgate_engine::vector::StateKey;
///
/// let vector = map_baseline(&BaselineRatings::new(2, 2, 6, 3, 2, 3));
/// let levels = GateLevels::from_vector(&vector);
/// let ranking = RankingSelector::new(EngineMode::Baseline)
///     .select(&vector, &levels)
///     .unwrap();
/// assert_eq!(ranking.path(), SelectionPath::Strict);
/// assert_eq!(ranking.top().key, StateKey::Overloaded);
/// ```
#[derive(Debug, Clone)]
pub struct RankingSelector {
    rules: RuleTable,
    candidates: Vec<StateKey>,
}

impl RankingSelector {
    /// Selector over the pool for `mode` with the standard rules.
    pub fn new(mode: EngineMode) -> Self {
        Self {
            rules: RuleTable::standard(),
            candidates: mode.candidates(),
        }
    }

    /// Selector over an explicit pool. Sentinels and duplicates are dropped.
    pub fn with_candidates(candidates: &[StateKey]) -> Self {
        let mut pool: Vec<StateKey> = Vec::with_capacity(candidates.len());
        for key in candidates.iter().copied().filter(|k| !k.is_sentinel()) {
            if !pool.contains(&key) {
                pool.push(key);
            }
        }
        Self {
            rules: RuleTable::standard(),
            candidates: pool,
        }
    }

    /// Replace the rule table.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    pub fn candidates(&self) -> &[StateKey] {
        &self.candidates
    }

    /// Every candidate scored and sorted by descending similarity.
    ///
    /// Equal scores keep pool order (stable sort).
    pub fn rank_all(&self, vector: &StateVector) -> Vec<ScoredState> {
        let mut scored: Vec<ScoredState> = self
            .candidates
            .iter()
            .map(|&key| ScoredState::new(key, similarity(vector, &centroid(key))))
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    fn filter_pass(&self, full: &[ScoredState], levels: &GateLevels, pass: Pass) -> Vec<ScoredState> {
        full.iter()
            .copied()
            .filter(|s| self.rules.is_eligible(s.key, levels, pass))
            .collect()
    }

    /// Run the stages and the post-selection re-check.
    ///
    /// # Errors
    ///
    /// - [`ContractViolation::EmptyRanking`] when the pool is empty, so even
    ///   the last-resort stage has nothing to return.
    /// - [`ContractViolation::NoUnblockedCandidate`] when every entry of the
    ///   selected list is semantically blocked.
    pub fn select(
        &self,
        vector: &StateVector,
        levels: &GateLevels,
    ) -> Result<RankingResult, ContractViolation> {
        let full = self.rank_all(vector);
        let mut diagnostics = SelectionDiagnostics {
            candidate_count: full.len(),
            ..Default::default()
        };

        let strict = self.filter_pass(&full, levels, Pass::Strict);
        diagnostics.strict_count = strict.len();
        debug!(candidates = full.len(), survivors = strict.len(), "strict pass");

        let (path, selected) = if !strict.is_empty() {
            (SelectionPath::Strict, strict)
        } else {
            let hard = self.filter_pass(&full, levels, Pass::Hard);
            diagnostics.hard_count = Some(hard.len());
            debug!(survivors = hard.len(), "hard pass");

            if !hard.is_empty() {
                (SelectionPath::Hard, hard)
            } else {
                let fallback: Vec<ScoredState> = full
                    .iter()
                    .copied()
                    .filter(|s| s.key.is_macro() && !semantically_blocked(s.key, levels))
                    .collect();
                diagnostics.fallback_count = Some(fallback.len());
                debug!(survivors = fallback.len(), "final fallback");

                if !fallback.is_empty() {
                    (SelectionPath::FinalFallback, fallback)
                } else if !full.is_empty() {
                    (SelectionPath::LastResort, full.clone())
                } else {
                    error!(pool = self.candidates.len(), "last-resort ranking is empty");
                    return Err(ContractViolation::EmptyRanking {
                        pool_size: self.candidates.len(),
                    });
                }
            }
        };

        diagnostics.rescue_used = path.is_rescue();
        if diagnostics.rescue_used {
            warn!(path = path.as_str(), "strict pass empty, rescue stage used");
        }

        let (ranked, substitution) = recheck_semantic_blocks(selected, levels)?;
        if let Some(sub) = substitution {
            warn!(
                blocked = %sub.blocked,
                replacement = %sub.replacement,
                "winner semantically blocked, walked down ranking"
            );
        }
        diagnostics.substitution = substitution;

        RankingResult::new(ranked, path, diagnostics)
    }
}

/// Drop semantically blocked entries, keeping order.
///
/// If the head of the list was blocked the first unblocked entry takes its
/// place and the swap is reported.
fn recheck_semantic_blocks(
    selected: Vec<ScoredState>,
    levels: &GateLevels,
) -> Result<(Vec<ScoredState>, Option<Substitution>), ContractViolation> {
    let checked = selected.len();
    let head = selected.first().map(|s| s.key);
    let kept: Vec<ScoredState> = selected
        .into_iter()
        .filter(|s| !semantically_blocked(s.key, levels))
        .collect();

    let Some(new_head) = kept.first().map(|s| s.key) else {
        error!(checked, "no semantically unblocked candidate");
        return Err(ContractViolation::NoUnblockedCandidate { checked });
    };

    let substitution = match head {
        Some(original) if original != new_head => Some(Substitution {
            blocked: original,
            replacement: new_head,
        }),
        _ => None,
    };
    Ok((kept, substitution))
}
