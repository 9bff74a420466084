//! Tag-matching micro-state selector.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, trace};

use super::catalogue::{catalogue, MicroProfile};
use crate::config::MicroConfig;
use crate::tags;
use crate::vector::StateKey;

/// Score of one micro profile against the evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MicroCandidateScore {
    pub key: &'static str,
    pub score: f32,
    /// Evidence tags that contributed, in profile order.
    pub matched_tags: Vec<&'static str>,
    /// Must-have tags present, out of `must_total`.
    pub must_matched: usize,
    pub must_total: usize,
}

impl MicroCandidateScore {
    pub fn has_all_must(&self) -> bool {
        self.must_total > 0 && self.must_matched == self.must_total
    }
}

/// Why no micro state was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMicroReason {
    /// The macro owns no micro catalogue.
    NoCatalogue,
    /// No evidence tags were supplied.
    NoEvidence,
    /// The best candidate scored exactly zero.
    ZeroScore,
    /// The best candidate scored above zero but under the threshold.
    BelowThreshold,
}

/// Outcome of micro selection for one macro.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MicroSelection {
    pub macro_key: StateKey,
    pub micro: Option<&'static str>,
    /// Best candidate's score, 0.0 without candidates.
    pub score: f32,
    /// Threshold the best candidate had to reach.
    pub threshold: Option<f32>,
    /// Every candidate, best first.
    pub candidates: Vec<MicroCandidateScore>,
    pub no_match: Option<NoMicroReason>,
}

impl MicroSelection {
    fn none(macro_key: StateKey, reason: NoMicroReason) -> Self {
        Self {
            macro_key,
            micro: None,
            score: 0.0,
            threshold: None,
            candidates: Vec::new(),
            no_match: Some(reason),
        }
    }
}

/// Scores a macro's micro catalogue against evidence tags.
///
/// # Example
///
/// ```
/// use moodgate_engine::micro::MicroSelector;
/// use moodgate_engine::vector::StateKey;
///
/// let selection = MicroSelector::default()
///     .select(StateKey::Pressured, &["sig.deadline.present", "sig.tension.high"]);
/// assert_eq!(selection.micro, Some("rushed"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MicroSelector {
    config: MicroConfig,
}

impl MicroSelector {
    pub fn new(config: MicroConfig) -> Self {
        Self { config }
    }

    /// Score one profile against a set of present tags.
    pub fn score_profile(&self, profile: &MicroProfile, present: &BTreeSet<&str>) -> MicroCandidateScore {
        let mut matched_tags = Vec::new();
        let mut take = |group: &'static [&'static str]| -> usize {
            let before = matched_tags.len();
            matched_tags.extend(group.iter().copied().filter(|t| present.contains(t)));
            matched_tags.len() - before
        };
        let must_matched = take(profile.must);
        let supporting = take(profile.supporting);
        let context = take(profile.context);

        let must_total = profile.must.len();
        let must_weight = if must_total > 0 && must_matched == must_total {
            self.config.full_must_weight
        } else {
            self.config.partial_must_weight
        };

        let mut score = must_weight * must_matched as f32
            + self.config.supporting_weight * supporting as f32
            + self.config.context_weight * context as f32;
        if score > 0.0 {
            score += self.config.specificity_bonus / matched_tags.len() as f32;
        }

        MicroCandidateScore {
            key: profile.key,
            score,
            matched_tags,
            must_matched,
            must_total,
        }
    }

    /// Acceptance threshold for a candidate.
    ///
    /// Full must-have coverage drops it to `full_must_threshold`; partial
    /// coverage relaxes `base_threshold` in proportion.
    pub fn threshold_for(&self, candidate: &MicroCandidateScore) -> f32 {
        let base = self.config.base_threshold;
        let full = self.config.full_must_threshold;
        if candidate.has_all_must() {
            full
        } else if candidate.must_total == 0 {
            base
        } else {
            let coverage = candidate.must_matched as f32 / candidate.must_total as f32;
            base - (base - full) * coverage
        }
    }

    /// Pick at most one micro state for `macro_key`.
    ///
    /// Candidates are ordered by descending score, then fewer matched tags,
    /// then catalogue order. Tags outside the canonical form never match.
    pub fn select<S: AsRef<str>>(&self, macro_key: StateKey, evidence: &[S]) -> MicroSelection {
        let profiles = catalogue(macro_key);
        if profiles.is_empty() {
            return MicroSelection::none(macro_key, NoMicroReason::NoCatalogue);
        }
        if evidence.is_empty() {
            return MicroSelection::none(macro_key, NoMicroReason::NoEvidence);
        }

        let present: BTreeSet<&str> = evidence.iter().map(|t| t.as_ref()).collect();
        let ignored = present.iter().filter(|t| !tags::is_canonical(t)).count();
        if ignored > 0 {
            debug!(ignored, "non-canonical evidence tags ignored");
        }

        let mut candidates: Vec<MicroCandidateScore> = profiles
            .iter()
            .map(|p| self.score_profile(p, &present))
            .collect();
        candidates.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(a.matched_tags.len().cmp(&b.matched_tags.len()))
        });
        for c in &candidates {
            trace!(micro = c.key, score = c.score, matched = c.matched_tags.len(), "micro candidate");
        }

        let Some(best) = candidates.first() else {
            return MicroSelection::none(macro_key, NoMicroReason::ZeroScore);
        };
        let score = best.score;
        let threshold = self.threshold_for(best);
        let (micro, no_match) = if score <= 0.0 {
            (None, Some(NoMicroReason::ZeroScore))
        } else if score < threshold {
            (None, Some(NoMicroReason::BelowThreshold))
        } else {
            (Some(best.key), None)
        };

        debug!(
            macro_key = %macro_key,
            micro = micro.unwrap_or("-"),
            score,
            threshold,
            "micro selection"
        );

        MicroSelection {
            macro_key,
            micro,
            score,
            threshold: Some(threshold),
            candidates,
            no_match,
        }
    }
}
