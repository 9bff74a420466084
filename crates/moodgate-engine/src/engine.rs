//! Engine - classification orchestrator.
//!
//! Runs the full pipeline for one request:
//!
//! ```text
//! ratings ─▶ mapper ─▶ gate levels ─▶ ranking selector ─▶ decision layer
//!                                                              │
//!                                         evidence tags ─▶ micro selector
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::decision::{DecisionLayer, DecisionRecord};
use crate::eligibility::{Pass, RuleTable};
use crate::error::{EngineError, EngineResult};
use crate::gates::{gate_closure, GateClosure, GateLevels};
use crate::mapper::{map_with_evidence, BaselineRatings};
use crate::micro::{MicroSelection, MicroSelector};
use crate::ranking::{EngineMode, RankingResult, RankingSelector};
use crate::vector::{StateKey, StateVector};

/// One classification request.
///
/// Every field is optional on the wire; missing ratings default to the
/// scale midpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyRequest {
    pub ratings: BaselineRatings,
    /// Auxiliary vector blended into the baseline.
    pub evidence_vector: Option<StateVector>,
    /// Blend weight in `[0, 1]`; the configured weight when absent.
    pub evidence_weight: Option<f32>,
    /// Canonical evidence tags.
    pub tags: Vec<String>,
    pub mode: EngineMode,
}

impl ClassifyRequest {
    pub fn from_ratings(ratings: BaselineRatings) -> Self {
        Self {
            ratings,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_evidence(mut self, vector: StateVector, weight: f32) -> Self {
        self.evidence_vector = Some(vector);
        self.evidence_weight = Some(weight);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: EngineMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Everything computed for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub vector: StateVector,
    pub levels: GateLevels,
    pub ranking: RankingResult,
    pub decision: DecisionRecord,
    /// Micro refinement keyed by the decided macro.
    pub micro: MicroSelection,
}

/// Stateless classification engine.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of threads.
///
/// # Example
///
/// ```
/// use moodgate_engine::{BaselineRatings, ClassifyRequest, Engine, StateKey};
///
/// let engine = Engine::with_defaults();
/// let request = ClassifyRequest::from_ratings(BaselineRatings::new(2, 2, 6, 3, 2, 3));
/// let result = engine.classify(&request).unwrap();
/// assert_eq!(result.decision.macro_key, StateKey::Overloaded);
/// assert!(!result.decision.needs_refine);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    baseline: RankingSelector,
    deep: RankingSelector,
    decision: DecisionLayer,
    micro: MicroSelector,
}

impl Engine {
    /// Build an engine, rejecting invalid configuration.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate().map_err(EngineError::Config)?;
        Ok(Self::from_config(config))
    }

    /// Engine with the default configuration.
    pub fn with_defaults() -> Self {
        Self::from_config(EngineConfig::default())
    }

    fn from_config(config: EngineConfig) -> Self {
        Self {
            baseline: RankingSelector::new(EngineMode::Baseline),
            deep: RankingSelector::new(EngineMode::Deep),
            decision: DecisionLayer::new(config.decision.clone()),
            micro: MicroSelector::new(config.micro.clone()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn selector(&self, mode: EngineMode) -> &RankingSelector {
        match mode {
            EngineMode::Baseline => &self.baseline,
            EngineMode::Deep => &self.deep,
        }
    }

    /// Map the request's ratings and evidence to a clamped vector.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidParameter`] for a non-finite or out-of-range
    /// `evidence_weight`.
    pub fn map_request(&self, request: &ClassifyRequest) -> EngineResult<StateVector> {
        let weight = match request.evidence_weight {
            Some(w) if !(0.0..=1.0).contains(&w) => {
                return Err(EngineError::invalid_param(
                    "evidence_weight",
                    w,
                    "Must be in range [0, 1]",
                ));
            }
            Some(w) => w,
            None => self.config.mapper.evidence_weight,
        };
        Ok(map_with_evidence(
            &request.ratings,
            request.evidence_vector.as_ref(),
            weight,
        ))
    }

    /// Classify one request.
    ///
    /// Degraded inputs (missing ratings, no tags, weak matches) never fail.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidParameter`] for a bad evidence weight.
    /// - [`EngineError::Contract`] if the rule tables or centroids are
    ///   inconsistent.
    pub fn classify(&self, request: &ClassifyRequest) -> EngineResult<Classification> {
        let vector = self.map_request(request)?;
        let levels = GateLevels::from_vector(&vector);

        let selector = self.selector(request.mode);
        if self.config.debug {
            let rules = RuleTable::standard();
            for key in selector.candidates() {
                let strict = rules.evaluate(*key, &levels, Pass::Strict);
                trace!(
                    state = %key,
                    eligible = strict.eligible,
                    reasons = ?strict.reasons,
                    "strict eligibility"
                );
            }
        }

        let ranking = selector.select(&vector, &levels)?;
        let decision = self.decision.decide(&ranking, &vector, &levels)?;
        let micro = self.micro.select(decision.macro_key, &request.tags);

        debug!(
            mode = ?request.mode,
            macro_key = %decision.macro_key,
            micro = micro.micro.unwrap_or("-"),
            path = ranking.path().as_str(),
            "classified"
        );

        Ok(Classification {
            vector,
            levels,
            ranking,
            decision,
            micro,
        })
    }

    /// Micro refinement for an already decided macro.
    pub fn select_micro<S: AsRef<str>>(&self, macro_key: StateKey, tags: &[S]) -> MicroSelection {
        self.micro.select(macro_key, tags)
    }

    /// Topic-gate closure for the adaptive question policy.
    pub fn gate_closure<S: AsRef<str>>(&self, macro_key: StateKey, tags: &[S]) -> GateClosure {
        gate_closure(macro_key, tags)
    }
}
