//! Per-state eligibility rules over gate levels.
//!
//! Every rule is data: a state key with `requires`, `blocks` and an optional
//! relaxed `hard_blocks` list of [`Cond`]s. Two passes read the same table:
//!
//! - **Strict**: every `requires` condition holds and no `blocks` condition does.
//! - **Hard**: no `hard_blocks` condition holds (`blocks` when none is given).
//!
//! Two smaller tables sit beside it. [`SEMANTIC_BLOCKS`] lists vetoes that
//! hold through every fallback stage. [`STRONG_SIGNALS`] lists each state's
//! canonical pattern, consulted by tie-breaking and the uncertainty policy.

mod rules;
mod semantic;
mod signals;


pub use rules::STANDARD_RULES;
pub use semantic::{semantic_block_reasons, semantically_blocked, SEMANTIC_BLOCKS};
pub use signals::{has_strong_signal, STRONG_SIGNALS};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::gates::{GateLevels, Level};
use crate::vector::StateKey;

/// One condition over gate levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cond {
    /// The level holds.
    Is(Level),
    /// The level does not hold.
    Not(Level),
    /// At least one of the levels holds.
    Any(&'static [Level]),
}

impl Cond {
    pub fn holds(&self, levels: &GateLevels) -> bool {
        match self {
            Cond::Is(l) => levels.holds(*l),
            Cond::Not(l) => !levels.holds(*l),
            Cond::Any(ls) => ls.iter().any(|l| levels.holds(*l)),
        }
    }

    /// Short text form, e.g. `!Ten_high` or `any(Fat_high|Ag_low)`.
    pub fn describe(&self) -> String {
        match self {
            Cond::Is(l) => l.name().to_string(),
            Cond::Not(l) => format!("!{}", l.name()),
            Cond::Any(ls) => {
                let names: Vec<&str> = ls.iter().map(|l| l.name()).collect();
                format!("any({})", names.join("|"))
            }
        }
    }
}

/// True when every condition holds. An empty list holds trivially.
pub fn all_hold(conds: &[Cond], levels: &GateLevels) -> bool {
    conds.iter().all(|c| c.holds(levels))
}

/// Eligibility rule for one state.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityRule {
    pub key: StateKey,
    /// Necessary conditions for a confident match.
    pub requires: &'static [Cond],
    /// Vetoes applied in the strict pass.
    pub blocks: &'static [Cond],
    /// Relaxed vetoes for the hard pass; `None` reuses `blocks`.
    pub hard_blocks: Option<&'static [Cond]>,
}

impl EligibilityRule {
    /// Vetoes that apply in `pass`.
    pub fn blockers(&self, pass: Pass) -> &'static [Cond] {
        match pass {
            Pass::Strict => self.blocks,
            Pass::Hard => self.hard_blocks.unwrap_or(self.blocks),
        }
    }
}

/// Which rule evaluation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    Strict,
    Hard,
}

/// Outcome of evaluating one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    pub key: StateKey,
    pub pass: Pass,
    pub eligible: bool,
    /// Human-readable reasons: unmet requirements and triggered blockers.
    pub reasons: Vec<String>,
}

/// A set of eligibility rules, at most one per state.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    rules: &'static [EligibilityRule],
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleTable {
    /// The built-in rule table.
    pub const fn standard() -> Self {
        Self {
            rules: STANDARD_RULES,
        }
    }

    /// A custom table. Used to exercise degraded selection stages.
    pub const fn new(rules: &'static [EligibilityRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [EligibilityRule] {
        self.rules
    }

    pub fn rule(&self, key: StateKey) -> Option<&'static EligibilityRule> {
        self.rules.iter().find(|r| r.key == key)
    }

    /// Evaluate `key` under `pass`. States without a rule are never eligible.
    pub fn evaluate(&self, key: StateKey, levels: &GateLevels, pass: Pass) -> Eligibility {
        let Some(rule) = self.rule(key) else {
            return Eligibility {
                key,
                pass,
                eligible: false,
                reasons: vec![format!("no eligibility rule for {}", key)],
            };
        };

        let mut reasons = Vec::new();
        if pass == Pass::Strict {
            for cond in rule.requires.iter().filter(|c| !c.holds(levels)) {
                reasons.push(format!("requires {}", cond.describe()));
            }
        }
        for cond in rule.blockers(pass).iter().filter(|c| c.holds(levels)) {
            reasons.push(format!("blocked by {}", cond.describe()));
        }

        let eligible = reasons.is_empty();
        trace!(state = %key, ?pass, eligible, ?reasons, "eligibility evaluated");
        Eligibility {
            key,
            pass,
            eligible,
            reasons,
        }
    }

    #[inline]
    pub fn is_eligible(&self, key: StateKey, levels: &GateLevels, pass: Pass) -> bool {
        self.evaluate(key, levels, pass).eligible
    }
}
