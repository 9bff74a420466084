//! Engine error types.
//!
//! Two categories exist. Degraded inputs (missing ratings, empty tag sets,
//! weak matches) are never errors; they are absorbed by defaulting and the
//! fallback passes. What remains is either a configuration problem or a
//! [`ContractViolation`]: a condition that can only occur when the rule
//! tables or centroid data are malformed.

use thiserror::Error;

use crate::vector::StateKey;

/// Closed set of invariant breaches the decision path can detect.
///
/// None of these are recoverable at runtime. Seeing one means the rule
/// tables, semantic blocks or centroid table disagree with each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// Even the unconditional last-resort stage produced no candidate.
    #[error("last-resort ranking returned no candidates (candidate pool of {pool_size})")]
    EmptyRanking {
        /// Number of candidates that were offered to the ranker.
        pool_size: usize,
    },

    /// `macro_key == uncertain` and `forced_uncertain` disagree.
    #[error("macro key {macro_key} disagrees with forced_uncertain={forced_uncertain}")]
    UncertaintyMismatch {
        /// Macro key carried by the record.
        macro_key: StateKey,
        /// Forced-uncertain flag carried by the record.
        forced_uncertain: bool,
    },

    /// An uncertainty reason is present without forced uncertainty, or missing with it.
    #[error("uncertainty reason present={reason_present} but forced_uncertain={forced_uncertain}")]
    UncertaintyReasonMismatch {
        /// Whether the record carries a reason.
        reason_present: bool,
        /// Forced-uncertain flag carried by the record.
        forced_uncertain: bool,
    },

    /// Semantic re-check found every ranked candidate blocked.
    #[error("no semantically unblocked candidate among {checked} ranked states")]
    NoUnblockedCandidate {
        /// How many candidates were walked.
        checked: usize,
    },

    /// A non-rankable key other than `uncertain` reached the output.
    #[error("sentinel {0} selected as winner")]
    SentinelWinner(StateKey),
}

/// Errors surfaced by the engine API.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An internal invariant was breached.
    #[error("Contract violation: {0}")]
    Contract(#[from] ContractViolation),

    /// Configuration failed validation or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid parameter value passed through the public API.
    #[error("Invalid parameter '{name}': {value}. {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Parameter value as string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error while reading configuration or input files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(err: toml::de::Error) -> Self {
        EngineError::Config(err.to_string())
    }
}

impl EngineError {
    /// Create an invalid parameter error.
    pub fn invalid_param(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        EngineError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the error signals a bug in rule or centroid data.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, EngineError::Contract(_))
    }

    /// True when the caller can fix the problem by changing its input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::Config(_)
                | EngineError::InvalidParameter { .. }
                | EngineError::Serialization(_)
        )
    }
}
