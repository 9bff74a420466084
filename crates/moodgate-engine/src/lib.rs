//! Emotional-state decision engine.
//!
//! Classifies six self-report ratings, plus optional evidence, into one of a
//! fixed catalogue of macro states, with an optional micro refinement and a
//! calibrated confidence signal. Every call returns a complete answer or a
//! [`ContractViolation`]; it never returns an empty or contradictory one.
//!
//! # Modules
//!
//! - [`config`]: Tunable thresholds and weights, TOML loading
//! - [`error`]: Error types and result aliases
//! - [`vector`]: State vector, dimensions, centroid table and similarity
//! - [`mapper`]: Baseline ratings → state vector, evidence blending
//! - [`gates`]: Gate levelizer and topic-gate closure
//! - [`tags`]: Canonical evidence-tag vocabulary
//! - [`eligibility`]: Strict/hard rule table, semantic blocks, strong signals
//! - [`ranking`]: Similarity ranking with the four-stage fallback
//! - [`decision`]: Tie-break, forced uncertainty, confidence and clarity
//! - [`micro`]: Macro → micro tag matching
//! - [`engine`]: The [`Engine`] facade running the whole pipeline
//!
//! # Invariants
//!
//! - Every vector is clamped to its per-dimension range.
//! - A ranking is never empty.
//! - `macro_key == uncertain` exactly when `forced_uncertain` is set.
//! - Semantic blocks hold through every fallback stage.
//!
//! # Example
//!
//! ```
//! use moodgate_engine::{BaselineRatings, ClassifyRequest, ConfidenceBand, Engine, StateKey};
//!
//! let engine = Engine::with_defaults();
//! let request = ClassifyRequest::from_ratings(BaselineRatings::new(2, 2, 6, 3, 2, 3));
//! let result = engine.classify(&request).unwrap();
//!
//! assert_eq!(result.decision.macro_key, StateKey::Overloaded);
//! assert_eq!(result.decision.confidence, ConfidenceBand::Medium);
//! ```

pub mod config;
pub mod error;
pub mod tags;
pub mod vector;

// Pipeline stages
pub mod decision;
pub mod eligibility;
pub mod engine;
pub mod gates;
pub mod mapper;
pub mod micro;
pub mod ranking;

pub use config::EngineConfig;
pub use error::{ContractViolation, EngineError, EngineResult};

pub use engine::{Classification, ClassifyRequest, Engine};
pub use vector::{StateKey, StateVector};

// Re-export stage outputs for convenience
pub use decision::{ClarityFlag, ConfidenceBand, DecisionRecord, UncertaintyReason};
pub use gates::{gate_closure, GateClosure, GateLevels, TopicGate};
pub use mapper::BaselineRatings;
pub use micro::{MicroSelection, NoMicroReason};
pub use ranking::{EngineMode, RankingResult, SelectionPath};
