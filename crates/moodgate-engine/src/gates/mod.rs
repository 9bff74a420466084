//! Gate levelizer and topic-gate closure.
//!
//! - [`GateLevels`]: low/mid/high predicates per dimension, from fixed
//!   thresholds placed between the values the mapper can produce
//! - [`Level`]: names of those predicates, used by the rule tables
//! - [`gate_closure`]: which follow-up topics are already settled for a macro

mod levels;
mod topic;

pub use levels::{
    GateLevels, Level, BLAME_HIGH, ENERGY_HIGH, ENERGY_LOW, FEAR_HIGH, TENSION_HIGH, TENSION_LOW,
    THIRDS_HIGH, THIRDS_LOW, VALENCE_NEG, VALENCE_POS, VALENCE_VERY_NEG,
};
pub use topic::{gate_closure, relevant_gates, GateClosure, TopicGate, TOPIC_GATE_TAGS};
