//! Macro → micro refinement.
//!
//! Each macro owns three micro states, each described by must-have,
//! supporting and context tags. [`MicroSelector`] scores them against the
//! evidence tags and returns at most one, or a [`NoMicroReason`].
//!
//! Scoring per candidate:
//!
//! | matched group              | bonus per tag            |
//! |----------------------------|--------------------------|
//! | must-have, all present     | `full_must_weight`       |
//! | must-have, some present    | `partial_must_weight`    |
//! | supporting                 | `supporting_weight`      |
//! | context                    | `context_weight`         |
//!
//! plus `specificity_bonus / matched_tags` when the sum is positive.

mod catalogue;
mod selector;


pub use catalogue::{catalogue, MicroProfile, MICRO_CATALOGUE};
pub use selector::{MicroCandidateScore, MicroSelection, MicroSelector, NoMicroReason};
