//! Similarity ranking with a guaranteed non-empty fallback pipeline.
//!
//! Candidates are ranked by [`similarity`](crate::vector::similarity) to the
//! input vector and filtered through four ordered stages. The first stage
//! with survivors wins:
//!
//! 1. **Strict**: eligible under the strict pass.
//! 2. **Hard**: eligible under the hard pass.
//! 3. **Final fallback**: macro states not semantically blocked.
//! 4. **Last resort**: the full ranking, ungated.
//!
//! Whatever stage wins, the list is re-checked against the semantic blocks
//! and walked down past blocked entries. An empty pool or a list with no
//! unblocked entry is a [`ContractViolation`](crate::error::ContractViolation).

mod selector;
mod types;


pub use selector::RankingSelector;
pub use types::{
    EngineMode, RankingResult, ScoredState, SelectionDiagnostics, SelectionPath, Substitution,
};
