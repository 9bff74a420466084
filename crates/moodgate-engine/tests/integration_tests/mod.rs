//! Integration tests for the moodgate engine.
//!
//! These tests drive the public API end to end with deterministic data
//! (NO MOCKS):
//! - End-to-end decision paths: strict selection, micro selection and hard-pass rescue
//! - Exhaustive sweeps over the 7-point rating grid for totality, the
//!   uncertainty invariant, semantic blocks and tie completeness
//! - Topic-gate closure and configuration loading

mod helpers;
mod config_tests;
mod gate_tests;
mod invariant_tests;
mod micro_tests;
mod decision_path_tests;
