//! Decision Path Tests
//!
//! End-to-end checks through [`Engine`] of a strict pick, a micro pick and a hard-pass rescue.

use moodgate_engine::decision::ClarityFlag;
use moodgate_engine::gates::GateLevels;
use moodgate_engine::mapper::map_baseline;
use moodgate_engine::{
    ClassifyRequest, ConfidenceBand, Engine, NoMicroReason, SelectionPath, StateKey,
};

use super::helpers::{classify, low_mood_high_tension, min_clarity_midpoint};

// =============================================================================
// STRICT SELECTION
// =============================================================================

#[test]
fn test_low_mood_high_tension_vector_shape() {
    let v = map_baseline(&low_mood_high_tension());
    assert_eq!(v.valence, -2.0, "strongly negative valence");
    assert_eq!(v.arousal, 0.0, "zero arousal");
    assert_eq!(v.fatigue, 2.0, "high fatigue");
    assert_eq!(v.tension, 2.5, "high tension");

    let levels = GateLevels::from_vector(&v);
    assert!(levels.v_very_neg && levels.fat_high && levels.ten_high && levels.ag_low);
    assert!(levels.cert_mid && levels.soc_mid);
}

#[test]
fn test_low_mood_high_tension_selects_overloaded() {
    let engine = Engine::with_defaults();
    let result = classify(&engine, low_mood_high_tension());

    let ranked: Vec<StateKey> = result.ranking.ranked().iter().map(|s| s.key).collect();
    assert_eq!(ranked, vec![StateKey::Overloaded, StateKey::Down]);
    assert_eq!(result.ranking.path(), SelectionPath::Strict);

    let d = &result.decision;
    assert_eq!(d.macro_key, StateKey::Overloaded);
    assert!(matches!(d.confidence, ConfidenceBand::Medium | ConfidenceBand::High));
    assert_eq!(d.clarity, Some(ClarityFlag::Medium));
    assert!(!d.forced_uncertain);
    assert!(!d.needs_refine);
}

// =============================================================================
// MICRO SELECTION
// =============================================================================

#[test]
fn test_deadline_and_tension_select_rushed() {
    let engine = Engine::with_defaults();
    let selection = engine.select_micro(
        StateKey::Pressured,
        &["sig.deadline.present", "sig.tension.high"],
    );
    assert_eq!(selection.micro, Some("rushed"));
    let nonzero: Vec<&str> = selection
        .candidates
        .iter()
        .filter(|c| c.score > 0.0)
        .map(|c| c.key)
        .collect();
    assert_eq!(nonzero, vec!["rushed"], "rushed is the only scoring candidate");
}

#[test]
fn test_micro_follows_decided_macro() {
    let engine = Engine::with_defaults();
    let request = ClassifyRequest::from_ratings(low_mood_high_tension())
        .with_tags(["sig.deadline.present", "sig.tension.high"]);
    let result = engine.classify(&request).unwrap();
    // Keyed by overloaded, so the pressured micro is out of reach.
    assert_eq!(result.micro.macro_key, StateKey::Overloaded);
    assert_ne!(result.micro.micro, Some("rushed"));
}

// =============================================================================
// HARD-PASS RESCUE
// =============================================================================

#[test]
fn test_min_clarity_midpoint_rescued_by_hard_pass() {
    let engine = Engine::with_defaults();
    let result = classify(&engine, min_clarity_midpoint());

    assert_eq!(result.ranking.path(), SelectionPath::Hard);
    assert_eq!(result.ranking.diagnostics().strict_count, 0);
    assert!(result.ranking.diagnostics().rescue_used);
    assert!(!result.ranking.is_empty());

    let ranked: Vec<StateKey> = result.ranking.ranked().iter().map(|s| s.key).collect();
    assert!(!ranked.contains(&StateKey::Engaged), "valence is not positive");
    assert!(ranked.iter().all(|k| k.is_macro()));

    let d = &result.decision;
    assert_eq!(d.selection_path, SelectionPath::Hard);
    assert_eq!(d.clarity, Some(ClarityFlag::Low));
    assert!(d.needs_refine);
    assert!(!d.forced_uncertain, "rescue is not uncertainty");
}

#[test]
fn test_min_clarity_without_tags_has_no_micro() {
    let engine = Engine::with_defaults();
    let result = classify(&engine, min_clarity_midpoint());
    assert_eq!(result.micro.no_match, Some(NoMicroReason::NoEvidence));
}
