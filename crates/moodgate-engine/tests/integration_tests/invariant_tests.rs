//! Invariant Tests
//!
//! Exhaustive sweeps over the rating grid. Every combination of six ratings
//! on the 7-point scale is classified.

use moodgate_engine::gates::GateLevels;
use moodgate_engine::vector::centroid;
use moodgate_engine::{
    BaselineRatings, ClassifyRequest, Engine, EngineMode, SelectionPath, StateKey, StateVector,
};

use super::helpers::{classify, rating_grid};

/// Semantic blocks checked independently of the engine's own tables.
fn violates_semantic_block(key: StateKey, l: &GateLevels) -> bool {
    match key {
        StateKey::Connected => l.fat_high || l.ten_high || l.v_neg,
        StateKey::Engaged => !l.v_pos || l.fat_high || l.ten_high,
        StateKey::Capable => l.ten_high || l.ag_low,
        _ => false,
    }
}

// =============================================================================
// TOTALITY & UNCERTAINTY
// =============================================================================

#[test]
fn test_grid_totality_and_uncertainty_invariant() {
    let engine = Engine::with_defaults();
    let mut count = 0usize;
    for ratings in rating_grid() {
        let result = classify(&engine, ratings);
        let d = &result.decision;

        assert!(!result.ranking.is_empty(), "empty ranking for {:?}", ratings);
        assert!(result.vector.is_normalized());
        assert_eq!(
            d.macro_key == StateKey::Uncertain,
            d.forced_uncertain,
            "uncertainty invariant broken for {:?}",
            ratings
        );
        assert_eq!(d.uncertainty_reason.is_some(), d.forced_uncertain);
        assert_ne!(d.macro_key, StateKey::Mixed);
        if !d.forced_uncertain {
            assert!(result.ranking.ranked().iter().any(|s| s.key == d.macro_key));
        }
        count += 1;
    }
    assert_eq!(count, 7usize.pow(6));
}

#[test]
fn test_grid_semantic_blocks_hold() {
    let engine = Engine::with_defaults();
    for ratings in rating_grid() {
        let result = classify(&engine, ratings);
        let levels = &result.levels;
        assert!(
            !violates_semantic_block(result.decision.macro_key, levels),
            "{} chosen for {:?}",
            result.decision.macro_key,
            ratings
        );
        for entry in result.ranking.ranked() {
            assert!(!violates_semantic_block(entry.key, levels));
        }
    }
}

#[test]
fn test_grid_ties_resolve_within_tied_set() {
    let engine = Engine::with_defaults();
    for ratings in rating_grid() {
        let result = classify(&engine, ratings);
        if let Some(tie) = &result.decision.tie {
            assert!(tie.tied.len() >= 2);
            assert!(tie.tied.contains(&tie.winner));
            assert!(!tie.winner.is_sentinel());
            assert_eq!(result.decision.macro_key, tie.winner);
            assert!(!result.decision.forced_uncertain);
        }
    }
}

#[test]
fn test_grid_paths_never_degrade_past_hard() {
    // The standard rules always leave a hard-pass survivor for mapper output.
    let engine = Engine::with_defaults();
    for ratings in rating_grid() {
        let result = classify(&engine, ratings);
        assert!(
            !matches!(
                result.ranking.path(),
                SelectionPath::FinalFallback | SelectionPath::LastResort
            ),
            "{:?} reached {:?}",
            ratings,
            result.ranking.path()
        );
    }
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn test_repeated_calls_byte_identical() {
    let engine = Engine::with_defaults();
    for ratings in rating_grid().step_by(11) {
        let request = ClassifyRequest::from_ratings(ratings).with_tags(["sig.tension.high", "ctx.work"]);
        let first = serde_json::to_string(&engine.classify(&request).unwrap()).unwrap();
        let second = serde_json::to_string(&engine.classify(&request).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = std::sync::Arc::new(Engine::with_defaults());
    let handles: Vec<_> = (1..=4)
        .map(|mood| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || {
                let ratings = BaselineRatings::new(mood, 2, 6, 3, 2, 3);
                serde_json::to_string(&classify(&engine, ratings)).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let threaded = handle.join().unwrap();
        let ratings = BaselineRatings::new(i as i32 + 1, 2, 6, 3, 2, 3);
        let local = serde_json::to_string(&classify(&engine, ratings)).unwrap();
        assert_eq!(threaded, local);
    }
}

// =============================================================================
// DEEP MODE WITH EVIDENCE
// =============================================================================

#[test]
fn test_deep_mode_with_evidence_keeps_invariants() {
    let engine = Engine::with_defaults();
    let evidence = [
        StateVector::zero(),
        centroid(StateKey::Anxious),
        centroid(StateKey::Ashamed),
        centroid(StateKey::Resentful),
    ];
    for ratings in rating_grid().step_by(5) {
        for e in &evidence {
            let request = ClassifyRequest::from_ratings(ratings)
                .with_evidence(*e, 0.8)
                .with_mode(EngineMode::Deep);
            let result = engine.classify(&request).unwrap();
            let d = &result.decision;
            assert_eq!(d.macro_key == StateKey::Uncertain, d.forced_uncertain);
            assert!(!violates_semantic_block(d.macro_key, &result.levels));
            assert!(result.vector.is_normalized());
        }
    }
}
