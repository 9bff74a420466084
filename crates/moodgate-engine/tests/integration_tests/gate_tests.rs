//! Gate Tests
//!
//! Gate levels against the mapper's discrete outputs, and topic-gate
//! closure as the question policy consumes it.

use moodgate_engine::gates::{
    relevant_gates, ENERGY_HIGH, ENERGY_LOW, TENSION_HIGH, TENSION_LOW, THIRDS_HIGH, THIRDS_LOW,
    VALENCE_NEG, VALENCE_POS, VALENCE_VERY_NEG, TOPIC_GATE_TAGS,
};
use moodgate_engine::mapper::map_baseline;
use moodgate_engine::micro::MICRO_CATALOGUE;
use moodgate_engine::{gate_closure, Engine, StateKey, TopicGate};

use super::helpers::rating_grid;

#[test]
fn test_no_mapper_output_lands_on_a_threshold() {
    let thresholds = [
        ("valence", VALENCE_NEG),
        ("valence", VALENCE_VERY_NEG),
        ("valence", VALENCE_POS),
        ("energy", ENERGY_LOW),
        ("energy", ENERGY_HIGH),
        ("tension", TENSION_LOW),
        ("tension", TENSION_HIGH),
        ("thirds", THIRDS_LOW),
        ("thirds", THIRDS_HIGH),
    ];
    for ratings in rating_grid().step_by(7) {
        let v = map_baseline(&ratings);
        for (name, t) in thresholds {
            let values = match name {
                "valence" => vec![v.valence],
                "energy" => vec![v.arousal, v.fatigue],
                "tension" => vec![v.tension],
                _ => vec![v.agency, v.certainty, v.socialness],
            };
            for value in values {
                assert!((value - t).abs() > 0.05, "{} value {} too close to {}", name, value, t);
            }
        }
    }
}

#[test]
fn test_gate_closure_through_engine() {
    let engine = Engine::with_defaults();
    let none: [&str; 0] = [];

    let open = engine.gate_closure(StateKey::Overloaded, &none);
    assert_eq!(
        open.open_gates(),
        vec![TopicGate::Agency, TopicGate::Clarity, TopicGate::Workload]
    );

    let closed = engine.gate_closure(
        StateKey::Overloaded,
        &["sig.agency.low", "sig.clarity.low", "sig.workload.high"],
    );
    assert!(closed.all_closed());
}

#[test]
fn test_uncertain_keeps_every_gate_open() {
    let none: [&str; 0] = [];
    let closure = gate_closure(StateKey::Uncertain, &none);
    assert_eq!(closure.open_gates(), TopicGate::ALL.to_vec());
}

#[test]
fn test_each_relevant_gate_closable_by_table() {
    for key in StateKey::ALL {
        for gate in relevant_gates(key) {
            let (_, tags) = TOPIC_GATE_TAGS
                .iter()
                .find(|(g, _)| g == gate)
                .expect("gate in table");
            let closure = gate_closure(key, &tags[..1]);
            assert!(closure.is_closed(*gate), "{} cannot close {}", key, gate);
        }
    }
}

#[test]
fn test_gate_tags_share_micro_vocabulary() {
    let micro_tags: Vec<&str> = MICRO_CATALOGUE
        .iter()
        .flat_map(|(_, profiles)| profiles.iter())
        .flat_map(|p| p.must.iter().chain(p.supporting))
        .copied()
        .collect();
    let used = TOPIC_GATE_TAGS
        .iter()
        .flat_map(|(_, tags)| tags.iter())
        .filter(|t| micro_tags.contains(*t))
        .count();
    assert!(used > 0);
}
