//! Micro Selection Tests
//!
//! Every micro profile must be reachable from its own must-have tags, and
//! the selector must never return a micro owned by another macro.

use moodgate_engine::config::MicroConfig;
use moodgate_engine::micro::{catalogue, MicroSelector, MICRO_CATALOGUE};
use moodgate_engine::{NoMicroReason, StateKey};

#[test]
fn test_every_profile_selected_by_its_must_tags() {
    let selector = MicroSelector::default();
    for (macro_key, profiles) in MICRO_CATALOGUE {
        for profile in profiles.iter() {
            let selection = selector.select(*macro_key, profile.must);
            assert_eq!(
                selection.micro,
                Some(profile.key),
                "{} not selected for {}",
                profile.key,
                macro_key
            );
        }
    }
}

#[test]
fn test_selection_stays_inside_macro_catalogue() {
    let selector = MicroSelector::default();
    let all_tags: Vec<&str> = MICRO_CATALOGUE
        .iter()
        .flat_map(|(_, profiles)| profiles.iter())
        .flat_map(|p| p.must.iter().chain(p.supporting).chain(p.context))
        .copied()
        .collect();
    for key in StateKey::MACROS {
        let selection = selector.select(key, &all_tags);
        let own: Vec<&str> = catalogue(key).iter().map(|p| p.key).collect();
        if let Some(micro) = selection.micro {
            assert!(own.contains(&micro), "{} returned foreign micro {}", key, micro);
        }
        assert_eq!(selection.candidates.len(), 3);
    }
}

#[test]
fn test_supporting_tag_alone_never_selects_its_profile() {
    let selector = MicroSelector::default();
    for (macro_key, profiles) in MICRO_CATALOGUE {
        for profile in profiles.iter().filter(|p| !p.supporting.is_empty()) {
            let selection = selector.select(*macro_key, &profile.supporting[..1]);
            assert_ne!(
                selection.micro,
                Some(profile.key),
                "{} selected from one supporting tag",
                profile.key
            );
        }
    }
}

#[test]
fn test_stricter_threshold_rejects_partial_match() {
    let config = MicroConfig {
        base_threshold: 4.0,
        full_must_threshold: 3.0,
        ..MicroConfig::default()
    };
    assert!(config.validate().is_ok());
    let selector = MicroSelector::new(config);
    let selection = selector.select(StateKey::Pressured, &["sig.options.few"]);
    assert_eq!(selection.no_match, Some(NoMicroReason::BelowThreshold));
    assert_eq!(selection.threshold, Some(3.5));
}
