//! Configuration Tests
//!
//! Loading engine configuration from TOML files on disk.

use std::io::Write;

use moodgate_engine::{BaselineRatings, ClassifyRequest, Engine, EngineConfig, EngineError};

#[test]
fn test_engine_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[decision]
strong_score = 0.9

[micro]
base_threshold = 3.0
"#
    )
    .unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.decision.strong_score, 0.9);
    assert_eq!(config.micro.base_threshold, 3.0);
    assert_eq!(config.mapper.evidence_weight, 0.35);

    let engine = Engine::new(config).unwrap();
    let request = ClassifyRequest::from_ratings(BaselineRatings::new(2, 2, 6, 3, 2, 3));
    let result = engine.classify(&request).unwrap();
    assert_eq!(result.decision.macro_key, moodgate_engine::StateKey::Overloaded);
}

#[test]
fn test_invalid_config_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[decision]\nweak_match_score = 0.95").unwrap();
    let err = EngineConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
    assert!(err.is_input_error());
}

#[test]
fn test_malformed_toml_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[decision\nstrong_score = ").unwrap();
    assert!(EngineConfig::from_file(file.path()).is_err());
}

#[test]
fn test_engine_rejects_nan_micro_weights() {
    let mut config = EngineConfig::default();
    config.micro.supporting_weight = f32::NAN;
    config.micro.base_threshold = f32::NAN;
    let err = Engine::new(config).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = EngineConfig::from_file(std::path::Path::new("/nonexistent/moodgate/engine.toml"))
        .unwrap_err();
    assert!(matches!(err, EngineError::Io(_)));
    assert!(!err.is_contract_violation());
}
