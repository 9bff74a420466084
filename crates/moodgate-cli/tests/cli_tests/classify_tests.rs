//! `moodgate classify` end to end.

use std::io::Write;

use tempfile::NamedTempFile;

use super::helpers::{assert_exit_code, run_cli, EXIT_GENERAL_ERROR, EXIT_INVALID_INPUT, EXIT_SUCCESS};

const OVERLOADED_ARGS: &[&str] = &[
    "classify", "--mood", "2", "--energy", "2", "--tension", "6", "--clarity", "3", "--control",
    "2", "--social", "3",
];

#[test]
fn test_classify_overloaded_ratings() {
    let run = run_cli(OVERLOADED_ARGS);
    assert_exit_code(&run, EXIT_SUCCESS, "overloaded ratings");

    let value = run.json();
    assert_eq!(value["decision"]["macro_key"], "overloaded");
    assert_eq!(value["decision"]["selection_path"], "strict");
    assert_eq!(value["decision"]["forced_uncertain"], false);
    assert_eq!(value["ranking"]["ranked"][0]["key"], "overloaded");
    assert!(value["micro"]["micro"].is_null());
}

#[test]
fn test_classify_with_tags_selects_micro() {
    let mut args = OVERLOADED_ARGS.to_vec();
    args.extend(["--tag", "sig.tasks.many", "--tag", "sig.workload.high"]);
    let run = run_cli(&args);
    assert_exit_code(&run, EXIT_SUCCESS, "overloaded ratings with tags");
    assert_eq!(run.json()["micro"]["micro"], "swamped");
}

#[test]
fn test_classify_min_clarity_uses_hard_pass() {
    let run = run_cli(&["classify", "--clarity", "1"]);
    assert_exit_code(&run, EXIT_SUCCESS, "min clarity");

    let value = run.json();
    assert_eq!(value["decision"]["selection_path"], "hard");
    assert_eq!(value["decision"]["needs_refine"], true);
    assert_ne!(value["decision"]["macro_key"], "engaged");
}

#[test]
fn test_classify_no_ratings_still_answers() {
    let run = run_cli(&["classify"]);
    assert_exit_code(&run, EXIT_SUCCESS, "all ratings missing");
    assert!(run.json()["decision"]["macro_key"].is_string());
}

#[test]
fn test_classify_pretty_output() {
    let mut args = OVERLOADED_ARGS.to_vec();
    args.push("--pretty");
    let run = run_cli(&args);
    assert_exit_code(&run, EXIT_SUCCESS, "pretty");
    assert!(run.stdout.lines().count() > 1);
    assert_eq!(run.json()["decision"]["macro_key"], "overloaded");
}

#[test]
fn test_classify_input_file_deep_mode() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "ratings": {{"mood": 2, "energy": 6, "tension": 6, "clarity": 2, "control": 3, "social": 3}},
            "evidence_vector": {{"fear_bias": 3.0, "arousal": 2.0}},
            "evidence_weight": 1.0,
            "mode": "deep"
        }}"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let run = run_cli(&["classify", "--input", path]);
    assert_exit_code(&run, EXIT_SUCCESS, "deep input file");
    assert_eq!(run.json()["decision"]["macro_key"], "anxious");
}

#[test]
fn test_classify_bad_evidence_weight() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"evidence_vector": {{"fatigue": 1.0}}, "evidence_weight": 1.5}}"#).unwrap();

    let path = file.path().to_str().unwrap();
    let run = run_cli(&["classify", "--input", path]);
    assert_exit_code(&run, EXIT_INVALID_INPUT, "weight out of range");
    assert!(run.stdout.trim().is_empty());
    assert_eq!(run.error_json()["code"], "ERR_INVALID_INPUT");
}

#[test]
fn test_classify_malformed_input_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "ratings = 3").unwrap();

    let path = file.path().to_str().unwrap();
    let run = run_cli(&["classify", "--input", path]);
    assert_exit_code(&run, EXIT_INVALID_INPUT, "malformed input");
}

#[test]
fn test_classify_missing_input_file() {
    let run = run_cli(&["classify", "--input", "/nonexistent/moodgate/request.json"]);
    assert_exit_code(&run, EXIT_GENERAL_ERROR, "missing input file");
    assert_eq!(run.error_json()["code"], "ERR_IO");
}

#[test]
fn test_classify_with_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "debug = true\n\n[micro]\nbase_threshold = 3.0\n").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let mut args = OVERLOADED_ARGS.to_vec();
    args.extend(["--config", path.as_str()]);
    let run = run_cli(&args);
    assert_exit_code(&run, EXIT_SUCCESS, "custom config");
    assert_eq!(run.json()["decision"]["macro_key"], "overloaded");
}

#[test]
fn test_classify_invalid_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[decision]\nuncertainty_floor = 0.9\n").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let mut args = OVERLOADED_ARGS.to_vec();
    args.extend(["--config", path.as_str()]);
    let run = run_cli(&args);
    assert_exit_code(&run, EXIT_INVALID_INPUT, "invalid config");
    assert_eq!(run.error_json()["code"], "ERR_CONFIG");
}

#[test]
fn test_classify_missing_config_file() {
    let mut args = OVERLOADED_ARGS.to_vec();
    args.extend(["--config", "/nonexistent/moodgate/engine.toml"]);
    let run = run_cli(&args);
    assert_exit_code(&run, EXIT_GENERAL_ERROR, "missing config file");
    assert_eq!(run.error_json()["code"], "ERR_IO");
}
