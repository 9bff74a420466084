//! `moodgate micro`, `gates` and `states` end to end.

use super::helpers::{assert_exit_code, run_cli, EXIT_INVALID_INPUT, EXIT_SUCCESS};

#[test]
fn test_micro_selects_profile() {
    let run = run_cli(&[
        "micro",
        "--macro",
        "pressured",
        "--tag",
        "sig.deadline.present",
        "--tag",
        "sig.tension.high",
    ]);
    assert_exit_code(&run, EXIT_SUCCESS, "micro rushed");

    let value = run.json();
    assert_eq!(value["macro_key"], "pressured");
    assert_eq!(value["micro"], "rushed");
}

#[test]
fn test_micro_unknown_macro() {
    let run = run_cli(&["micro", "--macro", "elated"]);
    assert_exit_code(&run, EXIT_INVALID_INPUT, "unknown macro");
    assert_eq!(run.error_json()["code"], "ERR_INVALID_INPUT");
}

#[test]
fn test_gates_report() {
    let run = run_cli(&["gates", "--macro", "overloaded", "--tag", "sig.clarity.low"]);
    assert_exit_code(&run, EXIT_SUCCESS, "gates");

    let value = run.json();
    assert_eq!(value["open_gates"], serde_json::json!(["agency", "workload"]));
    assert_eq!(value["closure"]["clarity"], true);
    assert_eq!(value["all_closed"], false);
}

#[test]
fn test_states_lists_catalogue() {
    let run = run_cli(&["states"]);
    assert_exit_code(&run, EXIT_SUCCESS, "states");

    let value = run.json();
    let entries = value.as_array().expect("states output is an array");
    assert_eq!(entries.len(), 16);
    let uncertain = entries
        .iter()
        .find(|e| e["key"] == "uncertain")
        .expect("uncertain listed");
    assert_eq!(uncertain["class"], "sentinel");
    assert!(uncertain["micro"].as_array().unwrap().is_empty());
}

#[test]
fn test_missing_subcommand_fails() {
    let run = run_cli(&[]);
    assert_ne!(run.exit_code, EXIT_SUCCESS);
}
