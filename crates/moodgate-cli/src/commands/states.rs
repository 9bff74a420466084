//! `moodgate states`: list the state catalogue.

use clap::Args;
use moodgate_engine::gates::relevant_gates;
use moodgate_engine::micro::catalogue;
use moodgate_engine::vector::{centroid, StateClass};
use moodgate_engine::{StateKey, StateVector, TopicGate};
use serde::Serialize;

use super::{emit, to_json};
use crate::error::CliError;

/// Arguments for `states`.
#[derive(Args, Debug, Default, Clone)]
pub struct StatesArgs {
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Serialize)]
struct StateEntry {
    key: StateKey,
    class: StateClass,
    centroid: StateVector,
    micro: Vec<&'static str>,
    gates: &'static [TopicGate],
}

fn entries() -> Vec<StateEntry> {
    StateKey::ALL
        .iter()
        .map(|&key| StateEntry {
            key,
            class: key.class(),
            centroid: centroid(key),
            micro: catalogue(key).iter().map(|p| p.key).collect(),
            gates: relevant_gates(key),
        })
        .collect()
}

pub fn run(args: &StatesArgs) -> Result<String, CliError> {
    to_json(&entries(), args.pretty)
}

pub fn handle(args: StatesArgs) -> i32 {
    emit("states", run(&args))
}
