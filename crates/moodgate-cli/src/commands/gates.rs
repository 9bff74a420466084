//! `moodgate gates`: topic-gate closure for the question policy.

use clap::Args;
use moodgate_engine::gates::relevant_gates;
use moodgate_engine::{gate_closure, GateClosure, StateKey, TopicGate};
use serde::Serialize;

use super::{emit, parse_state_key, to_json};
use crate::error::CliError;

/// Arguments for `gates`.
#[derive(Args, Debug, Default, Clone)]
pub struct GatesArgs {
    /// Macro state key (e.g. pressured)
    #[arg(long = "macro", value_name = "KEY")]
    pub macro_key: String,

    /// Evidence tag, repeatable
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Serialize)]
struct GatesReport {
    macro_key: StateKey,
    relevant: &'static [TopicGate],
    closure: GateClosure,
    open_gates: Vec<TopicGate>,
    all_closed: bool,
}

pub fn run(args: &GatesArgs) -> Result<String, CliError> {
    let macro_key = parse_state_key(&args.macro_key)?;
    let closure = gate_closure(macro_key, &args.tags);
    let report = GatesReport {
        macro_key,
        relevant: relevant_gates(macro_key),
        closure,
        open_gates: closure.open_gates(),
        all_closed: closure.all_closed(),
    };
    to_json(&report, args.pretty)
}

pub fn handle(args: GatesArgs) -> i32 {
    emit("gates", run(&args))
}
