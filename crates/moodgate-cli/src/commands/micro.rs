//! `moodgate micro`: micro refinement for a known macro.

use std::path::PathBuf;

use clap::Args;
use moodgate_engine::tags::is_canonical;
use tracing::warn;

use super::classify::load_engine;
use super::{emit, parse_state_key, to_json};
use crate::error::CliError;

/// Arguments for `micro`.
#[derive(Args, Debug, Default, Clone)]
pub struct MicroArgs {
    /// Macro state key (e.g. overloaded)
    #[arg(long = "macro", value_name = "KEY")]
    pub macro_key: String,

    /// Evidence tag, repeatable
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// TOML engine configuration
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: &MicroArgs) -> Result<String, CliError> {
    let macro_key = parse_state_key(&args.macro_key)?;
    for tag in args.tags.iter().filter(|t| !is_canonical(t)) {
        warn!(tag = %tag, "tag is not in sig.<axis>.<level> or ctx.<name> form");
    }

    let engine = load_engine(args.config.as_ref())?;
    let selection = engine.select_micro(macro_key, &args.tags);
    to_json(&selection, args.pretty)
}

pub fn handle(args: MicroArgs) -> i32 {
    emit("micro", run(&args))
}
