//! CLI command handlers.
//!
//! Each command exposes `run(args) -> Result<String, CliError>` producing
//! the JSON document for stdout, and `handle(args) -> i32` which prints
//! that document or the structured error and returns the exit code.

pub mod classify;
pub mod gates;
pub mod micro;
pub mod states;

use std::str::FromStr;

use moodgate_engine::StateKey;
use serde::Serialize;
use tracing::error;

use crate::error::{CliError, EXIT_SUCCESS};

/// Serialize `value` compactly or pretty-printed.
pub(crate) fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

/// Parse a macro key given on the command line.
///
/// Deep-mode keys and `uncertain` are accepted; micro lookup and gate
/// closure simply have nothing to offer for keys without catalogue entries.
pub(crate) fn parse_state_key(raw: &str) -> Result<StateKey, CliError> {
    StateKey::from_str(raw).map_err(CliError::InvalidInput)
}

/// Print the command result and map it to an exit code.
pub(crate) fn emit(command: &str, result: Result<String, CliError>) -> i32 {
    match result {
        Ok(json) => {
            println!("{}", json);
            EXIT_SUCCESS
        }
        Err(e) => {
            error!(command, code = e.error_code(), "{}", e);
            eprintln!("{}", e.to_json_error());
            e.exit_code()
        }
    }
}
