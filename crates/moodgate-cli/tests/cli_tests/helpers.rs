//! Helpers for driving the `moodgate` binary.

use std::process::Command;

use serde_json::Value;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GENERAL_ERROR: i32 = 1;
pub const EXIT_INVALID_INPUT: i32 = 4;

/// Captured result of one CLI invocation.
#[derive(Debug)]
pub struct CliRun {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliRun {
    /// Parse stdout as JSON, panicking with the captured output on failure.
    pub fn json(&self) -> Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({}):\nstdout: {}\nstderr: {}",
                e, self.stdout, self.stderr
            )
        })
    }

    /// The structured error printed as the last stderr line.
    pub fn error_json(&self) -> Value {
        let line = self
            .stderr
            .lines()
            .rev()
            .find(|l| l.trim_start().starts_with('{'))
            .unwrap_or_else(|| panic!("no JSON error on stderr: {}", self.stderr));
        serde_json::from_str(line).expect("stderr error line is JSON")
    }
}

/// Run the binary with `args`.
pub fn run_cli(args: &[&str]) -> CliRun {
    let output = Command::new(env!("CARGO_BIN_EXE_moodgate"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn moodgate binary");

    CliRun {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

pub fn assert_exit_code(run: &CliRun, expected: i32, context: &str) {
    assert_eq!(
        run.exit_code, expected,
        "{}: expected exit {}, got {}\nstdout: {}\nstderr: {}",
        context, expected, run.exit_code, run.stdout, run.stderr
    );
}
