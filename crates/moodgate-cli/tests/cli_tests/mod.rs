//! CLI integration tests.
//!
//! Every test spawns the real `moodgate` binary and inspects its stdout,
//! stderr and exit code.

mod helpers;

mod classify_tests;
mod lookup_tests;
