//! Moodgate CLI
//!
//! Command-line front end for the moodgate decision engine.
//!
//! # Usage
//!
//! ```bash
//! # Classify baseline ratings
//! moodgate classify --mood 2 --energy 2 --tension 6 --clarity 3 --control 2 --social 3
//!
//! # Classify a JSON request with evidence tags, deep mode
//! moodgate classify --input request.json --tag sig.fear.high --deep --pretty
//!
//! # Micro refinement for a known macro
//! moodgate micro --macro overloaded --tag sig.tasks.many --tag sig.workload.high
//!
//! # Which topic gates are still open
//! moodgate gates --macro pressured --tag sig.deadline.present
//!
//! # List the state catalogue
//! moodgate states
//! ```
//!
//! Results are written to stdout as JSON. Errors go to stderr as JSON and
//! set the exit code (see [`error`]).

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

/// Moodgate CLI - emotional-state classification
#[derive(Parser)]
#[command(name = "moodgate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify ratings (and optional evidence) into a macro and micro state
    Classify(commands::classify::ClassifyArgs),

    /// Select a micro state for an already decided macro
    Micro(commands::micro::MicroArgs),

    /// Report topic-gate closure for a macro and evidence tags
    Gates(commands::gates::GatesArgs),

    /// List every state with its class, centroid and micro catalogue
    States(commands::states::StatesArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr; stdout is reserved for JSON output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Classify(args) => commands::classify::handle(args),
        Commands::Micro(args) => commands::micro::handle(args),
        Commands::Gates(args) => commands::gates::handle(args),
        Commands::States(args) => commands::states::handle(args),
    };

    std::process::exit(exit_code);
}
