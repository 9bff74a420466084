//! `moodgate classify`: run the full pipeline for one request.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use moodgate_engine::{ClassifyRequest, Engine, EngineConfig, EngineMode};
use tracing::{debug, info};

use super::{emit, to_json};
use crate::error::CliError;

/// Arguments for `classify`.
///
/// Rating flags override the ratings of an `--input` request; `--tag`
/// values are appended to its tags.
#[derive(Args, Debug, Default, Clone)]
pub struct ClassifyArgs {
    /// Mood rating (1-7)
    #[arg(long)]
    pub mood: Option<i32>,

    /// Energy rating (1-7)
    #[arg(long)]
    pub energy: Option<i32>,

    /// Tension rating (1-7)
    #[arg(long)]
    pub tension: Option<i32>,

    /// Clarity rating (1-7)
    #[arg(long)]
    pub clarity: Option<i32>,

    /// Sense-of-control rating (1-7)
    #[arg(long)]
    pub control: Option<i32>,

    /// Social-capacity rating (1-7)
    #[arg(long)]
    pub social: Option<i32>,

    /// JSON request file (ratings, evidence_vector, evidence_weight, tags, mode)
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Evidence tag, repeatable
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Rank deep-mode states as well as the macros
    #[arg(long)]
    pub deep: bool,

    /// TOML engine configuration
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Load the engine, falling back to defaults without `--config`.
pub(crate) fn load_engine(config: Option<&PathBuf>) -> Result<Engine, CliError> {
    match config {
        Some(path) => {
            let config = EngineConfig::from_file(path)?;
            info!(path = %path.display(), "loaded engine configuration");
            Ok(Engine::new(config)?)
        }
        None => Ok(Engine::with_defaults()),
    }
}

/// Assemble the request from `--input` and the flags.
pub(crate) fn build_request(args: &ClassifyArgs) -> Result<ClassifyRequest, CliError> {
    let mut request = match &args.input {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            serde_json::from_str::<ClassifyRequest>(&content).map_err(|e| {
                CliError::invalid_input(format!("{}: {}", path.display(), e))
            })?
        }
        None => ClassifyRequest::default(),
    };

    let ratings = &mut request.ratings;
    for (slot, flag) in [
        (&mut ratings.mood, args.mood),
        (&mut ratings.energy, args.energy),
        (&mut ratings.tension, args.tension),
        (&mut ratings.clarity, args.clarity),
        (&mut ratings.control, args.control),
        (&mut ratings.social, args.social),
    ] {
        if flag.is_some() {
            *slot = flag;
        }
    }

    request.tags.extend(args.tags.iter().cloned());
    if args.deep {
        request.mode = EngineMode::Deep;
    }
    Ok(request)
}

pub fn run(args: &ClassifyArgs) -> Result<String, CliError> {
    let engine = load_engine(args.config.as_ref())?;
    let request = build_request(args)?;
    debug!(?request, "classify request");

    let classification = engine.classify(&request)?;
    to_json(&classification, args.pretty)
}

pub fn handle(args: ClassifyArgs) -> i32 {
    emit("classify", run(&args))
}
