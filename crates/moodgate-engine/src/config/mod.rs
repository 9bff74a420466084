//! Engine configuration types.
//!
//! Rule tables, gate thresholds and the centroid table are fixed design
//! policy and live in code. What is configurable here are the numeric knobs
//! around them: the evidence blend weight, the decision-layer thresholds and
//! the micro-state scoring weights.
//!
//! Configuration can be built in code, parsed from TOML, or loaded from a
//! file. Every path runs [`EngineConfig::validate`].

mod decision;
mod mapper;
mod micro;


pub use self::decision::DecisionConfig;
pub use self::mapper::MapperConfig;
pub use self::micro::MicroConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Top-level engine configuration.
///
/// # Example
///
/// ```
/// use moodgate_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.validate().is_ok());
/// assert!(config.decision.uncertainty_floor < config.decision.strong_score);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Baseline mapper settings.
    pub mapper: MapperConfig,

    /// Tie-break and uncertainty thresholds.
    pub decision: DecisionConfig,

    /// Micro-state scoring weights.
    pub micro: MicroConfig,

    /// Emit per-candidate trace logging.
    pub debug: bool,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document. Missing sections take defaults.
    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate().map_err(EngineError::Config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Io`] when the file cannot be read.
    /// - [`EngineError::Config`] when it does not parse or validate.
    pub fn from_file(path: &Path) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.mapper.validate()?;
        self.decision.validate()?;
        self.micro.validate()?;
        Ok(())
    }
}
