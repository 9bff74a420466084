//! Baseline mapper settings.

use serde::{Deserialize, Serialize};

/// Settings for turning ratings into a state vector.
///
/// The rating scale itself is fixed (see [`crate::mapper::RatingScale`]);
/// only the evidence blend is tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Blend weight applied to an evidence vector when the request does not
    /// carry its own. Range: `[0.0, 1.0]`
    pub evidence_weight: f32,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            evidence_weight: 0.35,
        }
    }
}

impl MapperConfig {
    /// Validate the mapper configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.evidence_weight) {
            return Err(format!(
                "evidence_weight must be in [0, 1], got {}",
                self.evidence_weight
            ));
        }
        Ok(())
    }
}
