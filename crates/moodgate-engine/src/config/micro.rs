//! Micro-state scoring weights.

use serde::{Deserialize, Serialize};

/// Weights and thresholds for micro-state tag matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MicroConfig {
    /// Per-tag bonus when every must-have tag is present.
    pub full_must_weight: f32,

    /// Per-tag bonus when only some must-have tags are present.
    pub partial_must_weight: f32,

    /// Per-tag bonus for supporting tags.
    pub supporting_weight: f32,

    /// Per-tag bonus for axis/context tags.
    pub context_weight: f32,

    /// Numerator of the specificity bonus `specificity_bonus / matched_tags`.
    pub specificity_bonus: f32,

    /// Acceptance threshold with no must-have coverage.
    pub base_threshold: f32,

    /// Acceptance threshold when every must-have tag is present.
    pub full_must_threshold: f32,
}

impl Default for MicroConfig {
    fn default() -> Self {
        Self {
            full_must_weight: 2.0,
            partial_must_weight: 1.5,
            supporting_weight: 1.0,
            context_weight: 0.25,
            specificity_bonus: 0.5,
            base_threshold: 2.5,
            full_must_threshold: 1.5,
        }
    }
}

impl MicroConfig {
    /// Validate the micro configuration.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("full_must_weight", self.full_must_weight),
            ("partial_must_weight", self.partial_must_weight),
            ("supporting_weight", self.supporting_weight),
            ("context_weight", self.context_weight),
            ("specificity_bonus", self.specificity_bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be finite and >= 0, got {}", name, value));
            }
        }
        for (name, value) in [
            ("base_threshold", self.base_threshold),
            ("full_must_threshold", self.full_must_threshold),
        ] {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
        }
        if self.partial_must_weight > self.full_must_weight {
            return Err(format!(
                "partial_must_weight ({}) must be <= full_must_weight ({})",
                self.partial_must_weight, self.full_must_weight
            ));
        }
        if self.full_must_threshold <= 0.0 {
            return Err(format!(
                "full_must_threshold must be > 0, got {}",
                self.full_must_threshold
            ));
        }
        if self.full_must_threshold > self.base_threshold {
            return Err(format!(
                "full_must_threshold ({}) must be <= base_threshold ({})",
                self.full_must_threshold, self.base_threshold
            ));
        }
        Ok(())
    }
}
