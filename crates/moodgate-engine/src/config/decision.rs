//! Tie-break and uncertainty thresholds.

use serde::{Deserialize, Serialize};

/// Thresholds for the decision layer.
///
/// ```text
/// forced uncertain ⇔ top < strong_score
///                  ∧ winner lacks its strong signal
///                  ∧ certainty ≤ certainty_floor
///                  ∧ top < uncertainty_floor
/// ```
///
/// All other weak situations only lower the confidence band.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Top score at or above which a match is self-evidently acceptable.
    pub strong_score: f32,

    /// Very low floor below which (together with minimum certainty) the
    /// engine declines to name a state.
    pub uncertainty_floor: f32,

    /// Top score below which the `weak_match` warning is raised.
    pub weak_match_score: f32,

    /// Relative gap between the top two scores required for a High band.
    pub high_gap: f32,

    /// Scores within this distance of the top score are tied.
    pub tie_epsilon: f32,

    /// Certainty at or below this value is the effective minimum.
    pub certainty_floor: f32,

    /// Certainty below this value sets a Medium clarity flag.
    pub certainty_comfort: f32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            strong_score: 0.80,
            uncertainty_floor: 0.45,
            weak_match_score: 0.65,
            high_gap: 0.10,
            tie_epsilon: 1e-6,
            certainty_floor: 0.25,
            certainty_comfort: 1.0,
        }
    }
}

impl DecisionConfig {
    /// Validate the decision configuration.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("strong_score", self.strong_score),
            ("uncertainty_floor", self.uncertainty_floor),
            ("weak_match_score", self.weak_match_score),
            ("high_gap", self.high_gap),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1], got {}", name, value));
            }
        }
        if self.uncertainty_floor > self.weak_match_score {
            return Err(format!(
                "uncertainty_floor ({}) must be <= weak_match_score ({})",
                self.uncertainty_floor, self.weak_match_score
            ));
        }
        if self.weak_match_score > self.strong_score {
            return Err(format!(
                "weak_match_score ({}) must be <= strong_score ({})",
                self.weak_match_score, self.strong_score
            ));
        }
        if !(self.tie_epsilon > 0.0 && self.tie_epsilon < 0.01) {
            return Err(format!(
                "tie_epsilon must be in (0, 0.01), got {}",
                self.tie_epsilon
            ));
        }
        if !(0.0..=2.0).contains(&self.certainty_floor)
            || !(0.0..=2.0).contains(&self.certainty_comfort)
        {
            return Err("certainty thresholds must be in [0, 2]".to_string());
        }
        if self.certainty_floor >= self.certainty_comfort {
            return Err(format!(
                "certainty_floor ({}) must be < certainty_comfort ({})",
                self.certainty_floor, self.certainty_comfort
            ));
        }
        Ok(())
    }
}
