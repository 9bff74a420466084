//! Baseline ratings → state vector.
//!
//! Six self-report ratings on a 7-point scale are converted to unit values
//! and distributed onto the [`StateVector`]. Energy is split: above the
//! midpoint it becomes arousal, below it becomes fatigue, never both.
//!
//! # Input contract
//!
//! - Scale: integers `1..=7`, midpoint `4`.
//! - Missing or non-numeric values take the midpoint.
//! - Out-of-range values are clamped; fractional values are rounded.
//!
//! # Example
//!
//! ```
//! use moodgate_engine::mapper::{map_baseline, BaselineRatings};
//!
//! let ratings = BaselineRatings::new(2, 2, 6, 3, 2, 3);
//! let v = map_baseline(&ratings);
//! assert_eq!(v.valence, -2.0);
//! assert_eq!(v.arousal, 0.0);
//! assert_eq!(v.fatigue, 2.0);
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::vector::{Dimension, StateVector};

/// The canonical rating scale.
pub struct RatingScale;

impl RatingScale {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 7;
    pub const MIDPOINT: i32 = 4;

    /// Clamp a possibly-missing rating, defaulting to the midpoint.
    #[inline]
    pub fn normalize(rating: Option<i32>) -> i32 {
        rating.unwrap_or(Self::MIDPOINT).clamp(Self::MIN, Self::MAX)
    }

    /// Rating → `[0, 1]`.
    #[inline]
    pub fn unit(rating: Option<i32>) -> f32 {
        let r = Self::normalize(rating);
        (r - Self::MIN) as f32 / (Self::MAX - Self::MIN) as f32
    }
}

/// Self-reported baseline ratings.
///
/// Deserialisation is lenient: any non-numeric JSON value is treated as
/// missing, and numbers are rounded to the nearest integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineRatings {
    #[serde(default, deserialize_with = "lenient_rating")]
    pub mood: Option<i32>,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub energy: Option<i32>,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub tension: Option<i32>,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub clarity: Option<i32>,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub control: Option<i32>,
    #[serde(default, alias = "social_capacity", deserialize_with = "lenient_rating")]
    pub social: Option<i32>,
}

impl BaselineRatings {
    /// All six ratings present.
    pub fn new(mood: i32, energy: i32, tension: i32, clarity: i32, control: i32, social: i32) -> Self {
        Self {
            mood: Some(mood),
            energy: Some(energy),
            tension: Some(tension),
            clarity: Some(clarity),
            control: Some(control),
            social: Some(social),
        }
    }

    /// Every rating at the scale midpoint.
    pub fn midpoint() -> Self {
        let m = RatingScale::MIDPOINT;
        Self::new(m, m, m, m, m, m)
    }

    /// Copy with every rating defaulted and clamped.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::new(
            RatingScale::normalize(self.mood),
            RatingScale::normalize(self.energy),
            RatingScale::normalize(self.tension),
            RatingScale::normalize(self.clarity),
            RatingScale::normalize(self.control),
            RatingScale::normalize(self.social),
        )
    }
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).map(|f| {
            // Saturating cast; clamping to the scale happens in `RatingScale`.
            f.round() as i32
        }),
        _ => None,
    })
}

/// Map baseline ratings to a clamped state vector.
///
/// With `u = unit(r)` the mapping is `valence = (2u − 1)·3`,
/// `tension = 3u`, `certainty / agency / socialness = 2u`, and energy's
/// centred value `2u − 1` times 3 goes to arousal or fatigue. It is computed
/// from integer rating offsets so every output lands exactly on its step.
pub fn map_baseline(ratings: &BaselineRatings) -> StateVector {
    let r = ratings.normalized();
    let from_mid = |x: Option<i32>| (RatingScale::normalize(x) - RatingScale::MIDPOINT) as f32;
    let from_min = |x: Option<i32>| (RatingScale::normalize(x) - RatingScale::MIN) as f32;
    let steps = (RatingScale::MAX - RatingScale::MIN) as f32;

    let mut v = StateVector::zero();
    v.set(Dimension::Valence, from_mid(r.mood));

    let energy = from_mid(r.energy);
    if energy > 0.0 {
        v.set(Dimension::Arousal, energy);
    } else if energy < 0.0 {
        v.set(Dimension::Fatigue, -energy);
    }

    v.set(Dimension::Tension, from_min(r.tension) * 3.0 / steps);
    v.set(Dimension::Certainty, from_min(r.clarity) * 2.0 / steps);
    v.set(Dimension::Agency, from_min(r.control) * 2.0 / steps);
    v.set(Dimension::Socialness, from_min(r.social) * 2.0 / steps);
    v
}

/// Blend an evidence vector into a baseline: `baseline + (evidence − zero) · weight`.
///
/// The weight is clamped to `[0, 1]`; NaN weights are treated as zero.
pub fn blend_evidence(baseline: &StateVector, evidence: &StateVector, weight: f32) -> StateVector {
    let weight = if weight.is_nan() { 0.0 } else { weight.clamp(0.0, 1.0) };
    baseline.add_scaled(&evidence.clamped(), weight)
}

/// Map ratings and, when present, blend in evidence.
pub fn map_with_evidence(
    ratings: &BaselineRatings,
    evidence: Option<&StateVector>,
    weight: f32,
) -> StateVector {
    let base = map_baseline(ratings);
    match evidence {
        Some(e) => blend_evidence(&base, e, weight),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_mood_high_tension_vector() {
        let v = map_baseline(&BaselineRatings::new(2, 2, 6, 3, 2, 3));
        assert_eq!(v.valence, -2.0);
        assert_eq!(v.arousal, 0.0);
        assert_eq!(v.fatigue, 2.0);
        assert!((v.tension - 2.5).abs() < 1e-6);
        assert!((v.agency - 1.0 / 3.0).abs() < 1e-6);
        assert!((v.certainty - 2.0 / 3.0).abs() < 1e-6);
        assert!((v.socialness - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(v.self_blame, 0.0);
        assert_eq!(v.fear_bias, 0.0);
    }

    #[test]
    fn test_unit_scale() {
        assert_eq!(RatingScale::unit(Some(1)), 0.0);
        assert_eq!(RatingScale::unit(Some(7)), 1.0);
        assert_eq!(RatingScale::unit(None), 0.5);
        assert_eq!(RatingScale::unit(Some(42)), 1.0);
    }

    #[test]
    fn test_energy_is_exclusive() {
        for energy in RatingScale::MIN..=RatingScale::MAX {
            let mut r = BaselineRatings::midpoint();
            r.energy = Some(energy);
            let v = map_baseline(&r);
            assert!(
                v.arousal == 0.0 || v.fatigue == 0.0,
                "energy {} produced arousal {} and fatigue {}",
                energy,
                v.arousal,
                v.fatigue
            );
        }
        let v = map_baseline(&BaselineRatings::midpoint());
        assert_eq!((v.arousal, v.fatigue), (0.0, 0.0));
        let mut r = BaselineRatings::midpoint();
        r.energy = Some(7);
        assert_eq!(map_baseline(&r).arousal, 3.0);
        r.energy = Some(1);
        assert_eq!(map_baseline(&r).fatigue, 3.0);
    }

    #[test]
    fn test_missing_and_out_of_range_default() {
        let v = map_baseline(&BaselineRatings::default());
        assert_eq!(v, map_baseline(&BaselineRatings::midpoint()));

        let wild = BaselineRatings::new(-40, 99, 0, 8, 100, -1);
        assert_eq!(wild.normalized(), BaselineRatings::new(1, 7, 1, 7, 7, 1));
        assert!(map_baseline(&wild).is_normalized());
    }

    #[test]
    fn test_lenient_deserialization() {
        let r: BaselineRatings = serde_json::from_str(
            r#"{"mood": "sad", "energy": 5.6, "tension": null, "clarity": true, "social_capacity": 2}"#,
        )
        .unwrap();
        assert_eq!(r.mood, None);
        assert_eq!(r.energy, Some(6));
        assert_eq!(r.tension, None);
        assert_eq!(r.clarity, None);
        assert_eq!(r.control, None);
        assert_eq!(r.social, Some(2));
    }

    #[test]
    fn test_blend_evidence() {
        let base = map_baseline(&BaselineRatings::midpoint());
        let evidence = StateVector::zero().with(Dimension::FearBias, 3.0);
        let blended = blend_evidence(&base, &evidence, 0.5);
        assert_eq!(blended.fear_bias, 1.5);
        assert_eq!(blended.tension, base.tension);

        assert_eq!(blend_evidence(&base, &evidence, f32::NAN), base);
        assert_eq!(blend_evidence(&base, &evidence, 7.0).fear_bias, 3.0);
    }

    #[test]
    fn test_every_rating_grid_point_is_normalized() {
        for r in RatingScale::MIN..=RatingScale::MAX {
            let v = map_baseline(&BaselineRatings::new(r, r, r, r, r, r));
            assert!(v.is_normalized());
        }
    }
}
