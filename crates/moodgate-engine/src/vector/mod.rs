//! State vector representation and the centroid table.
//!
//! # Components
//!
//! - [`StateVector`]: ten named dimensions, each clamped to its own range
//! - [`Dimension`]: dimension identifiers with their valid ranges
//! - [`StateKey`]: every named state the engine knows about
//! - [`centroid`]: read-only reference vector per state
//! - [`similarity`]: range-normalised distance similarity in `[0, 1]`
//!
//! Every vector that leaves this module is clamp-normalised. Arithmetic
//! helpers ([`StateVector::add_scaled`]) re-clamp before returning.

mod centroids;
mod similarity;

pub use centroids::{centroid, StateKey, StateClass};
pub use similarity::similarity;

use serde::{Deserialize, Serialize};

/// One axis of the state vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Valence,
    Arousal,
    Tension,
    Agency,
    SelfBlame,
    OtherBlame,
    Certainty,
    Socialness,
    Fatigue,
    FearBias,
}

impl Dimension {
    /// All dimensions in storage order.
    pub const ALL: [Dimension; 10] = [
        Dimension::Valence,
        Dimension::Arousal,
        Dimension::Tension,
        Dimension::Agency,
        Dimension::SelfBlame,
        Dimension::OtherBlame,
        Dimension::Certainty,
        Dimension::Socialness,
        Dimension::Fatigue,
        Dimension::FearBias,
    ];

    /// Inclusive `(min, max)` range of the dimension.
    pub const fn range(self) -> (f32, f32) {
        match self {
            Dimension::Valence => (-3.0, 3.0),
            Dimension::Arousal | Dimension::Tension | Dimension::Fatigue | Dimension::FearBias => {
                (0.0, 3.0)
            }
            Dimension::Agency
            | Dimension::SelfBlame
            | Dimension::OtherBlame
            | Dimension::Certainty
            | Dimension::Socialness => (0.0, 2.0),
        }
    }

    /// Width of the range, used to normalise distances.
    #[inline]
    pub fn span(self) -> f32 {
        let (lo, hi) = self.range();
        hi - lo
    }

    /// Snake-case field name.
    pub const fn name(self) -> &'static str {
        match self {
            Dimension::Valence => "valence",
            Dimension::Arousal => "arousal",
            Dimension::Tension => "tension",
            Dimension::Agency => "agency",
            Dimension::SelfBlame => "self_blame",
            Dimension::OtherBlame => "other_blame",
            Dimension::Certainty => "certainty",
            Dimension::Socialness => "socialness",
            Dimension::Fatigue => "fatigue",
            Dimension::FearBias => "fear_bias",
        }
    }

    /// Clamp a raw value into this dimension's range, mapping NaN to the range minimum.
    #[inline]
    pub fn clamp(self, value: f32) -> f32 {
        let (lo, hi) = self.range();
        if value.is_nan() {
            return lo.max(0.0).min(hi);
        }
        value.clamp(lo, hi)
    }
}

/// Ten-dimensional emotional state.
///
/// Construct through [`StateVector::zero`], [`StateVector::new`] or
/// deserialisation followed by [`StateVector::clamped`]; all three paths
/// produce in-range values.
///
/// # Example
///
/// ```
/// use moodgate_engine::vector::{Dimension, StateVector};
///
/// let v = StateVector::zero().with(Dimension::Valence, -9.0);
/// assert_eq!(v.valence, -3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateVector {
    pub valence: f32,
    pub arousal: f32,
    pub tension: f32,
    pub agency: f32,
    pub self_blame: f32,
    pub other_blame: f32,
    pub certainty: f32,
    pub socialness: f32,
    pub fatigue: f32,
    pub fear_bias: f32,
}

impl Default for StateVector {
    fn default() -> Self {
        Self::zero()
    }
}

impl StateVector {
    /// All-zero vector. Zero lies inside every range.
    pub const fn zero() -> Self {
        Self {
            valence: 0.0,
            arousal: 0.0,
            tension: 0.0,
            agency: 0.0,
            self_blame: 0.0,
            other_blame: 0.0,
            certainty: 0.0,
            socialness: 0.0,
            fatigue: 0.0,
            fear_bias: 0.0,
        }
    }

    /// Build from values in [`Dimension::ALL`] order, clamping each.
    pub fn new(values: [f32; 10]) -> Self {
        let mut v = Self::zero();
        for (dim, value) in Dimension::ALL.iter().zip(values) {
            v.set(*dim, value);
        }
        v
    }

    /// Read one dimension.
    #[inline]
    pub fn get(&self, dim: Dimension) -> f32 {
        match dim {
            Dimension::Valence => self.valence,
            Dimension::Arousal => self.arousal,
            Dimension::Tension => self.tension,
            Dimension::Agency => self.agency,
            Dimension::SelfBlame => self.self_blame,
            Dimension::OtherBlame => self.other_blame,
            Dimension::Certainty => self.certainty,
            Dimension::Socialness => self.socialness,
            Dimension::Fatigue => self.fatigue,
            Dimension::FearBias => self.fear_bias,
        }
    }

    /// Write one dimension, clamping into range.
    pub fn set(&mut self, dim: Dimension, value: f32) {
        let value = dim.clamp(value);
        match dim {
            Dimension::Valence => self.valence = value,
            Dimension::Arousal => self.arousal = value,
            Dimension::Tension => self.tension = value,
            Dimension::Agency => self.agency = value,
            Dimension::SelfBlame => self.self_blame = value,
            Dimension::OtherBlame => self.other_blame = value,
            Dimension::Certainty => self.certainty = value,
            Dimension::Socialness => self.socialness = value,
            Dimension::Fatigue => self.fatigue = value,
            Dimension::FearBias => self.fear_bias = value,
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, dim: Dimension, value: f32) -> Self {
        self.set(dim, value);
        self
    }

    /// Values in [`Dimension::ALL`] order.
    pub fn to_array(&self) -> [f32; 10] {
        Dimension::ALL.map(|d| self.get(d))
    }

    /// Copy with every field clamped. Use after deserialising untrusted input.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self::new(self.to_array())
    }

    /// `self + (other - zero) * weight`, re-clamped.
    #[must_use]
    pub fn add_scaled(&self, other: &StateVector, weight: f32) -> Self {
        let zero = Self::zero();
        let mut out = *self;
        for dim in Dimension::ALL {
            let delta = (other.get(dim) - zero.get(dim)) * weight;
            out.set(dim, self.get(dim) + delta);
        }
        out
    }

    /// True when every field lies within its range.
    pub fn is_normalized(&self) -> bool {
        Dimension::ALL.iter().all(|&d| {
            let (lo, hi) = d.range();
            let v = self.get(d);
            v.is_finite() && v >= lo && v <= hi
        })
    }
}
