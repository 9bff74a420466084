//! Discrete gate levels derived from a state vector.

use serde::{Deserialize, Serialize};

use crate::vector::StateVector;

/// Valence thresholds. Mapper outputs are integers in `[-3, 3]`.
pub const VALENCE_NEG: f32 = -0.5;
pub const VALENCE_VERY_NEG: f32 = -1.5;
pub const VALENCE_POS: f32 = 0.5;

/// Arousal and fatigue thresholds. Mapper outputs are integers in `[0, 3]`.
pub const ENERGY_LOW: f32 = 0.5;
pub const ENERGY_HIGH: f32 = 1.5;

/// Tension thresholds. Mapper outputs step by 0.5.
pub const TENSION_LOW: f32 = 0.75;
pub const TENSION_HIGH: f32 = 1.75;

/// Agency, certainty and socialness thresholds. Mapper outputs step by 1/3.
pub const THIRDS_LOW: f32 = 0.5;
pub const THIRDS_HIGH: f32 = 1.5;

/// Evidence-only dimensions.
pub const BLAME_HIGH: f32 = 1.0;
pub const FEAR_HIGH: f32 = 1.5;

/// A single named gate predicate.
///
/// Names follow the short `Dim_level` convention used in eligibility
/// reasons, e.g. `Ten_high` or `Vneg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Vneg,
    VveryNeg,
    Vpos,
    Vmid,
    ArLow,
    ArMid,
    ArHigh,
    TenLow,
    TenMid,
    TenHigh,
    AgLow,
    AgMid,
    AgHigh,
    CertLow,
    CertMid,
    CertHigh,
    SocLow,
    SocMid,
    SocHigh,
    FatLow,
    FatMid,
    FatHigh,
    SelfBlameHigh,
    OtherBlameHigh,
    FearHigh,
}

impl Level {
    pub const fn name(self) -> &'static str {
        match self {
            Level::Vneg => "Vneg",
            Level::VveryNeg => "Vvery_neg",
            Level::Vpos => "Vpos",
            Level::Vmid => "Vmid",
            Level::ArLow => "Ar_low",
            Level::ArMid => "Ar_mid",
            Level::ArHigh => "Ar_high",
            Level::TenLow => "Ten_low",
            Level::TenMid => "Ten_mid",
            Level::TenHigh => "Ten_high",
            Level::AgLow => "Ag_low",
            Level::AgMid => "Ag_mid",
            Level::AgHigh => "Ag_high",
            Level::CertLow => "Cert_low",
            Level::CertMid => "Cert_mid",
            Level::CertHigh => "Cert_high",
            Level::SocLow => "Soc_low",
            Level::SocMid => "Soc_mid",
            Level::SocHigh => "Soc_high",
            Level::FatLow => "Fat_low",
            Level::FatMid => "Fat_mid",
            Level::FatHigh => "Fat_high",
            Level::SelfBlameHigh => "Sb_high",
            Level::OtherBlameHigh => "Ob_high",
            Level::FearHigh => "Fear_high",
        }
    }
}

/// Flat record of gate predicates for one vector.
///
/// Computed once per classification; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GateLevels {
    pub v_neg: bool,
    pub v_very_neg: bool,
    pub v_pos: bool,
    pub v_mid: bool,
    pub ar_low: bool,
    pub ar_mid: bool,
    pub ar_high: bool,
    pub ten_low: bool,
    pub ten_mid: bool,
    pub ten_high: bool,
    pub ag_low: bool,
    pub ag_mid: bool,
    pub ag_high: bool,
    pub cert_low: bool,
    pub cert_mid: bool,
    pub cert_high: bool,
    pub soc_low: bool,
    pub soc_mid: bool,
    pub soc_high: bool,
    pub fat_low: bool,
    pub fat_mid: bool,
    pub fat_high: bool,
    pub self_blame_high: bool,
    pub other_blame_high: bool,
    pub fear_high: bool,
}

/// Three-way split of one value.
#[inline]
fn split(value: f32, low: f32, high: f32) -> (bool, bool, bool) {
    let is_low = value < low;
    let is_high = value > high;
    (is_low, !is_low && !is_high, is_high)
}

impl GateLevels {
    /// Compute gate levels from a state vector.
    ///
    /// # Example
    ///
    /// ```
    /// use moodgate_engine::gates::GateLevels;
    /// use moodgate_engine::vector::StateVector;
    ///
    /// let levels = GateLevels::from_vector(&StateVector::zero());
    /// assert!(levels.v_mid && levels.ar_low && levels.cert_low);
    /// ```
    pub fn from_vector(v: &StateVector) -> Self {
        let (ar_low, ar_mid, ar_high) = split(v.arousal, ENERGY_LOW, ENERGY_HIGH);
        let (fat_low, fat_mid, fat_high) = split(v.fatigue, ENERGY_LOW, ENERGY_HIGH);
        let (ten_low, ten_mid, ten_high) = split(v.tension, TENSION_LOW, TENSION_HIGH);
        let (ag_low, ag_mid, ag_high) = split(v.agency, THIRDS_LOW, THIRDS_HIGH);
        let (cert_low, cert_mid, cert_high) = split(v.certainty, THIRDS_LOW, THIRDS_HIGH);
        let (soc_low, soc_mid, soc_high) = split(v.socialness, THIRDS_LOW, THIRDS_HIGH);
        let v_neg = v.valence < VALENCE_NEG;
        let v_pos = v.valence > VALENCE_POS;

        Self {
            v_neg,
            v_very_neg: v.valence < VALENCE_VERY_NEG,
            v_pos,
            v_mid: !v_neg && !v_pos,
            ar_low,
            ar_mid,
            ar_high,
            ten_low,
            ten_mid,
            ten_high,
            ag_low,
            ag_mid,
            ag_high,
            cert_low,
            cert_mid,
            cert_high,
            soc_low,
            soc_mid,
            soc_high,
            fat_low,
            fat_mid,
            fat_high,
            self_blame_high: v.self_blame > BLAME_HIGH,
            other_blame_high: v.other_blame > BLAME_HIGH,
            fear_high: v.fear_bias > FEAR_HIGH,
        }
    }

    /// Evaluate one named predicate.
    pub fn holds(&self, level: Level) -> bool {
        match level {
            Level::Vneg => self.v_neg,
            Level::VveryNeg => self.v_very_neg,
            Level::Vpos => self.v_pos,
            Level::Vmid => self.v_mid,
            Level::ArLow => self.ar_low,
            Level::ArMid => self.ar_mid,
            Level::ArHigh => self.ar_high,
            Level::TenLow => self.ten_low,
            Level::TenMid => self.ten_mid,
            Level::TenHigh => self.ten_high,
            Level::AgLow => self.ag_low,
            Level::AgMid => self.ag_mid,
            Level::AgHigh => self.ag_high,
            Level::CertLow => self.cert_low,
            Level::CertMid => self.cert_mid,
            Level::CertHigh => self.cert_high,
            Level::SocLow => self.soc_low,
            Level::SocMid => self.soc_mid,
            Level::SocHigh => self.soc_high,
            Level::FatLow => self.fat_low,
            Level::FatMid => self.fat_mid,
            Level::FatHigh => self.fat_high,
            Level::SelfBlameHigh => self.self_blame_high,
            Level::OtherBlameHigh => self.other_blame_high,
            Level::FearHigh => self.fear_high,
        }
    }
}
