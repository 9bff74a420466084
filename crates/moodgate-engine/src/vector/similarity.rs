//! Range-normalised similarity between state vectors.

use super::{Dimension, StateVector};

/// Similarity in `[0, 1]`: one minus the root-mean-square of per-dimension
/// differences, each divided by its dimension's span.
///
/// # Example
///
/// ```
/// use moodgate_engine::vector::{similarity, StateVector};
///
/// let v = StateVector::zero();
/// assert_eq!(similarity(&v, &v), 1.0);
/// ```
pub fn similarity(a: &StateVector, b: &StateVector) -> f32 {
    let sum_sq: f32 = Dimension::ALL
        .iter()
        .map(|&d| {
            let diff = (a.get(d) - b.get(d)) / d.span();
            diff * diff
        })
        .sum();
    let rms = (sum_sq / Dimension::ALL.len() as f32).sqrt();
    (1.0 - rms).clamp(0.0, 1.0)
}
