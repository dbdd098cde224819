#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/distance_test.rs"]
mod distance_test;

use crate::utils::Float;

/// Calculates squared euclidean distance between two vectors. No square root is taken: the
/// squared value is what both winner selection and error accumulation work with.
#[inline]
pub fn squared_euclidean(a: &[Float], b: &[Float]) -> Float {
    debug_assert_eq!(a.len(), b.len());

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Moves `position` towards `target` by linear interpolation: `p = (1 - rate) * p + rate * t`.
#[inline]
pub fn blend(position: &mut [Float], target: &[Float], rate: Float) {
    debug_assert_eq!(position.len(), target.len());

    position.iter_mut().zip(target.iter()).for_each(|(value, target)| {
        *value = (1. - rate) * *value + rate * *target;
    });
}

/// Returns a point lying exactly between two vectors.
pub fn midpoint(a: &[Float], b: &[Float]) -> Vec<Float> {
    debug_assert_eq!(a.len(), b.len());

    a.iter().zip(b.iter()).map(|(a, b)| 0.5 * (a + b)).collect()
}
