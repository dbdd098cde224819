#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers, NaN is considered as the greatest value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Returns an item paired with the greatest value or `None` if the sequence is empty.
/// Unlike `Iterator::max_by`, ties are resolved in favor of the earliest item.
pub fn select_first_max<T, I>(items: I) -> Option<T>
where
    I: IntoIterator<Item = (T, Float)>,
{
    items
        .into_iter()
        .fold(None, |best: Option<(T, Float)>, (item, value)| match best {
            Some((_, best_value)) if compare_floats(value, best_value) != Ordering::Greater => best,
            _ => Some((item, value)),
        })
        .map(|(item, _)| item)
}
