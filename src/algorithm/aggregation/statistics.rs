//! Descriptive statistics helpers
//!
//! Order statistics here use the floor-index convention throughout: the
//! "median" of an even-length array is its upper-middle element, and a
//! percentile index past the end yields nothing.

use std::collections::BTreeMap;

use itertools::Itertools;

/// Count items per string label
pub fn count_by<'a, T, I, F>(items: I, label: F) -> BTreeMap<String, usize>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> Option<&'a str>,
{
    items
        .into_iter()
        .filter_map(label)
        .fold(BTreeMap::new(), |mut counts, key| {
            *counts.entry(key.to_string()).or_insert(0) += 1;
            counts
        })
}

/// Most frequent label, ties going to the label seen first
pub fn most_frequent<'a, I>(labels: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let labels: Vec<&str> = labels.into_iter().collect();
    let counts = labels.iter().copied().counts();

    labels
        .iter()
        .copied()
        .unique()
        .fold(None, |best: Option<(&str, usize)>, label| {
            let count = counts[label];
            match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((label, count)),
            }
        })
        .map(|(label, _)| label)
}

/// Element at index `floor(n / 2)` of an ascending slice
pub fn floor_median<T: Copy>(sorted: &[T]) -> Option<T> {
    sorted.get(sorted.len() / 2).copied()
}

/// Element at index `floor(n * fraction)` of an ascending slice
///
/// `None` when the index falls outside the slice.
pub fn floor_percentile<T: Copy>(sorted: &[T], fraction: f64) -> Option<T> {
    let index = (sorted.len() as f64 * fraction).floor();
    if index < 0.0 {
        return None;
    }
    sorted.get(index as usize).copied()
}

/// Arithmetic mean; `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Ascending copy of float values
pub fn sorted_floats(values: &[f64]) -> Vec<f64> {
    values.iter().copied().sorted_by(f64::total_cmp).collect()
}

/// Population standard deviation (divides by n); 0 for an empty slice
pub fn population_std_dev(values: &[f64]) -> f64 {
    let Some(avg) = mean(values) else {
        return 0.0;
    };
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
