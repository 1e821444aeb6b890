//! The four reporting passes over the filtered table. Each pass is pure
//! with respect to the table and renders its own report block.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use std::collections::BTreeMap;
use std::time::Instant;

/// Count occurrences, preserving the natural order of the keys.
pub fn value_counts<T, I>(values: I) -> BTreeMap<T, u64>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0u64) += 1;
    }
    counts
}

/// Most frequent value; ties resolve to the smallest value. The map
/// iterates keys in ascending order and only a strictly greater count
/// replaces the current winner.
pub fn most_common<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, u64)> = None;
    for (value, count) in value_counts(values) {
        match &best {
            Some((_, best_count)) if count <= *best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

/// Informational timing note appended to every report block.
pub(crate) fn elapsed_note(started: Instant) -> String {
    format!("\nThis took {:.6} seconds.\n", started.elapsed().as_secs_f64())
}

pub(crate) const NO_DATA_MSG: &str = "No trips match the selected filters.";
