//! Total and mean trip duration.

use std::time::Instant;

use crate::core::stats::{NO_DATA_MSG, elapsed_note};
use crate::models::trip::TripTable;
use crate::utils::formatting::bold;

#[derive(Debug, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: f64,
    pub count: usize,
}

/// None on an empty table; the mean is undefined there and the report
/// states "no data" instead of dividing by zero.
pub fn compute(table: &TripTable) -> Option<DurationStats> {
    let count = table.len();
    if count == 0 {
        return None;
    }

    let total_secs: f64 = table.trips.iter().map(|t| t.duration_secs).sum();
    Some(DurationStats {
        total_secs,
        mean_secs: total_secs / count as f64,
        count,
    })
}

pub fn report(table: &TripTable) -> String {
    let started = Instant::now();
    let mut out = String::new();

    out.push_str(&format!("\n{}\n\n", bold("Calculating Trip Duration...")));

    match compute(table) {
        Some(stats) => {
            out.push_str(&format!(
                "Total Travel Time: {} seconds, or {:.2} hours\n",
                stats.total_secs,
                stats.total_secs / 3600.0
            ));
            out.push_str(&format!(
                "Mean Travel Time: {:.2} seconds, or {:.2} minutes\n",
                stats.mean_secs,
                stats.mean_secs / 60.0
            ));
        }
        None => out.push_str(&format!("{}\n", NO_DATA_MSG)),
    }

    out.push_str(&elapsed_note(started));
    out
}
