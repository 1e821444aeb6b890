//! Most frequent times of travel: month, day of week, start hour.

use std::time::Instant;

use crate::core::stats::{NO_DATA_MSG, elapsed_note, most_common};
use crate::models::trip::TripTable;
use crate::utils::formatting::bold;
use crate::utils::title_case;

#[derive(Debug, PartialEq, Eq)]
pub struct TimeStats {
    pub month: &'static str,
    pub day_of_week: &'static str,
    pub start_hour: u32,
}

pub fn compute(table: &TripTable) -> Option<TimeStats> {
    let month = most_common(table.trips.iter().map(|t| t.month))?;
    let day_of_week = most_common(table.trips.iter().map(|t| t.day_of_week))?;
    let start_hour = most_common(table.trips.iter().map(|t| t.start_hour()))?;

    Some(TimeStats {
        month,
        day_of_week,
        start_hour,
    })
}

pub fn report(table: &TripTable) -> String {
    let started = Instant::now();
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n\n",
        bold("Calculating The Most Frequent Times of Travel...")
    ));

    match compute(table) {
        Some(stats) => {
            out.push_str(&format!("Most Common Month: {}\n", title_case(stats.month)));
            out.push_str(&format!(
                "Most Common Day of Week: {}\n",
                title_case(stats.day_of_week)
            ));
            out.push_str(&format!("Most Common Start Hour: {}\n", stats.start_hour));
        }
        None => out.push_str(&format!("{}\n", NO_DATA_MSG)),
    }

    out.push_str(&elapsed_note(started));
    out
}
