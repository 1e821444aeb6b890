//! Most popular stations and trip.

use std::time::Instant;

use crate::core::stats::{NO_DATA_MSG, elapsed_note, most_common};
use crate::models::trip::TripTable;
use crate::utils::formatting::bold;

/// Separator between the two station names of a trip key.
const TRIP_SEPARATOR: &str = " to ";

#[derive(Debug, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// "<start> to <end>" of the most frequent station pair.
    pub trip: String,
}

pub fn compute(table: &TripTable) -> Option<StationStats> {
    let start_station = most_common(table.trips.iter().map(|t| t.start_station.as_str()))?;
    let end_station = most_common(table.trips.iter().map(|t| t.end_station.as_str()))?;
    let trip = most_common(
        table
            .trips
            .iter()
            .map(|t| format!("{}{}{}", t.start_station, TRIP_SEPARATOR, t.end_station)),
    )?;

    Some(StationStats {
        start_station: start_station.to_string(),
        end_station: end_station.to_string(),
        trip,
    })
}

pub fn report(table: &TripTable) -> String {
    let started = Instant::now();
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n\n",
        bold("Calculating The Most Popular Stations and Trip...")
    ));

    match compute(table) {
        Some(stats) => {
            out.push_str(&format!(
                "Most Common Start Station: {}\n",
                stats.start_station
            ));
            out.push_str(&format!("Most Common End Station: {}\n", stats.end_station));
            out.push_str(&format!("Most Common Trip: {}\n", stats.trip));
        }
        None => out.push_str(&format!("{}\n", NO_DATA_MSG)),
    }

    out.push_str(&elapsed_note(started));
    out
}
