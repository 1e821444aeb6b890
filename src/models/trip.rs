use chrono::{NaiveDateTime, Timelike};

use crate::utils::date::{day_name, month_name};

/// One trip record, with the calendar fields derived from the start
/// timestamp at load time.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub duration_secs: f64,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    /// Lowercase month name of `start_time`.
    pub month: &'static str,
    /// Lowercase day-of-week name of `start_time`.
    pub day_of_week: &'static str,
}

impl Trip {
    pub fn new(
        start_time: NaiveDateTime,
        start_station: String,
        end_station: String,
        duration_secs: f64,
        user_type: String,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            month: month_name(&start_time),
            day_of_week: day_name(&start_time),
            start_time,
            start_station,
            end_station,
            duration_secs,
            user_type,
            gender,
            birth_year,
        }
    }

    /// Hour of day (0-23) of the start timestamp.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Ordered collection of trips for one city, after the month/day filters.
/// The schema flags are evaluated once from the CSV header, so the user
/// aggregator can tell "column absent" apart from "column empty".
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    pub trips: Vec<Trip>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl TripTable {
    pub fn new(trips: Vec<Trip>, has_gender: bool, has_birth_year: bool) -> Self {
        Self {
            trips,
            has_gender,
            has_birth_year,
        }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
