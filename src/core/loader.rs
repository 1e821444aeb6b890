//! Dataset loading: CSV → TripTable, with derived calendar columns and the
//! month/day equality filters applied.

use std::path::Path;

use csv::StringRecord;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::filters::FilterSelection;
use crate::models::trip::{Trip, TripTable};
use crate::utils::date::parse_timestamp;

const COL_START_TIME: &str = "Start Time";
const COL_START_STATION: &str = "Start Station";
const COL_END_STATION: &str = "End Station";
const COL_TRIP_DURATION: &str = "Trip Duration";
const COL_USER_TYPE: &str = "User Type";
const COL_GENDER: &str = "Gender";
const COL_BIRTH_YEAR: &str = "Birth Year";

/// Column positions resolved from the CSV header, once per dataset.
/// Gender and birth year are optional; their absence is recorded on the
/// resulting table, not treated as an error.
struct Schema {
    start_time: usize,
    start_station: usize,
    end_station: usize,
    duration: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Schema {
    fn from_headers(headers: &StringRecord) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| AppError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            start_time: require(COL_START_TIME)?,
            start_station: require(COL_START_STATION)?,
            end_station: require(COL_END_STATION)?,
            duration: require(COL_TRIP_DURATION)?,
            user_type: require(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }
}

/// Load the dataset for the selected city and apply the month/day filters.
/// Any unreadable file, missing required column, or malformed
/// timestamp/duration fails the whole load; there is no partial table.
pub fn load_trips(cfg: &Config, selection: &FilterSelection) -> AppResult<TripTable> {
    let path = cfg.city_file(selection.city);
    if !path.exists() {
        return Err(AppError::DatasetNotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(&path)?;
    let schema = Schema::from_headers(reader.headers()?)?;

    let mut trips = Vec::new();
    for result in reader.records() {
        let record = result?;
        let trip = parse_trip(&record, &schema, &path)?;

        // Derived columns exist before filtering; both filters are plain
        // equalities and independent of each other.
        if selection.month.matches(trip.month) && selection.day.matches(trip.day_of_week) {
            trips.push(trip);
        }
    }

    Ok(TripTable::new(
        trips,
        schema.gender.is_some(),
        schema.birth_year.is_some(),
    ))
}

fn parse_trip(record: &StringRecord, schema: &Schema, path: &Path) -> AppResult<Trip> {
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();

    let raw_start = field(schema.start_time);
    let start_time = parse_timestamp(raw_start).ok_or_else(|| {
        AppError::InvalidTimestamp(format!("'{}' in {}", raw_start, path.display()))
    })?;

    let raw_duration = field(schema.duration);
    let duration_secs: f64 = raw_duration.parse().map_err(|_| {
        AppError::InvalidDuration(format!("'{}' in {}", raw_duration, path.display()))
    })?;

    let gender = schema
        .gender
        .map(|idx| field(idx))
        .filter(|g| !g.is_empty())
        .map(str::to_string);

    // Some exports render birth years as floats ("1992.0").
    let birth_year = schema
        .birth_year
        .map(|idx| field(idx))
        .filter(|y| !y.is_empty())
        .and_then(|y| y.parse::<f64>().ok())
        .map(|y| y as i32);

    Ok(Trip::new(
        start_time,
        field(schema.start_station).to_string(),
        field(schema.end_station).to_string(),
        duration_secs,
        field(schema.user_type).to_string(),
        gender,
        birth_year,
    ))
}
