use chrono::{Datelike, NaiveDateTime, Weekday};

/// Lowercase month name of a timestamp.
pub fn month_name(dt: &NaiveDateTime) -> &'static str {
    match dt.month() {
        1 => "january",
        2 => "february",
        3 => "march",
        4 => "april",
        5 => "may",
        6 => "june",
        7 => "july",
        8 => "august",
        9 => "september",
        10 => "october",
        11 => "november",
        _ => "december",
    }
}

/// Lowercase day-of-week name of a timestamp.
pub fn day_name(dt: &NaiveDateTime) -> &'static str {
    match dt.weekday() {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Parse a dataset start-time value ("YYYY-MM-DD HH:MM:SS").
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S").ok()
}
