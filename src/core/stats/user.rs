//! User demographics: user types, gender, birth years.

use std::time::Instant;

use crate::core::stats::{NO_DATA_MSG, elapsed_note, most_common, value_counts};
use crate::models::trip::TripTable;
use crate::utils::formatting::bold;

#[derive(Debug, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    /// Ties resolve to the smallest year.
    pub most_common: i32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UserStats {
    /// (value, count), descending by count, ties by name.
    pub user_types: Vec<(String, u64)>,
    pub genders: Vec<(String, u64)>,
    pub birth_years: Option<BirthYearStats>,
}

/// Sort counts the way value listings are displayed: most frequent first,
/// ties in ascending name order (the BTreeMap already yields names sorted).
fn sorted_counts<'a, I>(values: I) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(String, u64)> = value_counts(values)
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn compute(table: &TripTable) -> UserStats {
    let user_types = sorted_counts(table.trips.iter().map(|t| t.user_type.as_str()));

    let genders = sorted_counts(
        table
            .trips
            .iter()
            .filter_map(|t| t.gender.as_deref()),
    );

    let years: Vec<i32> = table.trips.iter().filter_map(|t| t.birth_year).collect();
    let birth_years = match (years.iter().min(), years.iter().max()) {
        (Some(&earliest), Some(&most_recent)) => Some(BirthYearStats {
            earliest,
            most_recent,
            // Non-empty here, so the mode exists.
            most_common: most_common(years.iter().copied()).unwrap_or(earliest),
        }),
        _ => None,
    };

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

pub fn report(table: &TripTable) -> String {
    let started = Instant::now();
    let mut out = String::new();

    out.push_str(&format!("\n{}\n\n", bold("Calculating User Stats...")));

    if table.is_empty() {
        out.push_str(&format!("{}\n", NO_DATA_MSG));
        out.push_str(&elapsed_note(started));
        return out;
    }

    let stats = compute(table);

    out.push_str("Counts of user types:\n");
    for (value, count) in &stats.user_types {
        out.push_str(&format!("  {}: {}\n", value, count));
    }

    // Availability is a property of the dataset's schema, not of the rows
    // that survived the filter.
    if table.has_gender {
        out.push_str("\nCounts of gender:\n");
        for (value, count) in &stats.genders {
            out.push_str(&format!("  {}: {}\n", value, count));
        }
    } else {
        out.push_str("\nGender data not available.\n");
    }

    if table.has_birth_year {
        match &stats.birth_years {
            Some(by) => {
                out.push_str(&format!("\nEarliest Year of Birth: {}\n", by.earliest));
                out.push_str(&format!("Most Recent Year of Birth: {}\n", by.most_recent));
                out.push_str(&format!("Most Common Year of Birth: {}\n", by.most_common));
            }
            None => out.push_str("\nNo birth year values in the filtered trips.\n"),
        }
    } else {
        out.push_str("\nBirth Year data not available.\n");
    }

    out.push_str(&elapsed_note(started));
    out
}
