//! Paginated display of raw trip rows, 5 at a time.

use std::io::{self, BufRead, Write};

use crate::models::trip::{Trip, TripTable};
use crate::utils::formatting::secs2readable;
use crate::utils::prompt::prompt_yes_no;
use crate::utils::table::Table;

pub const PAGE_SIZE: usize = 5;

/// Rows [offset, offset + PAGE_SIZE) of the table. Fewer than PAGE_SIZE
/// near the end; empty past the end, never an error.
pub fn page(table: &TripTable, offset: usize) -> &[Trip] {
    let start = offset.min(table.trips.len());
    let end = (offset + PAGE_SIZE).min(table.trips.len());
    &table.trips[start..end]
}

/// Render one page as an aligned table. Gender and birth year columns only
/// appear when the dataset carries them.
pub fn render_page(table: &TripTable, rows: &[Trip]) -> String {
    let mut headers = vec![
        "Start Time",
        "Start Station",
        "End Station",
        "Duration",
        "User Type",
    ];
    if table.has_gender {
        headers.push("Gender");
    }
    if table.has_birth_year {
        headers.push("Birth Year");
    }

    let mut out = Table::new(headers);
    for trip in rows {
        let mut row = vec![
            trip.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            secs2readable(trip.duration_secs),
            trip.user_type.clone(),
        ];
        if table.has_gender {
            row.push(trip.gender.clone().unwrap_or_else(|| "-".to_string()));
        }
        if table.has_birth_year {
            row.push(
                trip.birth_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            );
        }
        out.add_row(row);
    }

    out.render()
}

/// Interactive browsing loop. Keeps advancing by PAGE_SIZE while the user
/// answers yes; never wraps around or re-displays earlier pages.
pub fn browse<R, W>(input: &mut R, output: &mut W, table: &TripTable) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut offset = 0;
    let mut question = "\nWould you like to view 5 rows of individual trip data? Enter yes or no:";

    loop {
        if !prompt_yes_no(input, output, question)? {
            return Ok(());
        }

        let rows = page(table, offset);
        if rows.is_empty() {
            writeln!(output, "No more trip data to show.")?;
        } else {
            write!(output, "{}", render_page(table, rows))?;
        }

        offset += PAGE_SIZE;
        question = "Do you wish to continue? Enter yes or no:";
    }
}
