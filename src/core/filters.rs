//! Interactive collection of the (city, month, day) filter triple.

use std::io::{self, BufRead, Write};

use crate::models::city::City;
use crate::models::filters::{DayFilter, FilterSelection, MonthFilter};
use crate::utils::prompt::prompt_choice;

/// Ask for city, month and day in sequence. Each question re-asks until
/// the answer is one of the allowed values, so the returned triple only
/// ever holds enumerated members.
pub fn collect_filters<R, W>(input: &mut R, output: &mut W) -> io::Result<FilterSelection>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Hello! Let's explore some US bikeshare data!")?;

    let city = prompt_choice(
        input,
        output,
        "Would you like to see data for Chicago, New York City, or Washington?",
        "Sorry, please enter a valid city name from the list: Chicago, New York City, Washington.",
        City::from_input,
    )?;

    let month = prompt_choice(
        input,
        output,
        "Which month? January, February, March, April, May, June, or 'all' to apply no month filter:",
        "Sorry, please enter a valid month or 'all'.",
        MonthFilter::from_input,
    )?;

    let day = prompt_choice(
        input,
        output,
        "Which day? Please type a day (Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday) or 'all' to apply no day filter:",
        "Sorry, please enter a valid day of the week or 'all'.",
        DayFilter::from_input,
    )?;

    Ok(FilterSelection { city, month, day })
}
