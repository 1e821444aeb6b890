mod common;
use common::{bks, setup_data_dir};

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_full_session_prints_all_four_reports() {
    let dir = setup_data_dir("session_full");

    bks()
        .args(["--data-dir", &dir, "--no-color"])
        .write_stdin("chicago\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(contains("Most Common Month: June"))
        .stdout(contains("Most Common Day of Week: Monday"))
        .stdout(contains("Most Common Start Hour: 8"))
        .stdout(contains("Most Common Start Station: Clark St & Elm St"))
        .stdout(contains(
            "Most Common Trip: Clark St & Elm St to Wabash Ave & Grand Ave",
        ))
        .stdout(contains("Total Travel Time: 5850 seconds, or 1.62 hours"))
        .stdout(contains("Mean Travel Time: 585.00 seconds, or 9.75 minutes"))
        .stdout(contains("Subscriber: 7"))
        .stdout(contains("Most Common Year of Birth: 1990"));
}

#[test]
fn test_invalid_city_reprompts_instead_of_failing() {
    let dir = setup_data_dir("session_invalid_city");

    bks()
        .args(["--data-dir", &dir, "--no-color"])
        .write_stdin("springfield\nCHICAGO\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains(
            "Sorry, please enter a valid city name from the list: Chicago, New York City, Washington.",
        ))
        .stdout(contains("Most Common Month: June"));
}

#[test]
fn test_washington_reports_unavailable_demographics() {
    let dir = setup_data_dir("session_washington");

    bks()
        .args(["--data-dir", &dir, "--no-color"])
        .write_stdin("washington\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Gender data not available."))
        .stdout(contains("Birth Year data not available."))
        .stdout(contains("Total Travel Time: 2821.25 seconds"));
}

#[test]
fn test_month_filter_changes_the_report() {
    let dir = setup_data_dir("session_month_filter");

    // Only the 4 May rows survive: 300 + 600 + 450 + 900 = 2250.
    bks()
        .args(["--data-dir", &dir, "--no-color"])
        .write_stdin("chicago\nmay\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Most Common Month: May"))
        .stdout(contains("Total Travel Time: 2250 seconds"));
}

#[test]
fn test_empty_filter_result_does_not_crash() {
    let dir = setup_data_dir("session_empty");

    // June has no Sunday rows in the fixture; browsing past the empty
    // table is also fine.
    bks()
        .args(["--data-dir", &dir, "--no-color"])
        .write_stdin("chicago\njune\nsunday\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("No trips match the selected filters."))
        .stdout(contains("No more trip data to show."));
}

#[test]
fn test_restart_runs_a_second_session() {
    let dir = setup_data_dir("session_restart");

    bks()
        .args(["--data-dir", &dir, "--no-color"])
        .write_stdin("chicago\nall\nall\nno\nyes\nwashington\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!").count(2))
        .stdout(contains("Most Common Year of Birth: 1990"))
        .stdout(contains("Gender data not available."));
}

#[test]
fn test_missing_dataset_file_exits_with_error() {
    let mut empty: PathBuf = env::temp_dir();
    empty.push("session_missing_bikestats_data");
    fs::remove_dir_all(&empty).ok();
    fs::create_dir_all(&empty).unwrap();

    bks()
        .args(["--data-dir", &empty.to_string_lossy(), "--no-color"])
        .write_stdin("chicago\nall\nall\n")
        .assert()
        .failure()
        .stderr(contains("Dataset file not found"));
}

#[test]
fn test_junk_restart_answer_reprompts() {
    let dir = setup_data_dir("session_restart_junk");

    bks()
        .args(["--data-dir", &dir, "--no-color"])
        .write_stdin("chicago\nall\nall\nno\nperhaps\nno\n")
        .assert()
        .success()
        .stdout(contains("Sorry, please answer 'yes' or 'no'."))
        .stdout(contains("Hello! Let's explore some US bikeshare data!").count(1));
}

#[test]
fn test_no_color_strips_ansi() {
    let dir = setup_data_dir("session_no_color");

    bks()
        .args(["--data-dir", &dir, "--no-color"])
        .write_stdin("chicago\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("\x1b[1m").not());
}
