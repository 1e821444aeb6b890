#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikestats::config::Config;
use bikestats::core::loader::load_trips;
use bikestats::models::city::City;
use bikestats::models::filters::{DayFilter, FilterSelection, MonthFilter};
use bikestats::models::trip::TripTable;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bks() -> Command {
    cargo_bin_cmd!("bikestats")
}

/// 10 trips: 4 in May, 6 in June. Mondays dominate (4), hour 8 dominates
/// (5), "Clark St & Elm St" is the top start station (5) and
/// "Wabash Ave & Grand Ave" the top end station (5). Durations sum to
/// 5850. Birth year mode is 1990.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-05-01 08:00:00,2017-05-01 08:05:00,300,Clark St & Elm St,Wabash Ave & Grand Ave,Subscriber,Male,1989.0
2,2017-05-02 09:00:00,2017-05-02 09:10:00,600,Canal St & Adams St,Clark St & Elm St,Subscriber,Female,1990.0
3,2017-05-08 08:30:00,2017-05-08 08:37:30,450,Clark St & Elm St,Wabash Ave & Grand Ave,Customer,,
4,2017-05-05 17:00:00,2017-05-05 17:15:00,900,Michigan Ave & Oak St,Canal St & Adams St,Subscriber,Male,1975.0
5,2017-06-05 08:00:00,2017-06-05 08:05:00,300,Clark St & Elm St,Wabash Ave & Grand Ave,Subscriber,Female,1990.0
6,2017-06-06 09:15:00,2017-06-06 09:27:00,720,Canal St & Adams St,Michigan Ave & Oak St,Customer,Male,1992.0
7,2017-06-12 08:05:00,2017-06-12 08:13:00,480,Clark St & Elm St,Wabash Ave & Grand Ave,Subscriber,Male,1990.0
8,2017-06-02 18:00:00,2017-06-02 18:06:00,360,Michigan Ave & Oak St,Clark St & Elm St,Subscriber,Female,1964.0
9,2017-06-03 10:00:00,2017-06-03 10:20:00,1200,Canal St & Adams St,Wabash Ave & Grand Ave,Customer,,1990.0
10,2017-06-08 08:45:00,2017-06-08 08:54:00,540,Clark St & Elm St,Canal St & Adams St,Subscriber,Male,1989.0
";

/// Washington carries no Gender or Birth Year columns and uses fractional
/// durations, like the real export.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-04-03 07:30:00,2017-04-03 07:37:00,420.5,Massachusetts Ave & Dupont Circle,14th & V St NW,Registered
2,2017-04-04 08:00:00,2017-04-04 08:05:00,300.0,14th & V St NW,Massachusetts Ave & Dupont Circle,Registered
3,2017-03-06 07:45:00,2017-03-06 07:55:00,600.25,Massachusetts Ave & Dupont Circle,Lincoln Memorial,Casual
4,2017-03-07 18:30:00,2017-03-07 18:33:00,180.0,Lincoln Memorial,14th & V St NW,Registered
5,2017-04-10 07:30:00,2017-04-10 07:37:00,420.5,Massachusetts Ave & Dupont Circle,14th & V St NW,Registered
6,2017-04-12 09:00:00,2017-04-12 09:15:00,900.0,14th & V St NW,Lincoln Memorial,Casual
";

pub const NEW_YORK_CITY_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-01 00:05:00,2017-01-01 00:08:20,200,Broadway & W 49 St,Central Park S,Subscriber,Male,1985.0
2,2017-02-14 09:00:00,2017-02-14 09:06:40,400,Central Park S,Broadway & W 49 St,Customer,Female,1992.0
3,2017-01-16 12:00:00,2017-01-16 12:05:00,300,Broadway & W 49 St,Central Park S,Subscriber,Male,1985.0
";

/// Create a unique data directory inside the system temp dir, populated
/// with the three city fixtures, removing any leftover from earlier runs.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikestats_data", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");

    fs::write(path.join("chicago.csv"), CHICAGO_CSV).expect("write chicago fixture");
    fs::write(path.join("new_york_city.csv"), NEW_YORK_CITY_CSV).expect("write nyc fixture");
    fs::write(path.join("washington.csv"), WASHINGTON_CSV).expect("write washington fixture");

    path.to_string_lossy().to_string()
}

pub fn config_for(data_dir: &str) -> Config {
    Config {
        data_dir: data_dir.to_string(),
        ..Config::default()
    }
}

/// Load a filtered table through the library API.
pub fn load_table(data_dir: &str, city: City, month: MonthFilter, day: DayFilter) -> TripTable {
    let cfg = config_for(data_dir);
    let selection = FilterSelection { city, month, day };
    load_trips(&cfg, &selection).expect("load fixture dataset")
}
