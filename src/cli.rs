use clap::Parser;

/// Command-line interface definition for bikestats
/// Interactive CLI to explore US bikeshare trip data from CSV files
#[derive(Parser)]
#[command(
    name = "bikestats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare trip data: travel times, stations, durations, and user stats",
    long_about = None
)]
pub struct Cli {
    /// Override the directory containing the city CSV files
    #[arg(long = "data-dir")]
    pub data_dir: Option<String>,

    /// Disable ANSI colors in the output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
