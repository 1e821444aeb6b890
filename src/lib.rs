//! bikestats library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use std::io::{self, BufRead, Write};

use clap::Parser;
use cli::Cli;
use config::Config;
use errors::AppResult;
use ui::messages::divider_line;
use utils::prompt::prompt_yes_no;

/// Entry point used by main.rs: parse the CLI, load the configuration
/// once, apply overrides, then hand the console over to the session loop.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    if cli.no_color {
        utils::formatting::set_color_enabled(false);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout.lock(), &cfg)
}

/// One outer loop iteration per analysis: collect filters, load the city
/// dataset, print the four report blocks in fixed order, browse raw rows,
/// then offer a restart. Invalid prompt answers never leave the prompts;
/// dataset failures propagate and end the run.
pub fn run_session<R, W>(input: &mut R, output: &mut W, cfg: &Config) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        let selection = core::filters::collect_filters(input, output)?;
        writeln!(output, "{}", divider_line())?;

        let table = core::loader::load_trips(cfg, &selection)?;

        for report in [
            core::stats::time::report(&table),
            core::stats::station::report(&table),
            core::stats::duration::report(&table),
            core::stats::user::report(&table),
        ] {
            write!(output, "{}", report)?;
            writeln!(output, "{}", divider_line())?;
        }

        core::browse::browse(input, output, &table)?;

        if !prompt_yes_no(input, output, "\nWould you like to restart? Enter yes or no:")? {
            return Ok(());
        }
    }
}
