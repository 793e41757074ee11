//! `tablekit` command line front end.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate a table view over a JSON array of rows
//! tablekit query --view view.json --rows rows.json --page 2 --search acme
//!
//! # Check a table view definition
//! tablekit validate --view view.json
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: The view or query is invalid
//! - 2: Input could not be read or parsed

mod commands;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::TermLogger;
use simplelog::TerminalMode;

use commands::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match commands::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
