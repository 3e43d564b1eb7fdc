//! rovibe diagram CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use rovibe_diagram_cli::{Args, error_adapter::render_report};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting rovibe-diagram");
    debug!(args:?; "Parsed arguments");

    match rovibe_diagram_cli::run(&args) {
        Ok(report) => println!("{report}"),
        Err(err) => {
            let report = render_report(&err);
            error!("{report}");
            // Logging may be filtered out; the failure must still be visible.
            if !log::log_enabled!(log::Level::Error) {
                eprintln!("{report}");
            }
            process::exit(1);
        }
    }
}
