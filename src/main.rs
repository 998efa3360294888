use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{error, warn};

use ppm_filter::cli::{self, Cli, USAGE};
use ppm_filter::errors::PpmFilterError;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                }
                _ => println!("{USAGE}"),
            }
            return ExitCode::SUCCESS;
        }
    };

    init_tracing(cli.log_level());

    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(PpmFilterError::UsageError(msg)) => {
            warn!("{msg}");
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
