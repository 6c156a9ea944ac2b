// Pixel font toolkit command line.

use std::process::ExitCode;

use clap::Parser;
use log::error;

use pftk::core::{run, CliArgs};
use pftk::utils::logger::init_custom_logger;

fn main() -> ExitCode {
    let cli_args = CliArgs::parse();
    init_custom_logger(cli_args.verbose);

    match run(cli_args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
