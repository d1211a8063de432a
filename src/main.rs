#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use clap::error::ErrorKind;
use std::process::ExitCode;
use template_copy::{FAILURE_EXIT_CODE, cli, config::Config, error::CopierError, setup_logging};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Failures are reported on stdout
            println!("{:#}", err);
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

fn run() -> Result<()> {
    setup_logging()?;

    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => return Err(CopierError::invocation(e.to_string().trim_end()).into()),
    };

    // Exactly one payload argument
    let config = Config::from_args(&args)?;

    cli::execute(&config)
}
