//! Local front end: prints generated test data the way the chat bot replies.
//!
//! Parsing and generation live in `test_data_factory::factory_cli`; this
//! binary wires logging, settings and stdout.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use test_data_factory::factory_cli::{Cli, CliError, run};
use test_data_factory::presentation::fallback_text;
use test_data_factory::settings::FactorySettings;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    match execute(&cli) {
        Ok(output) => {
            if let Err(err) = writeln!(io::stdout().lock(), "{output}") {
                drop(err);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err.to_string());
            if matches!(err, CliError::UnknownButton { .. }) {
                report(fallback_text());
            }
            ExitCode::FAILURE
        }
    }
}

fn report(message: &str) {
    if let Err(write_err) = writeln!(io::stderr().lock(), "{message}") {
        drop(write_err);
    }
}

fn execute(cli: &Cli) -> Result<String, CliError> {
    let settings = FactorySettings::from_environment()?;
    run(cli, &settings)
}
