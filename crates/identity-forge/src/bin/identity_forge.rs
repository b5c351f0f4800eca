//! Batch generator CLI for reproducible fake identity records.
//!
//! This binary delegates to `identity_forge::cli` for argument handling and
//! generation, and only owns logging setup and stdout/stderr plumbing.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use identity_forge::cli::{CliArgs, CliError, render_json_lines, run};
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

    match execute(&CliArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &CliArgs) -> Result<(), CliError> {
    let generated = run(args)?;
    let rendered = render_json_lines(generated.batch.records())?;
    if rendered.is_empty() {
        return Ok(());
    }
    writeln!(io::stdout().lock(), "{rendered}").map_err(|err| CliError::Output {
        message: err.to_string(),
    })
}
