//! # datacheck CLI entry point
//!
//! Parses arguments, installs the log subscriber, and maps the run
//! outcome to the process exit status.

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use datacheck_cli::logging;
use datacheck_cli::normalize_args;
use datacheck_cli::run::{execute, RunArgs};

/// Validate a data root: check `data.json` against `data.schema.json`.
#[derive(Parser, Debug)]
#[command(name = "datacheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    run: RunArgs,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    let ansi = std::io::stderr().is_terminal();
    let subscriber = logging::subscriber(logging::default_filter(cli.verbose), std::io::stderr, ansi);
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    Ok(ExitCode::from(execute(&cli.run)))
}
