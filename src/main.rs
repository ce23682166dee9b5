//! pm-request - Release version specifier and request slug parser CLI
//!
//! Parses version specifiers (`7.x-1.2`, `8.0-beta1`) and request slugs
//! (`devel-7.x-1.2`) and prints the structured result.

use clap::Parser;
use pm_request::cli::CliArgs;
use pm_request::error::IoError;
use pm_request::orchestrator::Orchestrator;
use pm_request::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_logging(args.verbose);

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr subscriber; parser decisions are logged at debug level
fn init_logging(verbose: bool) {
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);

    let orchestrator = Orchestrator::new(args)?;
    tracing::debug!(
        "pm-request v{}, default branch {}",
        env!("CARGO_PKG_VERSION"),
        orchestrator.context().default_branch()
    );

    let result = orchestrator.run()?;

    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();
    result
        .write(&*formatter, &mut stdout)
        .and_then(|()| stdout.flush())
        .map_err(IoError::write_error)?;

    Ok(ExitCode::SUCCESS)
}
