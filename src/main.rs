//! crules CLI - deploy Cursor rule templates into a project
//!
//! Usage: crules [OPTIONS] <COMMAND>
//!
//! Commands:
//!   init       Deploy the rules of a template set
//!   deploy     Deploy rules and notes of the configured template
//!   add        Deploy a single rule
//!   list       List deployed rules
//!   templates  List available template sets
//!   validate   Check the assets of a template set

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crules::presentation::{create_context, create_registry, use_color, Cli, Commands, Printer};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not failures
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_tracing(cli.verbose);

    let Some(command) = cli.command.as_ref() else {
        eprintln!("{}", Cli::command().render_usage());
        eprintln!();
        eprintln!("Run 'crules --help' for the list of commands.");
        return ExitCode::FAILURE;
    };

    let printer = Printer::new(cli.json, use_color(cli.color));
    match run(&cli, command, &printer) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when the command failed and its error was reported,
/// or its output was a failed check.
fn run(cli: &Cli, command: &Commands, printer: &Printer) -> Result<bool> {
    let start_dir = match &cli.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("cannot determine the current directory")?,
    };
    let ctx = create_context(start_dir);
    let registry = create_registry();
    let name = command.name();

    match registry.run(name, &ctx, &command.to_args()) {
        Ok(output) => {
            printer
                .print(name, &output)
                .context("failed to write output")?;
            Ok(output.is_success())
        }
        Err(err) => {
            tracing::info!(command = name, kind = %err.kind(), "command failed");
            printer
                .print_error(Some(name), &err)
                .context("failed to write error")?;
            Ok(false)
        }
    }
}

/// Log to stderr so stdout stays clean for command output and NDJSON.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("CRULES_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
