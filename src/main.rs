//! Routeplan - traffic-aware route planning CLI
//!
//! Loads a directed road graph, applies a predicted traffic multiplier and
//! answers shortest-path, heuristic, greedy and multi-stop queries.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use routeplan_core::error::{ExitCode as RouteExitCode, RouteError};
use routeplan_core::format::OutputFormat;
use routeplan_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failed(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit(RouteExitCode::Success),
        Err(e) => {
            report(&e, cli.format, cli.quiet);
            exit(e.exit_code())
        }
    }
}

/// No `Cli` exists yet, so a JSON request is recovered from raw argv
fn parse_failed(err: clap::Error) -> ExitCode {
    let format = cli::requested_format(std::env::args_os().skip(1));
    match cli::parse_failure(&err) {
        Some(route_error) if format == Some(OutputFormat::Json) => {
            report(&route_error, OutputFormat::Json, false);
            exit(route_error.exit_code())
        }
        _ => err.exit(),
    }
}

fn report(err: &RouteError, format: OutputFormat, quiet: bool) {
    if format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
    } else if !quiet {
        eprintln!("error: {}", err);
    }
}

fn exit(code: RouteExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}
