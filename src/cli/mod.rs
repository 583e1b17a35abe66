//! CLI argument parsing for routeplan
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use routeplan_core::error::RouteError;
use routeplan_core::format::OutputFormat;
pub use args::{CompareArgs, NodesArgs, RouteArgs};
use parse::parse_output_format;

/// Routeplan - traffic-aware route planning over a directed road graph
#[derive(Parser, Debug)]
#[command(name = "routeplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Planner config file (default: $ROUTEPLAN_CONFIG_DIR/config.toml)
    #[arg(long, global = true, env = "ROUTEPLAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan one route
    Route(RouteArgs),

    /// Run every strategy on the same query and show each result
    Compare(CompareArgs),

    /// List the graph's nodes and edge count
    Nodes(NodesArgs),
}

/// The `--format` named on the command line, read without full validation.
///
/// Used when clap rejects argv before a `Cli` exists. The last occurrence
/// wins; anything after `--` is ignored.
pub fn requested_format<I>(args: I) -> Option<OutputFormat>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut format = None;
    while let Some(arg) = args.next() {
        let Some(arg) = arg.to_str() else { continue };
        let value = match arg {
            "--" => break,
            "--format" => args.next().and_then(|v| v.into_string().ok()),
            _ => arg.strip_prefix("--format=").map(str::to_string),
        };
        if let Some(parsed) = value.and_then(|v| parse_output_format(&v).ok()) {
            format = Some(parsed);
        }
    }
    format
}

/// Classify a clap failure; `None` for help and version output
pub fn parse_failure(err: &clap::Error) -> Option<RouteError> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues => Some(RouteError::UsageError(err.to_string())),
        _ => Some(RouteError::Other(err.to_string())),
    }
}
