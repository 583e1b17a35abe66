//! Output format handling for routeplan
//!
//! - human: readable summary for terminal use
//! - json: stable, machine-readable JSON
//! - records: line-oriented `R`/`N` records for scripting

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::planner::RouteReport;

/// Output format for routeplan commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

impl FromStr for OutputFormat {
    type Err = RouteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(RouteError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Render one route report
pub fn render_route(report: &RouteReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Records => Ok(records(report)),
    }
}

/// Render several reports: blank-line separated, a JSON array, or
/// concatenated records
pub fn render_routes(reports: &[RouteReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(reports.iter().map(human).collect::<Vec<_>>().join("\n\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Records => Ok(reports.iter().map(records).collect::<Vec<_>>().join("\n")),
    }
}

fn human(report: &RouteReport) -> String {
    let via = if report.waypoints.is_empty() {
        String::new()
    } else {
        format!(" via {}", report.waypoints.join(", "))
    };

    if !report.found {
        return format!(
            "No {} path from {} to {}{}",
            report.strategy.label(),
            report.start,
            report.end,
            via
        );
    }

    format!(
        "{} path from {} to {}{}: {}\nTotal distance: {:.2}",
        report.strategy.label(),
        report.start,
        report.end,
        via,
        report.result.path.join(" -> "),
        report.result.cost
    )
}

fn records(report: &RouteReport) -> String {
    let cost = if report.result.cost.is_finite() {
        format!("{:.2}", report.result.cost)
    } else {
        "inf".to_string()
    };
    let mut out = format!(
        "R strategy={} start={} end={} found={} cost={}",
        report.strategy, report.start, report.end, report.found, cost
    );
    if !report.waypoints.is_empty() {
        out.push_str(&format!(" via={}", report.waypoints.join(",")));
    }
    for node in &report.result.path {
        out.push_str(&format!("\nN {}", node));
    }
    out
}
