//! Error types and exit codes for routeplan
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, parse errors)
//! - 2: Usage error (bad weight kind, strategy, format or value)
//! - 3: Data error (unknown node, missing edge)
//!
//! An unreachable destination is never an error. Engines report it as a
//! [`PathResult::none`](crate::graph::PathResult::none) value.

use thiserror::Error;

/// Exit codes for the routeplan binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, missing edge (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or planning routes
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown weight kind: {0} (expected: distance, adjusted_distance)")]
    InvalidWeight(String),

    #[error("unknown strategy: {0} (expected: dijkstra, astar, greedy, waypoints)")]
    UnknownStrategy(String),

    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("invalid traffic context: hour {hour} (0-23), day {day} (1-5)")]
    InvalidTrafficContext { hour: u8, day: u8 },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("no edge from {from} to {to}")]
    NoSuchEdge { from: String, to: String },

    #[error("edge from {from} to {to} already exists")]
    DuplicateEdge { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for a node missing from the graph
    pub fn unknown_node(id: impl std::fmt::Display) -> Self {
        RouteError::UnknownNode { id: id.to_string() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::InvalidWeight(_)
            | RouteError::UnknownStrategy(_)
            | RouteError::UnknownFormat(_)
            | RouteError::InvalidValue { .. }
            | RouteError::InvalidTrafficContext { .. }
            | RouteError::UsageError(_) => ExitCode::Usage,

            RouteError::UnknownNode { .. }
            | RouteError::NoSuchEdge { .. }
            | RouteError::DuplicateEdge { .. } => ExitCode::Data,

            RouteError::Io(_)
            | RouteError::Json(_)
            | RouteError::Toml(_)
            | RouteError::Csv(_)
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::InvalidWeight(_) => "invalid_weight",
            RouteError::UnknownStrategy(_) => "unknown_strategy",
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::InvalidTrafficContext { .. } => "invalid_traffic_context",
            RouteError::UsageError(_) => "usage_error",
            RouteError::UnknownNode { .. } => "unknown_node",
            RouteError::NoSuchEdge { .. } => "no_such_edge",
            RouteError::DuplicateEdge { .. } => "duplicate_edge",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::Csv(_) => "csv_error",
            RouteError::Other(_) => "other",
        }
    }

    /// Structured error envelope for `--format json`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for routeplan operations
pub type Result<T> = std::result::Result<T, RouteError>;
