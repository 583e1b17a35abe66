use routeplan_core::format::OutputFormat;
use routeplan_core::graph::{Strategy, WeightKind};

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

/// Parse weight kind from string
pub fn parse_weight(s: &str) -> std::result::Result<WeightKind, String> {
    s.parse::<WeightKind>().map_err(|e| e.to_string())
}
