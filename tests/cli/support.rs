use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for routeplan with an isolated config directory
pub fn routeplan(config_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("routeplan");
    cmd.env("ROUTEPLAN_CONFIG_DIR", config_dir.path())
        .env_remove("ROUTEPLAN_CONFIG")
        .env_remove("ROUTEPLAN_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// A→B (12), B→C, C→D, D→E (10 each), A→C (25), plus isolated Z.
/// With hour 8 on day 1 the traffic table doubles every edge.
pub const CITY: &str = r#"{
    "nodes": ["A", "B", "C", "D", "E", "Z"],
    "edges": [
        {"from": "A", "to": "B", "distance": 12, "traffic": "high"},
        {"from": "B", "to": "C", "distance": 10},
        {"from": "C", "to": "D", "distance": 10},
        {"from": "D", "to": "E", "distance": 10},
        {"from": "A", "to": "C", "distance": 25}
    ],
    "heuristics": {"A": 40, "B": 30, "C": 20, "D": 10, "E": 0, "Z": 0}
}"#;

pub const TRAFFIC: &str = "hour,day_of_week,traffic_multiplier\n8,1,2.0\n17,5,1.5\n";

/// Write the graph and traffic fixtures into `dir`
pub fn fixtures(dir: &TempDir) -> (PathBuf, PathBuf) {
    let graph = dir.path().join("city.json");
    let traffic = dir.path().join("traffic.csv");
    fs::write(&graph, CITY).unwrap();
    fs::write(&traffic, TRAFFIC).unwrap();
    (graph, traffic)
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
