use crate::cli::support::{fixtures, routeplan};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_unknown_node_exits_with_data_error() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    routeplan(&dir)
        .args(["route", "--from", "A", "--to", "Q", "--graph"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown node: Q"));
}

#[test]
fn test_unknown_waypoint_exits_with_data_error() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    routeplan(&dir)
        .args(["route", "--from", "A", "--to", "E", "--via", "B,Q", "--graph"])
        .arg(&graph)
        .assert()
        .code(3);
}

#[test]
fn test_unknown_node_json_envelope() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    let output = routeplan(&dir)
        .args(["--format", "json", "route", "--from", "Q", "--to", "E", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "unknown_node");
}

#[test]
fn test_bad_weight_is_usage_error() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    routeplan(&dir)
        .args(["route", "--from", "A", "--to", "E", "--weight", "speed", "--graph"])
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown weight kind"));
}

#[test]
fn test_bad_strategy_json_envelope() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    let output = routeplan(&dir)
        .args(["--format", "json", "route", "--from", "A", "--to", "E", "--strategy", "bfs"])
        .arg("--graph")
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_out_of_range_hour_is_usage_error() {
    let dir = tempdir().unwrap();
    let (graph, traffic) = fixtures(&dir);

    routeplan(&dir)
        .args(["route", "--from", "A", "--to", "E", "--hour", "25", "--day", "1", "--graph"])
        .arg(&graph)
        .arg("--traffic")
        .arg(&traffic)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid traffic context"));
}

#[test]
fn test_too_many_waypoints_is_usage_error() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    routeplan(&dir)
        .args(["route", "--from", "A", "--to", "E", "--via", "B,C,D", "--max-waypoints", "2"])
        .arg("--graph")
        .arg(&graph)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("waypoint count"));
}

#[test]
fn test_missing_graph_file_is_failure() {
    let dir = tempdir().unwrap();

    routeplan(&dir)
        .args(["route", "--from", "A", "--to", "E", "--graph"])
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(1);
}

#[test]
fn test_malformed_graph_is_failure() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("bad.json");
    fs::write(&graph, "{ not json").unwrap();

    routeplan(&dir)
        .args(["--format", "json", "nodes", "--graph"])
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("json_error"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    routeplan(&dir)
        .args(["--quiet", "route", "--from", "A", "--to", "Q", "--graph"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_parse_error_envelope_honours_uppercase_format() {
    let dir = tempdir().unwrap();

    let output = routeplan(&dir)
        .args(["--format", "JSON", "route", "--bogus"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_parse_error_without_json_is_plain_text() {
    let dir = tempdir().unwrap();

    routeplan(&dir)
        .args(["route", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}
