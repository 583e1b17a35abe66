use crate::cli::support::{fixtures, routeplan, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_compare_runs_three_strategies_without_via() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    let output = routeplan(&dir)
        .args(["--format", "json", "compare", "--from", "A", "--to", "E", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let strategies: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["strategy"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(strategies, ["dijkstra", "astar", "greedy"]);
    assert_eq!(json[0]["cost"], 42.0);
    assert_eq!(json[1]["cost"], 42.0);
    assert_eq!(json[2]["cost"], 45.0);
}

#[test]
fn test_compare_with_via_adds_waypoints() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    routeplan(&dir)
        .args(["compare", "--from", "A", "--to", "E", "--via", "C", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dijkstra path from A to E:"))
        .stdout(predicate::str::contains("A* path from A to E:"))
        .stdout(predicate::str::contains("Greedy path from A to E:"))
        .stdout(predicate::str::contains("Waypoints path from A to E via C:"));
}
