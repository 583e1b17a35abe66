use crate::cli::support::{fixtures, routeplan, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_route_default_dijkstra_human() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    routeplan(&dir)
        .args(["route", "--from", "A", "--to", "E", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dijkstra path from A to E: A -> B -> C -> D -> E",
        ))
        .stdout(predicate::str::contains("Total distance: 42.00"));
}

#[test]
fn test_route_json() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    let output = routeplan(&dir)
        .args(["--format", "json", "route", "--from", "A", "--to", "E", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["strategy"], "dijkstra");
    assert_eq!(json["found"], true);
    assert_eq!(json["cost"], 42.0);
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C", "D", "E"]));
}

#[test]
fn test_route_greedy_takes_shortcut() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    routeplan(&dir)
        .args(["route", "--strategy", "greedy", "--from", "A", "--to", "E", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> C -> D -> E"))
        .stdout(predicate::str::contains("Total distance: 45.00"));
}

#[test]
fn test_route_traffic_slot_scales_cost() {
    let dir = tempdir().unwrap();
    let (graph, traffic) = fixtures(&dir);

    let output = routeplan(&dir)
        .args(["--format", "json", "route", "--from", "A", "--to", "E"])
        .args(["--hour", "8", "--day", "1", "--graph"])
        .arg(&graph)
        .arg("--traffic")
        .arg(&traffic)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["cost"], 84.0);

    // base distance ignores the multiplier
    let output = routeplan(&dir)
        .args(["--format", "json", "route", "--from", "A", "--to", "E", "--weight", "distance"])
        .args(["--hour", "8", "--day", "1", "--graph"])
        .arg(&graph)
        .arg("--traffic")
        .arg(&traffic)
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["cost"], 42.0);
}

#[test]
fn test_route_via_implies_waypoints() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    let output = routeplan(&dir)
        .args(["--format", "json", "route", "--from", "A", "--to", "E", "--via", "C,D"])
        .arg("--graph")
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["strategy"], "waypoints");
    assert_eq!(json["waypoints"], serde_json::json!(["C", "D"]));
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C", "D", "E"]));
}

#[test]
fn test_route_unreachable_is_success() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    routeplan(&dir)
        .args(["route", "--from", "A", "--to", "Z", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("No Dijkstra path from A to Z"));
}

#[test]
fn test_route_records() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    routeplan(&dir)
        .args(["--format", "records", "route", "--from", "C", "--to", "E", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "R strategy=dijkstra start=C end=E found=true cost=20.00\nN C\nN D\nN E",
        ));
}

#[test]
fn test_route_strategy_from_config() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);
    fs::write(dir.path().join("config.toml"), "strategy = \"greedy\"\n").unwrap();

    routeplan(&dir)
        .args(["route", "--from", "A", "--to", "E", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Greedy path from A to E"));
}

#[test]
fn test_route_explicit_config_path() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);
    let config = dir.path().join("alt.toml");
    fs::write(&config, "strategy = \"astar\"\n").unwrap();

    routeplan(&dir)
        .arg("--config")
        .arg(&config)
        .args(["route", "--from", "A", "--to", "E", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A* path from A to E"));
}

#[test]
fn test_route_slot_without_traffic_table_warns() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    let output = routeplan(&dir)
        .args(["--format", "json", "route", "--from", "A", "--to", "E"])
        .args(["--hour", "8", "--day", "1", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["cost"], 42.0);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("without --traffic"), "stderr: {stderr}");
}
