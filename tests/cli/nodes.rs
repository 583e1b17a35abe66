use crate::cli::support::{fixtures, routeplan, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_nodes_human() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    routeplan(&dir)
        .args(["nodes", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("A\nB\nC\nD\nE\nZ\n6 nodes, 5 edges\n");
}

#[test]
fn test_nodes_json() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    let output = routeplan(&dir)
        .args(["--format", "json", "nodes", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["node_count"], 6);
    assert_eq!(json["edge_count"], 5);
    assert_eq!(json["nodes"][0], "A");
}

#[test]
fn test_nodes_quiet_omits_summary() {
    let dir = tempdir().unwrap();
    let (graph, _) = fixtures(&dir);

    routeplan(&dir)
        .args(["--quiet", "nodes", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes,").not());
}
