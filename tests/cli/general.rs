use crate::cli::support::routeplan;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    routeplan(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: routeplan"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("nodes"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    routeplan(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("routeplan "));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    routeplan(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("routeplan --help"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = tempdir().unwrap();
    let (graph, _) = crate::cli::support::fixtures(&dir);
    routeplan(&dir)
        .args(["--verbose", "--format", "json", "route", "--from", "A", "--to", "E", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("dijkstra_complete"));
}
