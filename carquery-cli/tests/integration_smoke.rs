//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

// === Query Command Tests ===

#[test]
fn test_query_default_sql() {
    let mut cmd = Command::cargo_bin("carquery").unwrap();
    cmd.arg("query");

    cmd.assert().success().stdout(predicate::str::contains(
        "SELECT id, brand, model, year, state, color, fuel_type, body_type FROM cars ORDER BY id ASC LIMIT $1 OFFSET $2",
    ));
}

#[test]
fn test_query_filters_and_paging() {
    let mut cmd = Command::cargo_bin("carquery").unwrap();
    cmd.args(["query", "fields=id,brand", "brand=Honda", "limit=5", "page=3"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "SELECT id, brand FROM cars WHERE brand = $1 ORDER BY id ASC LIMIT $2 OFFSET $3",
        ))
        .stdout(predicate::str::contains("$1 = \"Honda\""))
        .stdout(predicate::str::contains("$3 = \"10\""));
}

#[test]
fn test_query_json_output() {
    let mut cmd = Command::cargo_bin("carquery").unwrap();
    cmd.args(["query", "--json", "--typed", "fields=id", "sort=-year"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"sql\""))
        .stdout(predicate::str::contains("ORDER BY year DESC"))
        .stdout(predicate::str::contains("body_type"));
}

#[test]
fn test_query_rejects_unknown_sort() {
    let mut cmd = Command::cargo_bin("carquery").unwrap();
    cmd.args(["query", "sort=price"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid sort value"));
}

// === Serve Command Tests ===

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("carquery").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}
