#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory holding a three-object world file.
fn test_world() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("world.json"),
        r#"{
  "objects": [
    { "key": "P", "shape": "cube", "size": "large", "position": [0, 0] },
    { "key": "Q", "shape": "tetrahedron", "size": "small", "position": [2, 2] },
    { "key": "R", "shape": "dodec", "size": "medium", "position": [4, 4] }
  ]
}
"#,
    )
    .unwrap();
    dir
}

fn tarski() -> Command {
    let mut cmd = Command::cargo_bin("tarski").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// eval
// ---------------------------------------------------------------------------

#[test]
fn eval_against_demo_world() {
    tarski()
        .args(["eval", "isCube(A)", "isTet(A)", "isBetweenOf(B, C, A) && !isCube(B)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("isCube(A) - true"))
        .stdout(predicate::str::contains("isTet(A) - false"))
        .stdout(predicate::str::contains(
            "isBetweenOf(B, C, A) && !isCube(B) - true",
        ));
}

#[test]
fn eval_against_world_file() {
    let dir = test_world();
    let world = dir.path().join("world.json");
    tarski()
        .args(["eval", "isBetweenOf(Q, P, R) && isTet(Q)", "isSmaller(P, Q)"])
        .arg("--world")
        .arg(&world)
        .assert()
        .success()
        .stdout(predicate::str::contains("isBetweenOf(Q, P, R) && isTet(Q) - true"))
        .stdout(predicate::str::contains("isSmaller(P, Q) - false"));
}

#[test]
fn eval_unknown_identifier_fails() {
    tarski()
        .args(["eval", "isCube(A)", "isCube(G)"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("isCube(A) - true"))
        .stderr(predicate::str::contains("unknown identifier `G`"))
        .stderr(predicate::str::contains("1 of 2 queries failed"));
}

#[test]
fn eval_syntax_error_fails() {
    tarski()
        .args(["eval", "isCube(A) & isTet(B)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean '&&'?"));
}

#[test]
fn eval_arity_error_fails() {
    tarski()
        .args(["eval", "isBetweenOf(A, B)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expects 3 argument(s), got 2"));
}

#[test]
fn eval_deeply_nested_query_fails_cleanly() {
    let query = format!("{}isCube(A){}", "(".repeat(200), ")".repeat(200));
    tarski()
        .args(["eval", &query])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("nested too deeply"));
}

#[test]
fn eval_requires_an_expression() {
    tarski().arg("eval").assert().failure();
}

#[test]
fn eval_missing_world_file_fails() {
    tarski()
        .args(["eval", "isCube(A)", "--world", "/nonexistent/world.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn eval_malformed_world_file_fails() {
    let dir = TempDir::new().unwrap();
    let world = dir.path().join("bad.json");
    fs::write(
        &world,
        r#"{ "objects": [{ "key": "A", "shape": "sphere", "size": "small", "position": [0, 0] }] }"#,
    )
    .unwrap();
    tarski()
        .args(["eval", "isCube(A)", "--world"])
        .arg(&world)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.json"));
}

// ---------------------------------------------------------------------------
// show / list / predicates
// ---------------------------------------------------------------------------

#[test]
fn show_demo_world() {
    tarski()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Shapes: 6\n"))
        .stdout(predicate::str::contains("A -> Shape:cube, X:0, Y:0"))
        .stdout(predicate::str::contains("F -> Shape:dodec, X:4, Y:2"))
        .stderr(predicate::str::contains("C, D share position (2, 0)"));
}

#[test]
fn show_world_file_without_collisions() {
    let dir = test_world();
    tarski()
        .arg("show")
        .arg("--world")
        .arg(dir.path().join("world.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Shapes: 3"))
        .stdout(predicate::str::contains("Q -> Shape:tet, X:2, Y:2"))
        .stderr(predicate::str::contains("share position").not());
}

#[test]
fn list_demo_world() {
    tarski()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Key"))
        .stdout(predicate::str::contains("medium"))
        .stdout(predicate::str::contains("6 objects"));
}

#[test]
fn predicates_lists_library() {
    tarski()
        .arg("predicates")
        .assert()
        .success()
        .stdout(predicate::str::contains("isSameShape(a, b)"))
        .stdout(predicate::str::contains("isCube(a)"))
        .stdout(predicate::str::contains("isBetweenOf(a, b, c)"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_clean_query() {
    tarski()
        .args(["check", "isLeftOf(A, B) && isTet(B)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn check_reports_constant_call_warning() {
    tarski()
        .args(["check", "isLeftOf(A, A)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 warning"))
        .stderr(predicate::str::contains("always false"));
}

#[test]
fn check_reports_errors_in_every_branch() {
    tarski()
        .args(["check", "false && isCube(X) || isTet(Y)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown identifier `X`"))
        .stderr(predicate::str::contains("unknown identifier `Y`"))
        .stderr(predicate::str::contains("2 errors, 0 warnings"));
}

// ---------------------------------------------------------------------------
// ast
// ---------------------------------------------------------------------------

#[test]
fn ast_prints_json() {
    tarski()
        .args(["ast", "!isCube(B)"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "not""#))
        .stdout(predicate::str::contains(r#""name": "isCube""#));
}

#[test]
fn ast_syntax_error_fails() {
    tarski()
        .args(["ast", "isCube(A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("syntax error"));
}

// ---------------------------------------------------------------------------
// demo
// ---------------------------------------------------------------------------

#[test]
fn demo_evaluates_sample_queries() {
    tarski()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shapes: 6"))
        .stdout(predicate::str::contains(
            "isBetweenOf(B, C, A) && (!isCube(B)) - true",
        ))
        .stdout(predicate::str::contains("isTet(B) - true"))
        .stdout(predicate::str::contains("isDodec(B) - false"))
        .stdout(predicate::str::contains("isSameRow(A, B) && isSameRow(B, C) - true"))
        .stdout(predicate::str::contains("isSameCol(A, B) - false"))
        .stdout(predicate::str::contains("isSameShape(A, C) - false"))
        .stdout(predicate::str::contains("(!isLeftOf(F, A)) - true"));
}

#[test]
fn no_subcommand_shows_help() {
    tarski()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
