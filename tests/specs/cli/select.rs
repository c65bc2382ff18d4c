// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `kanbo select` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ISSUES_FIXTURE: &str = r#"[
  {"id": 1, "title": "Open unassigned", "state": "open", "assignee": null,
   "created_at": "2026-01-01T00:00:00Z", "comments": 0, "user": {"login": "someone"}},
  {"id": 2, "title": "Open assigned", "state": "open", "assignee": {"login": "alice"},
   "created_at": "2026-01-02T00:00:00Z", "comments": 3, "user": {"login": "someone"}},
  {"id": 3, "title": "Closed", "state": "closed", "assignee": null,
   "created_at": "2026-01-03T00:00:00Z", "comments": 1, "user": {"login": "someone"}}
]"#;

fn kanbo() -> Command {
    let mut cmd = cargo_bin_cmd!("kanbo");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn import_fixture(temp: &TempDir) {
    std::fs::write(temp.path().join("issues.json"), ISSUES_FIXTURE).unwrap();
    kanbo()
        .arg("import")
        .arg("issues.json")
        .current_dir(temp.path())
        .assert()
        .success();
}

fn board_output(temp: &TempDir) -> String {
    let output = kanbo()
        .arg("board")
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

fn select(temp: &TempDir, id: &str) -> assert_cmd::assert::Assert {
    kanbo()
        .arg("select")
        .arg(id)
        .current_dir(temp.path())
        .assert()
}

#[test]
fn select_marks_the_card_on_the_board() {
    let temp = TempDir::new().unwrap();
    import_fixture(&temp);

    select(&temp, "2")
        .success()
        .stdout(predicate::str::contains("Selected #2"));

    let out = board_output(&temp);
    assert!(out.contains("* [#2]"));
    assert!(!out.contains("* [#1]"));
    assert!(!out.contains("* [#3]"));
}

#[test]
fn selecting_another_card_moves_the_highlight() {
    let temp = TempDir::new().unwrap();
    import_fixture(&temp);

    select(&temp, "1").success();
    select(&temp, "2").success();

    let out = board_output(&temp);
    assert!(out.contains("* [#2]"));
    assert!(!out.contains("* [#1]"));
}

#[test]
fn selecting_the_same_card_twice_clears_the_highlight() {
    let temp = TempDir::new().unwrap();
    import_fixture(&temp);

    select(&temp, "2").success();
    select(&temp, "2")
        .success()
        .stdout(predicate::str::contains("Cleared selection"));

    let out = board_output(&temp);
    assert!(!out.contains("* [#"));
}

#[test]
fn select_rejects_unknown_issue() {
    let temp = TempDir::new().unwrap();
    import_fixture(&temp);

    select(&temp, "99")
        .failure()
        .stderr(predicate::str::contains("issue not found"));
}

#[test]
fn selection_survives_a_move() {
    let temp = TempDir::new().unwrap();
    import_fixture(&temp);

    select(&temp, "1").success();
    kanbo()
        .arg("move")
        .arg("1")
        .arg("done")
        .current_dir(temp.path())
        .assert()
        .success();

    let out = board_output(&temp);
    assert!(out.contains("* [#1]"));
    let done = out.find("Done (2)").unwrap();
    assert!(out.find("* [#1]").unwrap() > done);
}
