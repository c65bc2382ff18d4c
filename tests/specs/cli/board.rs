// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `kanbo board` command.

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

const REPO_FIXTURE: &str = r#"{
  "full_name": "test/repo",
  "html_url": "https://github.com/test/repo",
  "owner": {"login": "testOwner", "html_url": "https://github.com/testOwner"}
}"#;

fn kanbo() -> Command {
    let mut cmd = cargo_bin_cmd!("kanbo");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn import_fixture(temp: &TempDir) {
    std::fs::write(temp.path().join("issues.json"), ISSUES_FIXTURE).unwrap();
    std::fs::write(temp.path().join("repo.json"), REPO_FIXTURE).unwrap();
    kanbo()
        .arg("import")
        .arg("issues.json")
        .arg("--repo")
        .arg("repo.json")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 3 issues from test/repo"));
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

#[test]
fn board_without_data_dir_shows_no_repository_loaded() {
    let temp = TempDir::new().unwrap();
    let out = board_output(&temp);
    assert!(out.contains("no repository loaded"));
    assert!(out.contains("To Do (0)"));
    assert!(out.contains("In Progress (0)"));
    assert!(out.contains("Done (0)"));
    assert!(out.contains("(empty)"));
}

#[test]
fn board_shows_repository_header_after_import() {
    let temp = TempDir::new().unwrap();
    import_fixture(&temp);

    let out = board_output(&temp);
    assert!(out.contains("test/repo"));
    assert!(out.contains("testOwner"));
    assert!(out.contains("https://github.com/test/repo"));
}

#[test]
fn board_classifies_fixture_into_expected_columns() {
    let temp = TempDir::new().unwrap();
    import_fixture(&temp);

    let out = board_output(&temp);
    let todo = out.find("To Do (1)").unwrap();
    let in_progress = out.find("In Progress (1)").unwrap();
    let done = out.find("Done (1)").unwrap();
    let open_unassigned = out.find("[#1] Open unassigned").unwrap();
    let open_assigned = out.find("[#2] Open assigned").unwrap();
    let closed = out.find("[#3] Closed").unwrap();

    // Each card sits inside its column's section.
    assert!(todo < open_unassigned && open_unassigned < in_progress);
    assert!(in_progress < open_assigned && open_assigned < done);
    assert!(done < closed);
}

#[test]
fn board_cards_show_author_comments_and_age() {
    let temp = TempDir::new().unwrap();
    import_fixture(&temp);

    let out = board_output(&temp);
    assert!(out.contains("@someone"));
    assert!(out.contains("3 comments"));
    assert!(out.contains("days ago"));
    assert!(out.contains("[In Progress]"));
}

#[test]
fn board_survives_between_invocations() {
    let temp = TempDir::new().unwrap();
    import_fixture(&temp);

    let first = board_output(&temp);
    let second = board_output(&temp);
    similar_asserts::assert_eq!(first, second);
}
