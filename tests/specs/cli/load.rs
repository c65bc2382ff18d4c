// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `kanbo load` command (offline paths).
//!
//! The success path needs a network and is covered by the fetch
//! orchestration tests against a fake data source.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kanbo() -> Command {
    cargo_bin_cmd!("kanbo")
}

#[test]
fn load_rejects_unrecognizable_reference() {
    let temp = TempDir::new().unwrap();
    kanbo()
        .arg("load")
        .arg("not-a-url")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid repository reference"))
        .stderr(predicate::str::contains("not-a-url"));
}

#[test]
fn load_with_invalid_reference_leaves_no_state_behind() {
    let temp = TempDir::new().unwrap();
    kanbo()
        .arg("load")
        .arg("not-a-url")
        .current_dir(temp.path())
        .assert()
        .failure();

    assert!(
        !temp.path().join(".kanbo").exists(),
        "no data directory is created for an invalid reference"
    );
}

#[test]
fn load_without_reference_or_default_fails_with_hint() {
    let temp = TempDir::new().unwrap();
    kanbo()
        .arg("load")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no repository reference"));
}

#[test]
fn load_rejects_reference_without_name_segment() {
    let temp = TempDir::new().unwrap();
    kanbo()
        .arg("load")
        .arg("https://github.com")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid repository reference"));
}
