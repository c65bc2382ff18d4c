// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `kanbo completion` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn kanbo() -> Command {
    cargo_bin_cmd!("kanbo")
}

#[test]
fn completion_bash_generates_valid_script() {
    kanbo()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("_kanbo"))
        .stdout(predicate::str::contains("board"))
        .stdout(predicate::str::contains("move"));
}

#[test]
fn completion_zsh_generates_valid_script() {
    kanbo()
        .arg("completion")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef kanbo"));
}

#[test]
fn completion_fish_generates_valid_script() {
    kanbo()
        .arg("completion")
        .arg("fish")
        .assert()
        .success()
        .stdout(predicate::str::contains("complete -c kanbo"));
}

#[test]
fn completion_without_shell_shows_help() {
    kanbo().arg("completion").assert().failure();
}

#[test]
fn completion_invalid_shell_fails() {
    kanbo().arg("completion").arg("tcsh").assert().failure();
}
