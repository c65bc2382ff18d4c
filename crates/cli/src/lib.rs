// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kbrs - a terminal kanban board for the issues of one repository.
//!
//! This crate provides the functionality behind the `kanbo` CLI: it
//! fetches the issue list of a public GitHub repository, partitions it
//! into three fixed columns (To Do / In Progress / Done), renders the
//! board, and lets the user relocate and highlight cards, with every
//! mutation persisted to a local snapshot store.
//!
//! # Main Components
//!
//! - [`github`] - the repository data source (wire types + HTTP client)
//! - [`fetch`] - fetch orchestration (parse, concurrent reads, classify)
//! - [`display`] - board rendering
//! - [`config`] - the `.kanbo/` data directory and its config file
//! - [`Error`] - error types for all operations

mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod fetch;
pub mod github;

pub use cli::{Cli, Command};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Load { reference } => commands::load::run(reference),
        Command::Import { file, repo } => commands::import::run(&file, repo.as_deref()),
        Command::Board => commands::board::run(),
        Command::Move { id, column } => commands::relocate::run(id, &column),
        Command::Select { id } => commands::select::run(id),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "kanbo", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
