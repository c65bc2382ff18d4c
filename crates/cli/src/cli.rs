// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Board:
  load        Fetch a repository's issues and rebuild the board
  import      Rebuild the board from an issue JSON file
  board       Render the board
  move        Move a card to another column
  select      Toggle the highlight on a card

Setup:
  completion  Generate shell completions";

const QUICKSTART_HELP: &str = "\
Get started:
  kanbo load owner/name    Load a repository's issues
  kanbo board              Render the three columns
  kanbo move 42 done       Move issue 42 to Done
  kanbo select 42          Highlight issue 42";

#[derive(Parser)]
#[command(name = "kanbo")]
#[command(about = "A kanban board for the issues of one repository")]
#[command(
    long_about = "A kanban board for the issues of one repository.\n\n\
    Issues are fetched from the GitHub REST API, partitioned into three fixed\n\
    columns, and persisted locally so moves and highlights survive between runs."
)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch a repository's issues and rebuild the board
    #[command(after_help = "Examples:\n  \
        kanbo load https://github.com/rust-lang/rust    Load from a URL\n  \
        kanbo load rust-lang/rust                       Load from an owner/name slug\n  \
        kanbo load                                      Reload the last repository")]
    Load {
        /// Repository URL or owner/name slug (defaults to the last loaded repository)
        reference: Option<String>,
    },

    /// Rebuild the board from a GitHub-format issue JSON file
    #[command(
        arg_required_else_help = true,
        after_help = "Examples:\n  \
        kanbo import issues.json                  Import an issue array\n  \
        kanbo import issues.json --repo meta.json Also set the repository header"
    )]
    Import {
        /// Path to a JSON array of issues in GitHub API format
        file: PathBuf,

        /// Path to a repository metadata JSON object in GitHub API format
        #[arg(long)]
        repo: Option<PathBuf>,
    },

    /// Render the board
    Board,

    /// Move a card to another column
    #[command(
        arg_required_else_help = true,
        after_help = "Examples:\n  \
        kanbo move 42 done           Move issue 42 to Done\n  \
        kanbo move 42 in_progress    Move issue 42 to In Progress"
    )]
    Move {
        /// Issue id
        id: u64,

        /// Destination column (todo, in_progress, done)
        column: String,
    },

    /// Toggle the highlight on a card (at most one card is highlighted)
    #[command(arg_required_else_help = true)]
    Select {
        /// Issue id
        id: u64,
    },

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Target shell
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
