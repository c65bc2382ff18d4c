// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tracing::debug;

use kb_core::{RepoRef, SnapshotStore};

use crate::config::{ensure_data_dir, find_data_dir, get_db_path, Config};
use crate::error::{Error, Result};
use crate::fetch::{self, FetchOutcome};
use crate::github::{GitHubClient, DEFAULT_API_BASE};

use super::{persist_board, persist_summary};

pub fn run(reference: Option<String>) -> Result<()> {
    let data_dir = find_data_dir();
    let mut config = match &data_dir {
        Some(dir) => Config::load(dir)?,
        None => Config::default(),
    };
    let reference = reference
        .or_else(|| config.repo.clone())
        .ok_or(Error::NoReference)?;

    // Parse before anything else: an invalid reference performs no
    // network activity and leaves no state behind.
    let repo = RepoRef::parse(&reference)?;

    let base = config
        .api_base
        .clone()
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    let client = GitHubClient::new(base);

    // Board mutations stay single-threaded: the fetch runs on a
    // current-thread runtime and the board is only touched after both
    // reads have completed.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(fetch::fetch_board(&client, &repo))?;

    let data_dir = match data_dir {
        Some(dir) => dir,
        None => ensure_data_dir()?,
    };
    let store = SnapshotStore::open(&get_db_path(&data_dir))?;
    apply_outcome(&store, outcome, &reference)?;

    config.repo = Some(reference);
    config.save(&data_dir)?;
    Ok(())
}

/// Replaces the persisted board and summary with a fetch outcome.
/// Shared with `import`, which produces the same outcome offline.
pub(crate) fn apply_outcome(
    store: &SnapshotStore,
    outcome: FetchOutcome,
    reference: &str,
) -> Result<()> {
    let mut board = store.load_board()?.unwrap_or_default();
    board.replace_all(outcome.board);
    debug!(reference, count = board.len(), "board replaced");

    persist_board(store, &board);
    persist_summary(store, &outcome.summary);

    println!(
        "Loaded {} issues from {}",
        board.len(),
        outcome.summary.full_name
    );
    Ok(())
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
