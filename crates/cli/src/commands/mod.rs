// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod board;
pub mod import;
pub mod load;
pub mod relocate;
pub mod select;

use std::path::PathBuf;

use kb_core::{Board, RepoSummary, SnapshotStore};

use crate::config::{ensure_data_dir, find_data_dir, get_db_path, Config};
use crate::error::{Error, Result};

/// Opens the snapshot store of an existing board directory, failing
/// when none exists. Used by commands that require a loaded board.
pub fn open_store() -> Result<(SnapshotStore, PathBuf)> {
    let data_dir = find_data_dir().ok_or(Error::NoBoard)?;
    let store = SnapshotStore::open(&get_db_path(&data_dir))?;
    Ok((store, data_dir))
}

/// Opens (creating if necessary) the snapshot store and config. Used
/// by commands that may initialize a fresh board directory.
pub fn open_or_init_store() -> Result<(SnapshotStore, Config, PathBuf)> {
    let data_dir = ensure_data_dir()?;
    let config = Config::load(&data_dir)?;
    let store = SnapshotStore::open(&get_db_path(&data_dir))?;
    Ok((store, config, data_dir))
}

/// Persist the board snapshot. The write is fire-and-forget: a failure
/// (e.g. a full disk) surfaces as a warning, never as a failed command.
pub fn persist_board(store: &SnapshotStore, board: &Board) {
    if let Err(e) = store.save_board(board) {
        eprintln!("warning: failed to persist board snapshot: {}", e);
    } else {
        tracing::debug!("persisted board snapshot");
    }
}

/// Persist the repository summary, with the same fire-and-forget
/// discipline as [`persist_board`].
pub fn persist_summary(store: &SnapshotStore, summary: &RepoSummary) {
    if let Err(e) = store.save_summary(summary) {
        eprintln!("warning: failed to persist repository summary: {}", e);
    }
}
