// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed snapshot store for the board.
//!
//! A single key-value table holds the JSON-serialized board under a
//! fixed key, and the repository summary under another. The store is
//! read once at startup and written after every mutation.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::repo::RepoSummary;

/// SQL schema for the snapshot store.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS snapshots (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Fixed key for the board snapshot.
const BOARD_KEY: &str = "board";
/// Fixed key for the repository summary.
const SUMMARY_KEY: &str = "repo";

/// Durable key-value store holding the serialized board state.
pub struct SnapshotStore {
    conn: Connection,
}

impl SnapshotStore {
    /// Opens (creating if necessary) the store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(SnapshotStore { conn })
    }

    /// Opens an in-memory store, used in tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(SnapshotStore { conn })
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO snapshots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Loads the persisted board snapshot, if one exists.
    pub fn load_board(&self) -> Result<Option<Board>> {
        match self.get(BOARD_KEY)? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| Error::CorruptedData(format!("board snapshot: {e}"))),
            None => Ok(None),
        }
    }

    /// Serializes and writes the full board snapshot.
    pub fn save_board(&self, board: &Board) -> Result<()> {
        self.set(BOARD_KEY, &serde_json::to_string(board)?)
    }

    /// Loads the persisted repository summary, if one exists.
    pub fn load_summary(&self) -> Result<Option<RepoSummary>> {
        match self.get(SUMMARY_KEY)? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| Error::CorruptedData(format!("repository summary: {e}"))),
            None => Ok(None),
        }
    }

    /// Serializes and writes the repository summary.
    pub fn save_summary(&self, summary: &RepoSummary) -> Result<()> {
        self.set(SUMMARY_KEY, &serde_json::to_string(summary)?)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
