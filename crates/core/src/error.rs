// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for kb-core operations.

use thiserror::Error;

/// All possible errors that can occur in kb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid repository reference: '{0}'\n  hint: pass a repository URL or an owner/name slug")]
    InvalidReference(String),

    #[error("issue not found on the board: {0}")]
    IssueNotFound(u64),

    #[error("invalid column: '{0}'\n  hint: valid columns are: todo, in_progress, done")]
    InvalidColumn(String),

    #[error("invalid issue state: '{0}'\n  hint: valid states are: open, closed")]
    InvalidState(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for kb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
