// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the kbrs library.
///
/// Errors provide user-facing messages with hints for common issues;
/// the binary prints them as the transient notifications of the board.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no board loaded\n  hint: run 'kanbo load <repository>' first")]
    NoBoard,

    #[error("no repository reference given\n  hint: pass a URL or owner/name slug, or load a repository once so it becomes the default")]
    NoReference,

    #[error("invalid repository reference: '{0}'\n  hint: pass a repository URL or an owner/name slug")]
    InvalidReference(String),

    #[error("issue not found on the board: {0}")]
    IssueNotFound(u64),

    #[error("invalid column: '{0}'\n  hint: valid columns are: todo, in_progress, done")]
    InvalidColumn(String),

    #[error("invalid issue state: '{0}'\n  hint: valid states are: open, closed")]
    InvalidState(String),

    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for kbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<kb_core::Error> for Error {
    fn from(e: kb_core::Error) -> Self {
        match e {
            kb_core::Error::InvalidReference(s) => Error::InvalidReference(s),
            kb_core::Error::IssueNotFound(id) => Error::IssueNotFound(id),
            kb_core::Error::InvalidColumn(s) => Error::InvalidColumn(s),
            kb_core::Error::InvalidState(s) => Error::InvalidState(s),
            kb_core::Error::Database(e) => Error::Storage(e.to_string()),
            kb_core::Error::Io(e) => Error::Io(e),
            kb_core::Error::Json(e) => Error::Json(e),
            kb_core::Error::CorruptedData(s) => Error::Storage(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
