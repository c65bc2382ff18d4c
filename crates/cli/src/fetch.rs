// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fetch orchestration: reference parsing, the two concurrent reads,
//! and classification into a fresh board.
//!
//! Both reads must succeed before any state is produced; a failure on
//! either side leaves the caller's board and summary untouched. There
//! are no retries and no partial updates.

use tracing::debug;

use kb_core::{classify, Board, RepoRef, RepoSummary};

use crate::error::Result;
use crate::github::{to_issues, DataSource};

/// Result of a successful fetch: the freshly classified board and the
/// repository's display metadata.
#[derive(Debug)]
pub struct FetchOutcome {
    pub board: Board,
    pub summary: RepoSummary,
}

/// Fetches and classifies the board for an already-parsed repository.
pub async fn fetch_board<S: DataSource + ?Sized>(
    source: &S,
    repo: &RepoRef,
) -> Result<FetchOutcome> {
    // Both reads are issued together and awaited together; the board
    // is only built after both complete.
    let (remote_repo, remote_issues) =
        tokio::try_join!(source.fetch_repo(repo), source.fetch_issues(repo))?;

    let issues = to_issues(remote_issues);
    debug!(repo = %repo, count = issues.len(), "classifying fetched issues");
    Ok(FetchOutcome {
        board: classify(issues),
        summary: remote_repo.into(),
    })
}

/// Parses a user-supplied reference and fetches its board.
///
/// An unparseable reference fails with `InvalidReference` before any
/// request is issued.
pub async fn fetch_reference<S: DataSource + ?Sized>(
    source: &S,
    reference: &str,
) -> Result<FetchOutcome> {
    let repo = RepoRef::parse(reference)?;
    fetch_board(source, &repo).await
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
