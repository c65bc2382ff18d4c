// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classification of fetched issues into board columns.
//!
//! The rule is pure and total: every issue maps to exactly one column,
//! and relative input order is preserved within each column.

use crate::board::Board;
use crate::issue::{Column, Issue, IssueState};

/// Column an issue belongs to when freshly fetched.
///
/// Closed state takes precedence over assignment: a closed issue lands
/// in Done even when it still has an assignee.
pub fn column_for(issue: &Issue) -> Column {
    match (issue.state, issue.has_assignee()) {
        (IssueState::Closed, _) => Column::Done,
        (IssueState::Open, true) => Column::InProgress,
        (IssueState::Open, false) => Column::Todo,
    }
}

/// Partition a fetched issue list into a fresh board.
///
/// The result satisfies the board partition invariant: every input
/// issue appears in exactly one column, in input order. The caller is
/// responsible for persisting the result.
pub fn classify(issues: Vec<Issue>) -> Board {
    let mut board = Board::new();
    for issue in issues {
        let column = column_for(&issue);
        board.push(column, issue);
    }
    board
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
