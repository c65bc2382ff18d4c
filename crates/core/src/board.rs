// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The board: a partition of issues over the three fixed columns.
//!
//! Invariant: every issue on the board appears in exactly one column's
//! sequence. Order within a column is insertion order; moved issues
//! append at the tail.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::issue::{Column, Issue};

/// In-memory board state: three ordered columns plus the exclusive
/// card highlight.
///
/// All mutations take `&mut self`, so from any caller's perspective a
/// move is atomic: no reader can observe an issue in zero or two
/// columns. Callers on multi-threaded platforms must serialize access
/// (single-writer discipline) to keep that guarantee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    todo: Vec<Issue>,
    in_progress: Vec<Issue>,
    done: Vec<Issue>,
    /// At most one card is highlighted at a time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected: Option<u64>,
}

impl Board {
    /// Creates an empty board with nothing selected.
    pub fn new() -> Self {
        Board::default()
    }

    /// The ordered issue sequence of a column.
    pub fn column(&self, column: Column) -> &[Issue] {
        match column {
            Column::Todo => &self.todo,
            Column::InProgress => &self.in_progress,
            Column::Done => &self.done,
        }
    }

    fn column_mut(&mut self, column: Column) -> &mut Vec<Issue> {
        match column {
            Column::Todo => &mut self.todo,
            Column::InProgress => &mut self.in_progress,
            Column::Done => &mut self.done,
        }
    }

    /// Appends an issue to the tail of a column.
    pub fn push(&mut self, column: Column, issue: Issue) {
        self.column_mut(column).push(issue);
    }

    /// Relocates the issue with the given id to the tail of `dest`.
    ///
    /// Returns `false` and leaves the board untouched when no column
    /// holds the issue (stale move targets are a safe no-op). A move to
    /// the issue's current column re-appends it at the tail; repeated
    /// self-moves are not position-idempotent.
    pub fn move_issue(&mut self, id: u64, dest: Column) -> bool {
        let Some(issue) = self.take(id) else {
            return false;
        };
        self.column_mut(dest).push(issue);
        true
    }

    fn take(&mut self, id: u64) -> Option<Issue> {
        for column in Column::ALL {
            let issues = self.column_mut(column);
            if let Some(pos) = issues.iter().position(|i| i.id == id) {
                return Some(issues.remove(pos));
            }
        }
        None
    }

    /// Wholesale replacement after a successful fetch.
    ///
    /// The highlight survives only when the highlighted issue is still
    /// present on the incoming board.
    pub fn replace_all(&mut self, other: Board) {
        let selected = self.selected.filter(|&id| other.contains(id));
        *self = other;
        self.selected = selected;
    }

    /// Toggles the exclusive card highlight.
    ///
    /// Selecting the already-highlighted card clears the highlight;
    /// selecting any other card moves the highlight to it. Returns
    /// whether the card is highlighted afterwards.
    pub fn set_selected(&mut self, id: u64) -> Result<bool> {
        if !self.contains(id) {
            return Err(Error::IssueNotFound(id));
        }
        if self.selected == Some(id) {
            self.selected = None;
            Ok(false)
        } else {
            self.selected = Some(id);
            Ok(true)
        }
    }

    /// Id of the highlighted card, if any.
    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    /// Whether any column holds the issue.
    pub fn contains(&self, id: u64) -> bool {
        self.column_of(id).is_some()
    }

    /// The column currently holding the issue, if any.
    pub fn column_of(&self, id: u64) -> Option<Column> {
        Column::ALL
            .into_iter()
            .find(|&c| self.column(c).iter().any(|i| i.id == id))
    }

    /// Total number of issues across all columns.
    pub fn len(&self) -> usize {
        Column::ALL.iter().map(|&c| self.column(c).len()).sum()
    }

    /// True when no column holds any issue.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates all issues in column display order.
    pub fn iter(&self) -> impl Iterator<Item = (Column, &Issue)> {
        Column::ALL
            .into_iter()
            .flat_map(|c| self.column(c).iter().map(move |i| (c, i)))
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
