// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core board types: Issue, IssueState, and Column.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Open/closed state of an issue, as reported by the repository host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    /// Still open on the remote repository.
    Open,
    /// Closed on the remote repository (completed or discarded).
    Closed,
}

impl IssueState {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(IssueState::Open),
            "closed" => Ok(IssueState::Closed),
            _ => Err(Error::InvalidState(s.to_string())),
        }
    }
}

/// One of the three fixed board columns. Not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Open and unassigned issues.
    Todo,
    /// Open issues with an assignee.
    InProgress,
    /// Closed issues.
    Done,
}

impl Column {
    /// All columns in board display order.
    pub const ALL: [Column; 3] = [Column::Todo, Column::InProgress, Column::Done];

    /// Returns the string representation used in storage and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Todo => "todo",
            Column::InProgress => "in_progress",
            Column::Done => "done",
        }
    }

    /// Returns the human-readable column label shown on the board.
    pub fn label(&self) -> &'static str {
        match self {
            Column::Todo => "To Do",
            Column::InProgress => "In Progress",
            Column::Done => "Done",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Column {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Column::Todo),
            "in_progress" | "in-progress" | "inprogress" => Ok(Column::InProgress),
            "done" => Ok(Column::Done),
            _ => Err(Error::InvalidColumn(s.to_string())),
        }
    }
}

/// A single issue card on the board.
///
/// Issues are read-only once fetched; the board only relocates them
/// between columns, it never edits their fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Stable unique identifier assigned by the repository host.
    pub id: u64,
    /// Short description of the issue.
    pub title: String,
    /// Login of the user who opened the issue, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Number of comments on the issue.
    pub comments: u32,
    /// When the issue was opened.
    pub created_at: DateTime<Utc>,
    /// Login of the assignee, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Open/closed state at fetch time.
    pub state: IssueState,
}

impl Issue {
    /// Creates an open, unassigned, comment-free issue.
    pub fn new(id: u64, title: String, created_at: DateTime<Utc>) -> Self {
        Issue {
            id,
            title,
            author: None,
            comments: 0,
            created_at,
            assignee: None,
            state: IssueState::Open,
        }
    }

    /// Whether the issue currently has an assignee.
    pub fn has_assignee(&self) -> bool {
        self.assignee.is_some()
    }

    /// Whole days elapsed since the issue was opened, floored at zero.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days().max(0)
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
