// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board rendering.

use chrono::{DateTime, Utc};

use kb_core::{Board, Column, Issue, RepoSummary};

use crate::colors;

/// Format the repository header lines.
///
/// An absent summary is a valid state and renders as a placeholder.
pub fn format_header(summary: Option<&RepoSummary>) -> Vec<String> {
    match summary {
        Some(summary) => vec![
            format!(
                "{} <{}>",
                colors::header(&summary.full_name),
                summary.html_url
            ),
            format!(
                "owner: {} <{}>",
                colors::literal(&summary.owner_login),
                summary.owner_url
            ),
        ],
        None => vec![colors::context("no repository loaded")],
    }
}

/// Format a single card line.
///
/// The highlighted card carries a `*` marker (and the highlight color
/// when colors are enabled) so exclusivity is visible without ANSI.
pub fn format_card(issue: &Issue, column: Column, selected: bool, now: DateTime<Utc>) -> String {
    let marker = if selected { "*" } else { "-" };
    let author = issue.author.as_deref().unwrap_or("unknown");
    let line = format!(
        "  {} [#{}] {} (@{}, {} comments, opened {} days ago) [{}]",
        marker,
        issue.id,
        issue.title,
        author,
        issue.comments,
        issue.age_days(now),
        column.label(),
    );
    if selected {
        colors::selected(&line)
    } else {
        line
    }
}

/// Format one column section: label, count, and its cards.
pub fn format_column(board: &Board, column: Column, now: DateTime<Utc>) -> Vec<String> {
    let issues = board.column(column);
    let mut lines = vec![colors::header(&format!(
        "{} ({})",
        column.label(),
        issues.len()
    ))];
    if issues.is_empty() {
        lines.push(colors::context("  (empty)"));
    }
    for issue in issues {
        let selected = board.selected() == Some(issue.id);
        lines.push(format_card(issue, column, selected, now));
    }
    lines
}

/// Render the full board: header plus the three fixed columns.
pub fn render_board(board: &Board, summary: Option<&RepoSummary>, now: DateTime<Utc>) -> String {
    let mut lines = format_header(summary);
    for column in Column::ALL {
        lines.push(String::new());
        lines.extend(format_column(board, column, now));
    }
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
