// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kb-core - domain types and state machine for the kanbo issue board.
//!
//! This crate holds everything below the CLI and the network: the issue
//! and column types, the classification rule that seeds a board from a
//! fetched issue list, the board mutation operations, repository
//! reference parsing, and the SQLite-backed snapshot store.
//!
//! # Main Components
//!
//! - [`Issue`], [`IssueState`], [`Column`] - domain types
//! - [`classify`] - partitions a fetched issue list into the three columns
//! - [`Board`] - the column -> issue-sequence partition and its mutations
//! - [`RepoRef`] / [`RepoSummary`] - repository reference and display metadata
//! - [`SnapshotStore`] - durable key-value store for board snapshots
//! - [`Error`] - error types for all operations

pub mod board;
pub mod classify;
pub mod error;
pub mod issue;
pub mod repo;
pub mod store;

pub use board::Board;
pub use classify::{classify, column_for};
pub use error::{Error, Result};
pub use issue::{Column, Issue, IssueState};
pub use repo::{RepoRef, RepoSummary};
pub use store::SnapshotStore;
