// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use kb_core::Column;

use crate::error::{Error, Result};

use super::{open_store, persist_board};

/// The drag-and-drop adapter: translates `kanbo move <id> <column>`
/// into a single board mutation.
pub fn run(id: u64, column: &str) -> Result<()> {
    let column: Column = column.parse()?;
    let (store, _data_dir) = open_store()?;
    let mut board = store.load_board()?.ok_or(Error::NoBoard)?;

    let moved = board.move_issue(id, column);
    // The full board is persisted after every move, before the move is
    // considered complete. A stale target is a silent no-op.
    persist_board(&store, &board);

    if moved {
        println!("Moved #{} to {}", id, column.label());
    }
    Ok(())
}
