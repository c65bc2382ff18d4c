// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::{Error, Result};

use super::{open_store, persist_board};

/// Toggles the exclusive card highlight.
pub fn run(id: u64) -> Result<()> {
    let (store, _data_dir) = open_store()?;
    let mut board = store.load_board()?.ok_or(Error::NoBoard)?;

    let highlighted = board.set_selected(id)?;
    persist_board(&store, &board);

    if highlighted {
        println!("Selected #{}", id);
    } else {
        println!("Cleared selection");
    }
    Ok(())
}
