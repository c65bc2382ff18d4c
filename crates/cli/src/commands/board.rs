// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;

use kb_core::{Board, SnapshotStore};

use crate::config::{find_data_dir, get_db_path};
use crate::display;
use crate::error::Result;

pub fn run() -> Result<()> {
    // A missing data directory is the valid "no repository loaded"
    // state, not an error.
    let (board, summary) = match find_data_dir() {
        Some(dir) => {
            let store = SnapshotStore::open(&get_db_path(&dir))?;
            (
                store.load_board()?.unwrap_or_default(),
                store.load_summary()?,
            )
        }
        None => (Board::default(), None),
    };

    print!("{}", display::render_board(&board, summary.as_ref(), Utc::now()));
    Ok(())
}
