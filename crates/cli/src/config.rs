// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `.kanbo/` data directory and its configuration file.
//!
//! A board belongs to a directory tree: commands look for the nearest
//! ancestor `.kanbo/` directory, and the first loading command creates
//! one in the current directory. The directory holds `config.toml` and
//! the `board.db` snapshot store.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const DATA_DIR_NAME: &str = ".kanbo";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "board.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Configuration stored in `.kanbo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Last loaded repository reference; bare `kanbo load` reuses it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Override of the GitHub API root, mainly for testing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl Config {
    /// Loads the config from a data directory; a missing file is the
    /// default config.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Writes the config back to a data directory.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("serialize config: {e}")))?;
        fs::write(data_dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }
}

/// Finds the nearest ancestor `.kanbo/` directory, starting from the
/// current directory.
pub fn find_data_dir() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_data_dir_from(&cwd)
}

/// Finds the nearest ancestor `.kanbo/` directory from a starting point.
pub fn find_data_dir_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}

/// Returns the existing data directory or creates `.kanbo/` in the
/// current directory.
pub fn ensure_data_dir() -> Result<PathBuf> {
    if let Some(dir) = find_data_dir() {
        return Ok(dir);
    }
    let dir = std::env::current_dir()?.join(DATA_DIR_NAME);
    init_data_dir(&dir)?;
    Ok(dir)
}

/// Creates a data directory, ignoring the snapshot store for git.
pub fn init_data_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    let gitignore = dir.join(GITIGNORE_FILE_NAME);
    if !gitignore.exists() {
        fs::write(&gitignore, format!("{DB_FILE_NAME}\n"))?;
    }
    Ok(())
}

/// Path of the snapshot store inside a data directory.
pub fn get_db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DB_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
