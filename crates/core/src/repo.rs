// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repository references and display metadata.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Matches an `<owner>/<name>` tail, tolerating a trailing slash or a
/// `.git` suffix.
const REF_PATTERN: &str = r"^(?:.*/)?([A-Za-z0-9_.\-]+)/([A-Za-z0-9_.\-]+?)(?:\.git)?/?$";

/// An `owner/name` repository identifier extracted from user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// Repository owner (user or organization login).
    pub owner: String,
    /// Repository name.
    pub name: String,
}

impl RepoRef {
    /// Parses a user-supplied reference into an `owner/name` pair.
    ///
    /// Accepts full repository URLs (the last two path segments are
    /// taken) and bare `owner/name` slugs. Anything without a
    /// recognizable `owner/name` tail fails with
    /// [`Error::InvalidReference`]; callers must not touch the network
    /// in that case.
    pub fn parse(reference: &str) -> Result<Self> {
        let trimmed = reference.trim();
        // For full URLs, match only the path after the host.
        let path = match trimmed.split_once("://") {
            Some((_, rest)) => rest.split_once('/').map(|(_, p)| p).unwrap_or(""),
            None => trimmed,
        };
        let re = Regex::new(REF_PATTERN)
            .map_err(|e| Error::CorruptedData(format!("reference pattern: {e}")))?;
        let caps = re
            .captures(path)
            .ok_or_else(|| Error::InvalidReference(reference.to_string()))?;
        match (caps.get(1), caps.get(2)) {
            (Some(owner), Some(name)) => Ok(RepoRef {
                owner: owner.as_str().to_string(),
                name: name.as_str().to_string(),
            }),
            _ => Err(Error::InvalidReference(reference.to_string())),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Display metadata about the loaded repository.
///
/// Purely informational; an absent summary is the valid "no repository
/// loaded" state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    /// Full `owner/name` of the repository.
    pub full_name: String,
    /// Canonical URL of the repository.
    pub html_url: String,
    /// Login of the repository owner.
    pub owner_login: String,
    /// URL of the owner's profile.
    pub owner_url: String,
}

#[cfg(test)]
#[path = "repo_tests.rs"]
mod tests;
