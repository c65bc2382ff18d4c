// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::Path;

use kb_core::{classify, RepoSummary};

use crate::error::Result;
use crate::fetch::FetchOutcome;
use crate::github::{to_issues, RemoteIssue, RemoteRepo};

use super::{load::apply_outcome, open_or_init_store};

/// Rebuilds the board from a GitHub-format issue JSON file instead of
/// the network, running the same classify/replace/persist pipeline as
/// `load`.
pub fn run(file: &Path, repo: Option<&Path>) -> Result<()> {
    let (store, _config, _data_dir) = open_or_init_store()?;

    let remote: Vec<RemoteIssue> = serde_json::from_str(&fs::read_to_string(file)?)?;
    let summary = match repo {
        Some(path) => {
            let remote_repo: RemoteRepo = serde_json::from_str(&fs::read_to_string(path)?)?;
            RepoSummary::from(remote_repo)
        }
        None => store
            .load_summary()?
            .unwrap_or_else(|| placeholder_summary(file)),
    };

    let outcome = FetchOutcome {
        board: classify(to_issues(remote)),
        summary,
    };
    apply_outcome(&store, outcome, &file.display().to_string())
}

/// Header shown when importing without repository metadata.
fn placeholder_summary(file: &Path) -> RepoSummary {
    let name = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "import".to_string());
    RepoSummary {
        full_name: name.clone(),
        html_url: format!("file://{}", file.display()),
        owner_login: name,
        owner_url: String::new(),
    }
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
