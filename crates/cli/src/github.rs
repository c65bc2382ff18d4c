// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The repository data source: GitHub REST wire types and HTTP client.
//!
//! The [`DataSource`] trait is the injectable seam between the fetch
//! orchestration and the network; tests substitute an in-memory fake.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use kb_core::{Issue, IssueState, RepoRef, RepoSummary};

use crate::error::Result;

/// GitHub REST API root used when no override is configured.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Issues requested in one page. Pagination beyond that is out of scope.
pub const ISSUES_PER_PAGE: u32 = 100;

const USER_AGENT: &str = "kanbo";

/// Repository owner object as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteOwner {
    pub login: String,
    pub html_url: String,
}

/// Repository metadata object as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteRepo {
    pub full_name: String,
    pub html_url: String,
    pub owner: RemoteOwner,
}

/// The `user` object on an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteUser {
    pub login: String,
}

/// An issue object as returned by the API (subset of fields we use).
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteIssue {
    pub id: u64,
    pub title: String,
    pub state: IssueState,
    /// Assignee presence is derived from this object being non-null.
    #[serde(default)]
    pub assignee: Option<RemoteUser>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub user: Option<RemoteUser>,
    /// Pull requests also come through the issues endpoint; filter them out.
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

impl From<RemoteRepo> for RepoSummary {
    fn from(repo: RemoteRepo) -> Self {
        RepoSummary {
            full_name: repo.full_name,
            html_url: repo.html_url,
            owner_login: repo.owner.login,
            owner_url: repo.owner.html_url,
        }
    }
}

impl From<RemoteIssue> for Issue {
    fn from(remote: RemoteIssue) -> Self {
        Issue {
            id: remote.id,
            title: remote.title,
            author: remote.user.map(|u| u.login),
            comments: remote.comments,
            created_at: remote.created_at,
            assignee: remote.assignee.map(|a| a.login),
            state: remote.state,
        }
    }
}

/// Converts a raw issue page into board issues, dropping pull requests.
pub fn to_issues(remote: Vec<RemoteIssue>) -> Vec<Issue> {
    remote
        .into_iter()
        .filter(|i| i.pull_request.is_none())
        .map(Issue::from)
        .collect()
}

/// The two read operations the board consumes.
#[async_trait]
pub trait DataSource {
    /// Fetch repository display metadata.
    async fn fetch_repo(&self, repo: &RepoRef) -> Result<RemoteRepo>;

    /// Fetch one page of the repository's issues (open and closed).
    async fn fetch_issues(&self, repo: &RepoRef) -> Result<Vec<RemoteIssue>>;
}

/// HTTPS data source backed by the GitHub REST API.
pub struct GitHubClient {
    client: reqwest::Client,
    base: String,
}

impl GitHubClient {
    /// Creates a client against the given API root (no trailing slash).
    pub fn new(base: impl Into<String>) -> Self {
        GitHubClient {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }
}

// HTTP status codes are deliberately not inspected: only transport
// errors and undecodable bodies fail a fetch.
#[async_trait]
impl DataSource for GitHubClient {
    async fn fetch_repo(&self, repo: &RepoRef) -> Result<RemoteRepo> {
        let url = format!("{}/repos/{}/{}", self.base, repo.owner, repo.name);
        tracing::debug!(%url, "fetching repository metadata");
        let remote = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?
            .json::<RemoteRepo>()
            .await?;
        Ok(remote)
    }

    async fn fetch_issues(&self, repo: &RepoRef) -> Result<Vec<RemoteIssue>> {
        let url = format!("{}/repos/{}/{}/issues", self.base, repo.owner, repo.name);
        tracing::debug!(%url, "fetching issue list");
        let per_page = ISSUES_PER_PAGE.to_string();
        let issues = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .query(&[("state", "all"), ("per_page", per_page.as_str())])
            .send()
            .await?
            .json::<Vec<RemoteIssue>>()
            .await?;
        Ok(issues)
    }
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
