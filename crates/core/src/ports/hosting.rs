// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The upstream VCS/hosting API boundary: fork, clone, PR/issue creation.
//! Out of scope per the system's purpose statement beyond this interface;
//! `typofix-adapters` provides the only real implementation (GitHub via
//! `octocrab`).

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostingError {
    #[error("transient hosting API failure: {0}")]
    Transient(String),

    #[error("hosting API authentication failure: {0}")]
    Auth(String),

    #[error("local git invocation failed: {0}")]
    Git(String),
}

/// A pull request or issue created on the hosting platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoHandle {
    pub number: u64,
    pub html_url: String,
}

/// The subset of a VCS hosting platform the pipeline needs.
pub trait HostingApi: Send + Sync {
    /// Resolve a possibly-moved `org/repo` to its current canonical name.
    fn resolve_true_orgrepo(&self, orgrepo: &str) -> Result<String, HostingError>;

    /// `true` if the authenticated user already has a fork of `orgrepo`.
    fn check_forked(&self, orgrepo: &str) -> Result<bool, HostingError>;

    /// `true` if `orgrepo` is archived upstream.
    fn is_archived(&self, orgrepo: &str) -> Result<bool, HostingError>;

    /// Fork `orgrepo` into the authenticated account.
    fn fork(&self, orgrepo: &str) -> Result<(), HostingError>;

    /// Clone `repo` (already forked) into `target/repo`.
    fn checkout(&self, repo: &str, target: &Path) -> Result<(), HostingError>;

    /// `true` if the furthest non-archived ancestor of `reponame` has
    /// issues enabled.
    fn issues_allowed(&self, reponame: &str) -> Result<bool, HostingError>;

    /// Open a pull request from `from_branch` to `to_branch` on `reponame`.
    fn create_pr(
        &self,
        reponame: &str,
        title: &str,
        body: &str,
        from_branch: &str,
        to_branch: &str,
    ) -> Result<RepoHandle, HostingError>;

    /// Open a tracking issue on `reponame`.
    fn create_issue(
        &self,
        reponame: &str,
        title: &str,
        body: &str,
    ) -> Result<RepoHandle, HostingError>;
}
