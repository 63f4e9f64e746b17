// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! GitHub-backed [`HostingApi`]. Grounded on `_github.py`: fork caching
//! under `forked|<repo>`, `get_true_orgrepo`'s moved-repository
//! resolution, `get_parent_repo`'s non-archived-ancestor walk for
//! `issues_allowed`, and the plain `git clone` used by `checkout`
//! (octocrab has no clone operation of its own).

use std::path::Path;
use std::process::Command;
use std::sync::Arc;

use octocrab::Octocrab;
use tokio::runtime::Runtime;
use tracing::{info, instrument};
use typofix_core::{HostingApi, HostingError, RepoHandle, Store};

pub struct GithubHosting {
    client: Octocrab,
    runtime: Runtime,
    store: Arc<Store>,
}

impl GithubHosting {
    pub fn new(token: String, store: Arc<Store>) -> Result<Self, HostingError> {
        let client = Octocrab::builder()
            .personal_token(token)
            .build()
            .map_err(|e| HostingError::Auth(e.to_string()))?;
        let runtime = Runtime::new().map_err(|e| HostingError::Transient(e.to_string()))?;
        Ok(GithubHosting {
            client,
            runtime,
            store,
        })
    }

    fn authenticated_login(&self) -> Result<String, HostingError> {
        self.runtime.block_on(async {
            self.client
                .current()
                .user()
                .await
                .map(|u| u.login)
                .map_err(transient)
        })
    }

    fn forked_cache_key(repo: &str) -> String {
        format!("forked|{repo}")
    }
}

fn transient(e: octocrab::Error) -> HostingError {
    HostingError::Transient(e.to_string())
}

impl HostingApi for GithubHosting {
    #[instrument(skip(self))]
    fn resolve_true_orgrepo(&self, orgrepo: &str) -> Result<String, HostingError> {
        let (owner, repo) = split_orgrepo(orgrepo)?;
        self.runtime.block_on(async {
            self.client
                .repos(owner, repo)
                .get()
                .await
                .map(|r| r.full_name.unwrap_or_else(|| orgrepo.to_string()))
                .map_err(transient)
        })
    }

    fn check_forked(&self, orgrepo: &str) -> Result<bool, HostingError> {
        let (_, repo) = split_orgrepo(orgrepo)?;
        let key = Self::forked_cache_key(repo);
        if let Ok(Some(cached)) = self.store.get(&key) {
            return Ok(cached == "Y");
        }
        let login = self.authenticated_login()?;
        let forked = self.runtime.block_on(async {
            match self.client.repos(&login, repo).get().await {
                Ok(_) => Ok(true),
                Err(octocrab::Error::GitHub { .. }) => Ok(false),
                Err(e) => Err(transient(e)),
            }
        })?;
        let _ = self.store.set(&key, if forked { "Y" } else { "N" });
        Ok(forked)
    }

    fn is_archived(&self, orgrepo: &str) -> Result<bool, HostingError> {
        let (owner, repo) = split_orgrepo(orgrepo)?;
        self.runtime.block_on(async {
            self.client
                .repos(owner, repo)
                .get()
                .await
                .map(|r| r.archived.unwrap_or(false))
                .map_err(transient)
        })
    }

    #[instrument(skip(self))]
    fn fork(&self, orgrepo: &str) -> Result<(), HostingError> {
        let (owner, repo) = split_orgrepo(orgrepo)?;
        self.runtime.block_on(async {
            self.client
                .repos(owner, repo)
                .create_fork()
                .send()
                .await
                .map(|_| ())
                .map_err(transient)
        })?;
        let _ = self.store.set(&Self::forked_cache_key(repo), "Y");
        Ok(())
    }

    fn checkout(&self, repo: &str, target: &Path) -> Result<(), HostingError> {
        let login = self.authenticated_login()?;
        let clone_target = target.join(repo);
        if clone_target.exists() {
            return Ok(());
        }
        let url = format!("git@github.com:{login}/{repo}.git");
        let status = Command::new("git")
            .args(["clone", &url, &clone_target.display().to_string()])
            .status()
            .map_err(|e| HostingError::Git(e.to_string()))?;
        if !status.success() {
            return Err(HostingError::Git(format!("git clone of {url} failed")));
        }
        info!(repo, "cloned fork");
        Ok(())
    }

    fn issues_allowed(&self, reponame: &str) -> Result<bool, HostingError> {
        let login = self.authenticated_login()?;
        self.runtime.block_on(async {
            let mut repo = self
                .client
                .repos(&login, reponame)
                .get()
                .await
                .map_err(transient)?;
            while let Some(parent) = repo.parent.take() {
                if parent.archived.unwrap_or(false) {
                    break;
                }
                repo = *parent;
            }
            Ok(repo.has_issues.unwrap_or(true))
        })
    }

    fn create_pr(
        &self,
        reponame: &str,
        title: &str,
        body: &str,
        from_branch: &str,
        to_branch: &str,
    ) -> Result<RepoHandle, HostingError> {
        let login = self.authenticated_login()?;
        self.runtime.block_on(async {
            self.client
                .pulls(&login, reponame)
                .create(title, from_branch, to_branch)
                .body(body)
                .send()
                .await
                .map(|pr| RepoHandle {
                    number: pr.number,
                    html_url: pr
                        .html_url
                        .map(|u| u.to_string())
                        .unwrap_or_default(),
                })
                .map_err(transient)
        })
    }

    fn create_issue(&self, reponame: &str, title: &str, body: &str) -> Result<RepoHandle, HostingError> {
        let login = self.authenticated_login()?;
        self.runtime.block_on(async {
            self.client
                .issues(&login, reponame)
                .create(title)
                .body(body)
                .send()
                .await
                .map(|issue| RepoHandle {
                    number: issue.number,
                    html_url: issue.html_url.to_string(),
                })
                .map_err(transient)
        })
    }
}

fn split_orgrepo(orgrepo: &str) -> Result<(&str, &str), HostingError> {
    orgrepo
        .split_once('/')
        .ok_or_else(|| HostingError::Transient(format!("{orgrepo:?} is not an org/repo pair")))
}

#[cfg(test)]
#[path = "hosting_tests.rs"]
mod tests;
