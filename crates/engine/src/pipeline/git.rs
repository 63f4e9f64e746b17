// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thin wrapper over the local `git` binary for the plumbing the
//! pipeline needs directly (staging a correction, and the non-word
//! dataset's commit/pull/push cycle) rather than through the hosting
//! API. Grounded on `_nonword.py` and `_processrepo.py`'s direct
//! `plumbum`-driven `git` invocations.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("git {args} (in {dir}) failed: {message}")]
pub struct GitError {
    args: String,
    dir: String,
    message: String,
}

fn run(repo_dir: &Path, args: &[&str]) -> Result<String, GitError> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .map_err(|e| GitError {
            args: args.join(" "),
            dir: repo_dir.display().to_string(),
            message: e.to_string(),
        })?;
    if !output.status.success() {
        return Err(GitError {
            args: args.join(" "),
            dir: repo_dir.display().to_string(),
            message: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

pub fn add(repo_dir: &Path, relpath: &str) -> Result<(), GitError> {
    run(repo_dir, &["add", relpath]).map(|_| ())
}

pub fn commit(repo_dir: &Path, message: &str) -> Result<(), GitError> {
    run(repo_dir, &["commit", "-m", message]).map(|_| ())
}

pub fn pull(repo_dir: &Path) -> Result<(), GitError> {
    run(repo_dir, &["pull", "--no-edit"]).map(|_| ())
}

pub fn push(repo_dir: &Path, from_branch: &str, to_branch: &str) -> Result<(), GitError> {
    let refspec = format!("{to_branch}:{from_branch}");
    run(repo_dir, &["push", "origin", &refspec]).map(|_| ())
}

pub fn diff(repo_dir: &Path, pathspec: &str) -> Result<String, GitError> {
    run(repo_dir, &["diff", pathspec])
}

/// Count lines in a `git diff` that add content: lines starting with a
/// single `+` (not the `+++` file-header marker).
pub fn count_added_lines(diff_output: &str) -> usize {
    diff_output
        .lines()
        .filter(|line| {
            let mut chars = line.chars();
            matches!(chars.next(), Some('+')) && chars.next().is_some_and(|c| c != '+')
        })
        .count()
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
