// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The checked-out companion repository that accumulates non-words
//! between upstream pushes. Grounded on `_nonword.py`: `get_unanimous`,
//! `add_non_word`, `get_nonword_count`, `update_nonwords`.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use typofix_core::{HostingApi, RepoHandle};

use super::git;
use crate::error::EngineError;
use crate::pipeline::pipeline_err;

const NONWORDS_FILE: &str = "nonwords.txt";

fn dataset_dir(target: &Path, orgrepo: &str) -> PathBuf {
    let repo = orgrepo.rsplit('/').next().unwrap_or(orgrepo);
    target.join(repo)
}

/// Ensure the dataset repository is forked and checked out locally,
/// returning its working directory.
fn ensure_checked_out(
    hosting: &dyn HostingApi,
    target: &Path,
    orgrepo: &str,
) -> Result<PathBuf, EngineError> {
    let dir = dataset_dir(target, orgrepo);
    if !dir.is_dir() {
        if !hosting.check_forked(orgrepo).map_err(pipeline_err)? {
            hosting.fork(orgrepo).map_err(pipeline_err)?;
        }
        let repo = orgrepo.rsplit('/').next().unwrap_or(orgrepo);
        hosting.checkout(repo, target).map_err(pipeline_err)?;
    }
    Ok(dir)
}

/// Append `word` to the dataset's non-words file.
pub fn add_non_word(
    hosting: &dyn HostingApi,
    target: &Path,
    orgrepo: &str,
    word: &str,
) -> Result<(), EngineError> {
    let dir = ensure_checked_out(hosting, target, orgrepo)?;
    let path = dir.join(NONWORDS_FILE);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| pipeline_err(AppendError(path.clone(), e)))?;
    writeln!(file, "{word}").map_err(|e| pipeline_err(AppendError(path, e)))?;
    Ok(())
}

/// `true` once the uncommitted non-word additions exceed `threshold`
/// lines, counted via `git diff`.
pub fn over_threshold(
    target: &Path,
    orgrepo: &str,
    threshold: usize,
) -> Result<bool, EngineError> {
    let dir = dataset_dir(target, orgrepo);
    let diff = git::diff(&dir, NONWORDS_FILE).map_err(pipeline_err)?;
    Ok(git::count_added_lines(&diff) > threshold)
}

/// Commit the pending non-words, pull upstream, push to a fresh branch,
/// and open a PR. `branch_suffix` should vary per call (the caller
/// supplies it since this module cannot generate randomness).
pub fn update_nonwords(
    hosting: &dyn HostingApi,
    target: &Path,
    orgrepo: &str,
    branch_suffix: &str,
) -> Result<RepoHandle, EngineError> {
    let dir = dataset_dir(target, orgrepo);
    git::add(&dir, NONWORDS_FILE).map_err(pipeline_err)?;
    git::commit(&dir, "update nonwords").map_err(pipeline_err)?;
    git::pull(&dir).map_err(pipeline_err)?;

    let to_branch = "main";
    let from_branch = format!("nonwords_{branch_suffix}");
    git::push(&dir, &from_branch, to_branch).map_err(pipeline_err)?;

    let reponame = orgrepo.rsplit('/').next().unwrap_or(orgrepo);
    hosting
        .create_pr(reponame, "Add nonwords", "Add nonwords", &from_branch, to_branch)
        .map_err(pipeline_err)
}

#[derive(Debug, thiserror::Error)]
#[error("failed to append to {0}: {1}")]
struct AppendError(PathBuf, #[source] std::io::Error);
