// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `repository_checkout` (background): clone the fork, run the external
//! spelling analyzer, decorate the report with suggestions, and persist
//! `spelling.json`. Grounded on `_addrepo.py`'s `spelling_check` and
//! `update_json_results`.

use std::fs;

use tracing::info;
use typofix_core::Task;

use super::pipeline_err;
use crate::error::EngineError;
use crate::handlers::Context;

const NO_ISSUES_SENTINEL: &str = "__no_issues__.txt";

pub fn handle(ctx: Context, task: Task) -> Result<(), EngineError> {
    let reponame = task
        .reponame()
        .expect("repository_checkout task carries a reponame")
        .to_string();
    let target = ctx.controller.target.clone();
    let repo_dir = target.join(&reponame);

    ctx.services
        .hosting
        .checkout(&reponame, &target)
        .map_err(pipeline_err)?;

    let mut report = ctx.services.spellchecker.check(&repo_dir).map_err(pipeline_err)?;
    for (word, details) in report.iter_mut() {
        if details.nonword || details.suggestion.is_some() {
            continue;
        }
        if let Some(suggestion) = ctx.services.suggester.suggest(word).map_err(pipeline_err)? {
            if suggestion.is_nonword {
                details.nonword = true;
            } else {
                details.suggestion = Some(suggestion);
            }
        }
    }

    let spelling_path = repo_dir.join("spelling.json");
    let raw = serde_json::to_vec(&report).map_err(|e| pipeline_err(SerializeError(e)))?;
    fs::write(&spelling_path, raw).map_err(|e| pipeline_err(IoError(spelling_path.clone(), e)))?;

    if !ctx.services.hosting.issues_allowed(&reponame).map_err(pipeline_err)? {
        let sentinel_path = repo_dir.join(NO_ISSUES_SENTINEL);
        fs::write(&sentinel_path, "No Issues.\n")
            .map_err(|e| pipeline_err(IoError(sentinel_path, e)))?;
    }

    info!(repo = %reponame, words = report.len(), "spell check complete");
    ctx.controller.add(Task::RepositorySummary { reponame });
    Ok(())
}

#[derive(Debug, thiserror::Error)]
#[error("failed to write {0}: {1}")]
struct IoError(std::path::PathBuf, #[source] std::io::Error);

#[derive(Debug, thiserror::Error)]
#[error("failed to serialize spelling report: {0}")]
struct SerializeError(#[source] serde_json::Error);
