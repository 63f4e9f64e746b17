// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `submit`: if a correction was staged for this repository, commit it
//! and open a pull request. Grounded on the commit/PR tail of
//! `_processrepo.py`'s `fix_word`/`add_repo_save` flow.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};

use typofix_core::{RepoSave, Task};

use super::git;
use crate::error::EngineError;
use crate::handlers::Context;

static BRANCH_COUNTER: AtomicU32 = AtomicU32::new(0);

pub fn handle(ctx: Context, task: Task) -> Result<(), EngineError> {
    let reponame = task
        .reponame()
        .expect("submit task carries a reponame")
        .to_string();

    let saves: HashMap<String, RepoSave> =
        ctx.services.store.get_json("repository_saves", HashMap::new())?;

    if let Some(save) = saves.get(&reponame) {
        submit_correction(&ctx, &reponame, save).map_err(super::pipeline_err)?;
    }

    ctx.controller.add(Task::Cleanup { reponame });
    Ok(())
}

fn submit_correction(ctx: &Context, reponame: &str, save: &RepoSave) -> Result<(), git::GitError> {
    let repodir = Path::new(&save.repodir);
    let message = format!("Fix typo: {} -> {}", save.del_word, save.add_word);
    git::commit(repodir, &message)?;

    let suffix = format!(
        "{}_{}",
        std::process::id(),
        BRANCH_COUNTER.fetch_add(1, Ordering::SeqCst)
    );
    let to_branch = "main";
    let from_branch = format!("typofix_{suffix}");
    git::push(repodir, &from_branch, to_branch)?;

    let title = format!("Fix typo: {} -> {}", save.del_word, save.add_word);
    match ctx
        .services
        .hosting
        .create_pr(reponame, &title, &title, &from_branch, to_branch)
    {
        Ok(handle) => {
            ctx.interaction()
                .send(&format!("Created PR #{} view at {}", handle.number, handle.html_url));
        }
        Err(e) => {
            ctx.interaction().send(&format!("Failed to open PR: {e}"));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
