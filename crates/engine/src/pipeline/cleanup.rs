// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cleanup`: remove the repository's bookkeeping entries and working
//! directory. Grounded on `_cleanup.py`'s `remove_repo_for`.

use std::collections::HashMap;
use std::fs;

use tracing::warn;
use typofix_core::{RepoSave, Task};

use crate::error::EngineError;
use crate::handlers::Context;

pub fn handle(ctx: Context, task: Task) -> Result<(), EngineError> {
    let reponame = task
        .reponame()
        .expect("cleanup task carries a reponame")
        .to_string();

    let mut repository_map: HashMap<String, String> =
        ctx.services.store.get_json("repository_map", HashMap::new())?;
    let repodir = repository_map.remove(&reponame);
    ctx.services.store.set_json("repository_map", &repository_map)?;

    let mut saves: HashMap<String, RepoSave> =
        ctx.services.store.get_json("repository_saves", HashMap::new())?;
    saves.remove(&reponame);
    ctx.services.store.set_json("repository_saves", &saves)?;

    if let Some(repodir) = repodir {
        if let Err(e) = fs::remove_dir_all(&repodir) {
            warn!(repo = %reponame, dir = %repodir, error = %e, "failed to remove working directory");
        }
    }

    ctx.controller.add(Task::PromptQuit);
    Ok(())
}
