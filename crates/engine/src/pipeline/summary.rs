// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `repository_summary` (background): register the repo into
//! `repository_map` and log README excerpts. Grounded on `_summary.py`'s
//! `display_repo_intro`/`display_summary_content`; runs as a background
//! task so excerpts go through `tracing`, not the Interaction Port.

use std::collections::HashMap;
use std::fs;

use tracing::info;
use typofix_core::{first_interesting_lines, Task};

use crate::error::EngineError;
use crate::handlers::Context;

const EXCERPT_LINES: usize = 15;

pub fn handle(ctx: Context, task: Task) -> Result<(), EngineError> {
    let reponame = task
        .reponame()
        .expect("repository_summary task carries a reponame")
        .to_string();
    let repo_dir = ctx.controller.target.join(&reponame);

    let mut repository_map: HashMap<String, String> =
        ctx.services.store.get_json("repository_map", HashMap::new())?;
    repository_map.insert(reponame.clone(), repo_dir.display().to_string());
    ctx.services.store.set_json("repository_map", &repository_map)?;

    if let Ok(entries) = fs::read_dir(&repo_dir) {
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.to_lowercase().starts_with("readme") {
                continue;
            }
            if !entry.path().is_file() {
                continue;
            }
            if let Ok(content) = fs::read_to_string(entry.path()) {
                for line in first_interesting_lines(&content, EXCERPT_LINES) {
                    info!(repo = %reponame, readme = %name, "{line}");
                }
            }
        }
    }

    ctx.controller.add(Task::CollectNonwords { reponame });
    Ok(())
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
