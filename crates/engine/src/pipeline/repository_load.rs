// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `repository_load`: scan source feeds for a usable candidate, fork and
//! mark it, and hand off to `repository_checkout`. Grounded on
//! `_addrepo.py`'s `interactive_add_one_new_repo`.

use std::collections::HashMap;

use tracing::info;
use typofix_core::Task;

use super::{pipeline_err, BLACKLISTED_ORGUSERS};
use crate::error::EngineError;
use crate::handlers::Context;

pub fn handle(ctx: Context, _task: Task) -> Result<(), EngineError> {
    let mut forked: HashMap<String, bool> = ctx
        .services
        .store
        .get_json("repository_forked", HashMap::new())?;

    let candidates = ctx.services.source_feed.candidates().map_err(pipeline_err)?;

    for orgrepo in candidates {
        let Some((org, orig_repo)) = orgrepo.split_once('/') else {
            continue;
        };
        if forked.contains_key(orig_repo) {
            continue;
        }
        if BLACKLISTED_ORGUSERS.contains(&org) {
            continue;
        }

        let resolved = ctx
            .services
            .hosting
            .resolve_true_orgrepo(&orgrepo)
            .map_err(pipeline_err)?;
        let repo = resolved
            .rsplit('/')
            .next()
            .unwrap_or(orig_repo)
            .to_string();
        if forked.contains_key(&repo) {
            continue;
        }

        ctx.interaction().send(&format!("Checking {resolved}"));
        if ctx.services.hosting.check_forked(&resolved).map_err(pipeline_err)? {
            mark_forked(&mut forked, orig_repo, &repo);
            ctx.services.store.set_json("repository_forked", &forked)?;
            continue;
        }

        ctx.interaction().send(&format!("Forking {resolved}"));
        ctx.services.hosting.fork(&resolved).map_err(pipeline_err)?;

        if ctx.services.hosting.is_archived(&resolved).map_err(pipeline_err)? {
            ctx.interaction().send(&format!("Skipping archived repo {resolved}"));
            mark_forked(&mut forked, orig_repo, &repo);
            ctx.services.store.set_json("repository_forked", &forked)?;
            continue;
        }

        mark_forked(&mut forked, orig_repo, &repo);
        ctx.services.store.set_json("repository_forked", &forked)?;
        info!(repo = %repo, "forked and queued for checkout");
        ctx.controller.add(Task::RepositoryCheckout { reponame: repo });
        return Ok(());
    }

    ctx.controller.add(Task::RepositoryEnd);
    Ok(())
}

fn mark_forked(forked: &mut HashMap<String, bool>, orig_repo: &str, repo: &str) {
    forked.insert(orig_repo.to_string(), true);
    forked.insert(repo.to_string(), true);
}

#[cfg(test)]
#[path = "repository_load_tests.rs"]
mod tests;
