// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The per-repository pipeline (C9): the task graph's handler
//! implementations, registered once by the Session Driver before
//! `Controller::run`.
//!
//! `repository_load → repository_checkout → repository_summary →
//! collect_nonwords → submit → cleanup → prompt_quit`, with
//! `wait_threadpool`/`force_quit` as the anchor tasks and
//! `nonword_update` as the background non-word upstream push.

mod checkout;
mod cleanup;
mod collect_nonwords;
mod git;
mod nonword_update;
mod nonwords_dataset;
mod prompt_quit;
mod repository_end;
mod repository_load;
mod submit;
mod summary;
mod wait_threadpool;

use crate::error::EngineError;
use crate::handlers::HandlerRegistry;

/// Lift any external-collaborator error into the opaque
/// [`EngineError::Pipeline`] variant.
pub(crate) fn pipeline_err(e: impl std::error::Error + Send + Sync + 'static) -> EngineError {
    EngineError::Pipeline(Box::new(e))
}

/// Organizations/users whose repositories are never forked, regardless
/// of source-feed mentions.
pub(crate) const BLACKLISTED_ORGUSERS: &[&str] = &["angvp"];

/// Register every pipeline handler under its task name.
pub fn register(registry: &mut HandlerRegistry) {
    registry.register("repository_load", repository_load::handle);
    registry.register("repository_end", repository_end::handle);
    registry.register("repository_checkout", checkout::handle);
    registry.register("repository_summary", summary::handle);
    registry.register("collect_nonwords", collect_nonwords::handle);
    registry.register("submit", submit::handle);
    registry.register("cleanup", cleanup::handle);
    registry.register("prompt_quit", prompt_quit::handle);
    registry.register("nonword_update", nonword_update::handle);
    registry.register("wait_threadpool", wait_threadpool::handle);
    registry.register("force_quit", |ctx, _task| {
        ctx.controller.quit();
        Ok(())
    });
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
