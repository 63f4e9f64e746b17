// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nonword_update` (background): push the accumulated non-words
//! upstream as a PR. Grounded on `_nonword.py`'s `update_nonwords`.

use std::sync::atomic::{AtomicU32, Ordering};

use tracing::info;
use typofix_core::Task;

use super::nonwords_dataset;
use crate::error::EngineError;
use crate::handlers::Context;

static BRANCH_COUNTER: AtomicU32 = AtomicU32::new(0);

pub fn handle(ctx: Context, _task: Task) -> Result<(), EngineError> {
    let suffix = format!(
        "{}_{}",
        std::process::id(),
        BRANCH_COUNTER.fetch_add(1, Ordering::SeqCst)
    );
    let handle = nonwords_dataset::update_nonwords(
        ctx.services.hosting.as_ref(),
        &ctx.controller.target,
        &ctx.services.nonword_dataset_orgrepo,
        &suffix,
    )?;
    info!(pr = handle.number, url = %handle.html_url, "pushed non-words upstream");
    Ok(())
}
