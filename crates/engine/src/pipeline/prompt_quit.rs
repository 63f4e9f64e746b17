// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `prompt_quit`: ask the operator whether to stop or keep going.
//! Grounded on `_multiworker.py`'s `prompt_quit`.

use typofix_core::Task;

use crate::error::EngineError;
use crate::handlers::Context;

pub fn handle(ctx: Context, _task: Task) -> Result<(), EngineError> {
    let quit = ctx
        .interaction()
        .get_confirmation("Do you want to quit?", true)
        .map_err(super::pipeline_err)?;
    if quit {
        ctx.controller.quit();
    } else {
        ctx.controller.add(Task::RepositoryLoad);
    }
    Ok(())
}
