// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `repository_end`: the `NoCandidate` terminal — source feeds are
//! exhausted for this pass. Not a failure; hands off to `prompt_quit` so
//! the operator decides whether to keep waiting or stop.

use typofix_core::Task;

use crate::error::EngineError;
use crate::handlers::Context;

pub fn handle(ctx: Context, _task: Task) -> Result<(), EngineError> {
    ctx.interaction()
        .send("No further candidate repositories found.");
    ctx.controller.add(Task::PromptQuit);
    Ok(())
}
