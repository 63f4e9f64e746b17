// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wait_threadpool`: the quiescence anchor. Re-enqueues itself at
//! priority 999 whenever a higher-priority task arrives, quits once the
//! worker pool and queue are both empty, and otherwise blocks on the
//! shared condition variable for up to 60s. Grounded on
//! `_multiworker.py`'s `wait_threadpool`.

use std::time::Duration;

use typofix_core::Task;

use crate::error::EngineError;
use crate::handlers::Context;

const QUIESCENCE_WAIT: Duration = Duration::from_secs(60);

pub fn handle(ctx: Context, _task: Task) -> Result<(), EngineError> {
    loop {
        let tasks_empty = ctx.controller.tasks_empty();
        if let Some(top) = ctx.controller.peek_input() {
            if top.priority().is_some_and(|p| p < 999) {
                ctx.controller.add(Task::WaitThreadpool);
                return Ok(());
            }
        }
        if tasks_empty {
            ctx.interaction()
                .send("All tasks complete and no new input - quitting.");
            ctx.controller.quit();
            return Ok(());
        }
        ctx.controller.wait(QUIESCENCE_WAIT);
    }
}

#[cfg(test)]
#[path = "wait_threadpool_tests.rs"]
mod tests;
