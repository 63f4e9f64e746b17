// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use typofix_core::{ProgressRegistry, Task};

use super::*;
use crate::controller::Controller;
use crate::handlers::HandlerRegistry;
use crate::test_support::{fake_services, NullInteraction};

#[test]
fn quits_when_queue_and_pool_are_both_empty() {
    let handlers = Arc::new(HandlerRegistry::new());
    let controller = Controller::new(
        handlers,
        fake_services(),
        std::env::temp_dir(),
        Arc::new(ProgressRegistry::new()),
    );
    let interaction: Arc<dyn typofix_core::Interaction> = Arc::new(NullInteraction);
    let ctx = Context::new(Arc::clone(&controller), Some(interaction), fake_services());

    handle(ctx, Task::WaitThreadpool).unwrap();
}

#[test]
fn defers_to_a_higher_priority_task_already_queued() {
    let handlers = Arc::new(HandlerRegistry::new());
    let controller = Controller::new(
        handlers,
        fake_services(),
        std::env::temp_dir(),
        Arc::new(ProgressRegistry::new()),
    );
    controller.add(Task::RepositoryLoad);

    let interaction: Arc<dyn typofix_core::Interaction> = Arc::new(NullInteraction);
    let ctx = Context::new(Arc::clone(&controller), Some(interaction), fake_services());

    handle(ctx, Task::WaitThreadpool).unwrap();

    // The higher-priority task is untouched at the front; WaitThreadpool
    // was re-enqueued behind it rather than dropped.
    assert_eq!(controller.peek_input(), Some(Task::RepositoryLoad));
}
