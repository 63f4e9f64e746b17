// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::controller::Controller;
use crate::handlers::HandlerRegistry;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;
use typofix_core::ProgressRegistry;

fn test_context(handlers: Arc<HandlerRegistry>) -> (Context, Arc<ProgressRegistry>) {
    let progress = Arc::new(ProgressRegistry::new());
    let services = crate::test_support::fake_services();
    let controller = Controller::new(
        Arc::clone(&handlers),
        Arc::clone(&services),
        std::env::temp_dir(),
        Arc::clone(&progress),
    );
    (Context::new(controller, None, services), progress)
}

fn task(name: &str) -> Task {
    Task::Cleanup {
        reponame: name.to_string(),
    }
}

#[test]
fn drain_and_save_returns_only_unrun_tasks() {
    // The one worker thread blocks on `proceed_rx` inside the handler for
    // the first submitted task, letting the test deterministically drain
    // and submit a second task before the worker is released.
    let (started_tx, started_rx) = mpsc::channel::<()>();
    let (proceed_tx, proceed_rx) = mpsc::channel::<()>();
    let proceed_rx = std::sync::Mutex::new(proceed_rx);
    let ran = Arc::new(AtomicUsize::new(0));

    let mut registry = HandlerRegistry::new();
    {
        let ran = Arc::clone(&ran);
        let started_tx = started_tx.clone();
        registry.register("cleanup", move |_ctx, _task| {
            started_tx.send(()).ok();
            proceed_rx.lock().unwrap().recv().ok();
            ran.fetch_add(1, AtomicOrdering::SeqCst);
            Ok(())
        });
    }
    let handlers = Arc::new(registry);
    let (context, progress) = test_context(Arc::clone(&handlers));
    let pool = WorkerPool::new(handlers, context, progress, 1);

    pool.submit(task("one")).unwrap();
    started_rx.recv_timeout(Duration::from_secs(5)).unwrap();

    pool.drain();
    // This submission arrives after draining started, so it must be
    // captured into `saved` rather than executed.
    pool.submit(task("two")).unwrap();

    proceed_tx.send(()).unwrap();
    let saved = pool.save();

    assert_eq!(ran.load(AtomicOrdering::SeqCst), 1);
    assert_eq!(saved, vec![task("two")]);
}

#[test]
fn empty_reports_true_once_all_tasks_complete() {
    let mut registry = HandlerRegistry::new();
    registry.register("cleanup", |_ctx, _task| Ok(()));
    let handlers = Arc::new(registry);
    let (context, progress) = test_context(Arc::clone(&handlers));
    let pool = WorkerPool::new(handlers, context, progress, 2);
    pool.submit(task("a/b")).unwrap();
    let mut waited = 0;
    while !pool.empty() && waited < 100 {
        std::thread::sleep(Duration::from_millis(10));
        waited += 1;
    }
    assert!(pool.empty());
    let saved = pool.save();
    assert!(saved.is_empty());
}
