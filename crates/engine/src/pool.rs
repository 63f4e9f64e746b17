// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Worker Pool (C4): a bounded concurrent executor for
//! non-interactive tasks, with a drain-and-save shutdown protocol.
//!
//! Implemented with `std::thread` plus an `mpsc` job queue rather than
//! an async runtime: spec.md's concurrency model describes "ordinary
//! blocking routines," not cooperative scheduling, so the teacher's
//! `tokio`-based executor pattern is generalized to a synchronous
//! thread pool here (see DESIGN.md).

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tracing::{debug, error};
use typofix_core::{ProgressRegistry, Task};

use crate::error::PoolError;
use crate::handlers::{Context, HandlerRegistry};

pub const DEFAULT_WORKERS: usize = 5;

enum Job {
    Run(Task),
    Shutdown,
}

struct Shared {
    draining: AtomicBool,
    saved: Mutex<Vec<Task>>,
    in_flight: AtomicUsize,
}

/// Handle to the running pool. Cloned into each worker thread.
#[derive(Clone)]
struct WorkerDeps {
    handlers: Arc<HandlerRegistry>,
    context: Context,
    progress: Arc<ProgressRegistry>,
}

pub struct WorkerPool {
    sender: Sender<Job>,
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new(
        handlers: Arc<HandlerRegistry>,
        context: Context,
        progress: Arc<ProgressRegistry>,
        worker_count: usize,
    ) -> Self {
        let (sender, receiver) = mpsc::channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));
        let shared = Arc::new(Shared {
            draining: AtomicBool::new(false),
            saved: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
        });
        let deps = WorkerDeps {
            handlers,
            context,
            progress,
        };

        let mut workers = Vec::with_capacity(worker_count);
        for id in 0..worker_count {
            let receiver = Arc::clone(&receiver);
            let shared = Arc::clone(&shared);
            let deps = deps.clone();
            workers.push(std::thread::spawn(move || {
                worker_loop(id, receiver, shared, deps)
            }));
        }

        WorkerPool {
            sender,
            shared,
            workers,
        }
    }

    /// Submit a task for execution by an idle worker. Submission always
    /// succeeds while the pool is running, even after [`WorkerPool::drain`]
    /// — the worker itself re-checks the draining flag before running
    /// the handler, capturing a late arrival into `saved` instead of
    /// executing it (the invariant the Worker Pool contract guarantees).
    pub fn submit(&self, task: Task) -> Result<(), PoolError> {
        self.shared.in_flight.fetch_add(1, Ordering::SeqCst);
        if self.sender.send(Job::Run(task)).is_err() {
            self.shared.in_flight.fetch_sub(1, Ordering::SeqCst);
            return Err(PoolError::Closed);
        }
        Ok(())
    }

    /// Signal that no future submission should execute.
    pub fn drain(&self) {
        self.shared.draining.store(true, Ordering::SeqCst);
    }

    /// Wait for all in-flight workers to finish.
    pub fn stop(self) {
        for _ in &self.workers {
            let _ = self.sender.send(Job::Shutdown);
        }
        for worker in self.workers {
            let _ = worker.join();
        }
    }

    /// `true` iff every submitted task has completed (or was captured
    /// while draining).
    pub fn empty(&self) -> bool {
        self.shared.in_flight.load(Ordering::SeqCst) == 0
    }

    /// Drain, stop, and return the tasks that arrived too late to run.
    pub fn save(self) -> Vec<Task> {
        self.drain();
        let shared = Arc::clone(&self.shared);
        self.stop();
        Arc::try_unwrap(shared)
            .map(|s| s.saved.into_inner().unwrap_or_else(|e| e.into_inner()))
            .unwrap_or_else(|shared| shared.saved.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }
}

fn worker_loop(
    id: usize,
    receiver: Arc<Mutex<Receiver<Job>>>,
    shared: Arc<Shared>,
    deps: WorkerDeps,
) {
    typofix_core::mark_current_thread_as_worker();
    loop {
        let job = {
            let receiver = receiver.lock().unwrap_or_else(|e| e.into_inner());
            receiver.recv()
        };
        let job = match job {
            Ok(job) => job,
            Err(_) => break,
        };
        match job {
            Job::Shutdown => break,
            Job::Run(task) => {
                if shared.draining.load(Ordering::SeqCst) {
                    shared
                        .saved
                        .lock()
                        .unwrap_or_else(|e| e.into_inner())
                        .push(task);
                    shared.in_flight.fetch_sub(1, Ordering::SeqCst);
                    continue;
                }
                deps.progress
                    .add(vec!["worker".to_string(), id.to_string()], format!("Starting {task}"));
                debug!(worker = id, task = %task, "running task");
                run_one(&deps, task);
                shared.in_flight.fetch_sub(1, Ordering::SeqCst);
                deps.progress.clear(vec!["worker".to_string(), id.to_string()]);
            }
        }
    }
}

fn run_one(deps: &WorkerDeps, task: Task) {
    let name = task.name();
    let runner = match deps.handlers.lookup(&task) {
        Some(runner) => runner,
        None => {
            error!(task = name, "no handler registered");
            return;
        }
    };
    // Worker handler exceptions are logged and swallowed so the pool
    // survives; only interactive handlers propagate to the Controller.
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        runner(deps.context.clone(), task)
    }));
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(task = name, error = %e, "unhandled error"),
        Err(_) => error!(task = name, "worker task panicked"),
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
