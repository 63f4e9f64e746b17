// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Controller (C5): routes tasks between the Input Queue and the
//! Worker Pool, owns the shared condition variable, and serializes
//! unfinished work on shutdown.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};

use tracing::{info, instrument, warn};
use typofix_core::{progress_key, Interaction, ProgressRegistry, Task};

use crate::error::EngineError;
use crate::handlers::{Context, HandlerRegistry};
use crate::pool::{WorkerPool, DEFAULT_WORKERS};
use crate::queue::InputQueue;
use crate::services::Services;

pub struct Controller {
    queue: Mutex<InputQueue>,
    pool: Mutex<Option<WorkerPool>>,
    handlers: Arc<HandlerRegistry>,
    services: Arc<Services>,
    running: AtomicBool,
    cond: Condvar,
    pub target: PathBuf,
    progress: Arc<ProgressRegistry>,
}

impl Controller {
    /// Construct a controller with no pool started yet. Call
    /// [`Controller::run`] to enter the pool and begin the loop.
    pub fn new(
        handlers: Arc<HandlerRegistry>,
        services: Arc<Services>,
        target: PathBuf,
        progress: Arc<ProgressRegistry>,
    ) -> Arc<Self> {
        Arc::new(Controller {
            queue: Mutex::new(InputQueue::new()),
            pool: Mutex::new(None),
            handlers,
            services,
            running: AtomicBool::new(true),
            cond: Condvar::new(),
            target,
            progress,
        })
    }

    /// Route `task` to the Input Queue or Worker Pool by its
    /// `interactive` flag, publish progress, and notify `cond`.
    #[instrument(skip(self))]
    pub fn add(self: &Arc<Self>, task: Task) {
        if task.interactive() {
            let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
            queue.add(task);
            self.progress.add(progress_key!["tasks"], format!("{queue:?}"));
        } else {
            let pool = self.pool.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(pool) = pool.as_ref() {
                if let Err(e) = pool.submit(task) {
                    warn!(error = %e, "failed to submit background task");
                }
            } else {
                warn!("controller.add called for a background task before the pool started");
            }
        }
        // Always notify, even though only wait_threadpool is waiting: a
        // cheap broadcast is simpler than tracking whether anyone cares.
        self.cond.notify_all();
    }

    pub fn peek_input(&self) -> Option<Task> {
        let queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
        queue.peek().ok().cloned()
    }

    pub fn tasks_empty(&self) -> bool {
        let pool = self.pool.lock().unwrap_or_else(|e| e.into_inner());
        pool.as_ref().map(WorkerPool::empty).unwrap_or(true)
    }

    /// Block on the shared condition variable for up to `timeout`. Used
    /// by the `wait_threadpool` handler's quiescence retry loop.
    pub fn wait(&self, timeout: std::time::Duration) {
        let guard = self.queue.lock().unwrap_or_else(|e| e.into_inner());
        let _ = self.cond.wait_timeout(guard, timeout);
    }

    pub fn quit(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.cond.notify_all();
    }

    fn running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the pool (if started) and return the concatenation of the
    /// queue's and pool's saved tasks — the persistable workload.
    pub fn save(self: &Arc<Self>) -> Vec<Task> {
        let mut result = {
            let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
            queue.save()
        };
        let pool = self.pool.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(pool) = pool {
            result.extend(pool.save());
        }
        result
    }

    /// Start the pool, loop while `running` popping interactive tasks,
    /// and invoke their handler; on exit (quit or error), save and
    /// return the persistable workload alongside any terminal error.
    ///
    /// A `HandlerException` terminates the session but the workload is
    /// always saved first, so the returned `Vec<Task>` is valid and
    /// persistable whether or not the `Result` is an `Err`.
    #[instrument(skip_all)]
    pub fn run(self: &Arc<Self>, interaction: Arc<dyn Interaction>) -> (Vec<Task>, Result<(), EngineError>) {
        self.run_with_workers(interaction, DEFAULT_WORKERS)
    }

    pub fn run_with_workers(
        self: &Arc<Self>,
        interaction: Arc<dyn Interaction>,
        worker_count: usize,
    ) -> (Vec<Task>, Result<(), EngineError>) {
        {
            let pool_context = Context::new(Arc::clone(self), None, Arc::clone(&self.services));
            let pool = WorkerPool::new(
                Arc::clone(&self.handlers),
                pool_context,
                Arc::clone(&self.progress),
                worker_count,
            );
            *self.pool.lock().unwrap_or_else(|e| e.into_inner()) = Some(pool);
        }

        let run_result = self.run_loop(interaction);
        let saved = self.save();
        (saved, run_result)
    }

    fn run_loop(self: &Arc<Self>, interaction: Arc<dyn Interaction>) -> Result<(), EngineError> {
        while self.running() {
            self.handle_input(&interaction)?;
        }
        Ok(())
    }

    fn handle_input(self: &Arc<Self>, interaction: &Arc<dyn Interaction>) -> Result<(), EngineError> {
        let task = {
            let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
            let task = queue.pop()?;
            self.progress
                .add(progress_key!["tasks"], format!("Pending {queue:?}"));
            task
        };
        self.progress
            .add(progress_key!["running"], format!("Running {task}"));
        let runner = self
            .handlers
            .lookup(&task)
            .ok_or_else(|| crate::error::HandlerError::NotFound(task.name().to_string()))?;
        let context = Context::new(
            Arc::clone(self),
            Some(Arc::clone(interaction)),
            Arc::clone(&self.services),
        );
        info!(task = %task, "handling interactive task");
        runner(context, task)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
