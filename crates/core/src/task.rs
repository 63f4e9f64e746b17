// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The closed set of task kinds the dispatch engine routes between the
//! input queue and the worker pool.

use serde::{Deserialize, Serialize};

/// A unit of work routed by the Controller to either the Input Queue
/// (interactive) or the Worker Pool (background).
///
/// Internally tagged on `name`, so the wire shape is indistinguishable
/// from the open JSON-map representation described by the system this
/// crate implements: `{"name": "...", ...payload fields}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Task {
    RepositoryLoad,
    RepositoryEnd,
    RepositoryCheckout { reponame: String },
    RepositorySummary { reponame: String },
    CollectNonwords { reponame: String },
    Submit { reponame: String },
    Cleanup { reponame: String },
    PromptQuit,
    NonwordUpdate,
    WaitThreadpool,
    ForceQuit,
}

impl Task {
    /// Handler lookup name, matching the `name` tag on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Task::RepositoryLoad => "repository_load",
            Task::RepositoryEnd => "repository_end",
            Task::RepositoryCheckout { .. } => "repository_checkout",
            Task::RepositorySummary { .. } => "repository_summary",
            Task::CollectNonwords { .. } => "collect_nonwords",
            Task::Submit { .. } => "submit",
            Task::Cleanup { .. } => "cleanup",
            Task::PromptQuit => "prompt_quit",
            Task::NonwordUpdate => "nonword_update",
            Task::WaitThreadpool => "wait_threadpool",
            Task::ForceQuit => "force_quit",
        }
    }

    /// `true` if this task belongs on the Input Queue, `false` if it
    /// belongs on the Worker Pool.
    pub fn interactive(&self) -> bool {
        !matches!(
            self,
            Task::RepositoryCheckout { .. }
                | Task::RepositorySummary { .. }
                | Task::NonwordUpdate
        )
    }

    /// Priority for interactive tasks (smaller is more urgent). Only
    /// meaningful when [`Task::interactive`] is `true`; background tasks
    /// carry no priority since the Worker Pool has no ordering guarantee.
    pub fn priority(&self) -> Option<i64> {
        match self {
            Task::RepositoryLoad => Some(5),
            Task::RepositoryEnd => Some(5),
            Task::CollectNonwords { .. } => Some(20),
            Task::Submit { .. } => Some(50),
            Task::Cleanup { .. } => Some(10),
            Task::PromptQuit => Some(10),
            Task::WaitThreadpool => Some(999),
            Task::ForceQuit => Some(1000),
            Task::RepositoryCheckout { .. } | Task::RepositorySummary { .. } | Task::NonwordUpdate => {
                None
            }
        }
    }

    /// The repository name carried by this task's payload, if any.
    pub fn reponame(&self) -> Option<&str> {
        match self {
            Task::RepositoryCheckout { reponame }
            | Task::RepositorySummary { reponame }
            | Task::CollectNonwords { reponame }
            | Task::Submit { reponame }
            | Task::Cleanup { reponame } => Some(reponame),
            _ => None,
        }
    }

    pub fn wait_threadpool() -> Task {
        Task::WaitThreadpool
    }

    pub fn force_quit() -> Task {
        Task::ForceQuit
    }
}

crate::simple_display! {
    Task {
        RepositoryLoad => "repository_load",
        RepositoryEnd => "repository_end",
        RepositoryCheckout(..) => "repository_checkout",
        RepositorySummary(..) => "repository_summary",
        CollectNonwords(..) => "collect_nonwords",
        Submit(..) => "submit",
        Cleanup(..) => "cleanup",
        PromptQuit => "prompt_quit",
        NonwordUpdate => "nonword_update",
        WaitThreadpool => "wait_threadpool",
        ForceQuit => "force_quit",
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
