// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! typofix-engine: the priority Input Queue, Worker Pool, Controller,
//! Handler Registry, Workload Reconciler, and the per-repository
//! pipeline that implements the task handlers.

pub mod controller;
pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod pool;
pub mod queue;
pub mod reconciler;
pub mod services;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use controller::Controller;
pub use error::{EngineError, HandlerError, PoolError, QueueError};
pub use handlers::{Context, HandlerRegistry, Runner};
pub use pool::{WorkerPool, DEFAULT_WORKERS};
pub use queue::InputQueue;
pub use reconciler::{reconcile, MAX_BUFFER_REPOS};
pub use services::Services;
