// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-module error types, composed into [`EngineError`] for anything
//! crossing the Controller boundary.

use thiserror::Error;
use typofix_core::StoreError;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("input queue is empty")]
    Empty,
}

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("cannot submit a task: the worker pool has already stopped")]
    Closed,
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("no handler registered for task {0:?}")]
    NotFound(String),
}

/// Error that may propagate out of `Controller::run`, i.e. an uncaught
/// failure from an interactive handler. Workers never propagate errors
/// this way — they log and swallow, per the system's failure semantics.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Handler(#[from] HandlerError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("pipeline step failed: {0}")]
    Pipeline(#[source] Box<dyn std::error::Error + Send + Sync>),
}
