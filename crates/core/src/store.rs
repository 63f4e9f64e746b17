// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable key/value store for cross-run state and inter-task handoff.
//!
//! Backed by a single embedded `config(key, value)` table. A JSON overlay
//! (`get_json`/`set_json`) sits on top of the plain string accessors.

use std::cell::Cell;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("worker threads are prevented from store access")]
    WorkerAccessDenied,

    #[error("store backend error: {0}")]
    Backend(#[from] rusqlite::Error),

    #[error("stored value for key {key:?} is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("value failed to serialize to JSON: {0}")]
    Serialize(#[source] serde_json::Error),
}

thread_local! {
    static WORKER_THREAD: Cell<bool> = const { Cell::new(false) };
}

/// Mark the current thread as a worker thread. Subsequent [`Store`] calls
/// from this thread fail with [`StoreError::WorkerAccessDenied`] whenever
/// `guard_workers` is set on the store.
pub fn mark_current_thread_as_worker() {
    WORKER_THREAD.with(|flag| flag.set(true));
}

fn current_thread_is_worker() -> bool {
    WORKER_THREAD.with(|flag| flag.get())
}

/// Durable string-keyed store, one row per key in the `config` table.
///
/// `rusqlite::Connection` isn't `Sync`, so access is serialized behind a
/// mutex; this lets a `Store` be shared via `Arc` across the driver
/// thread and (when the worker guard is disabled) worker threads alike.
pub struct Store {
    conn: Mutex<Connection>,
    guard_workers: bool,
}

impl Store {
    /// Open (creating if necessary) a store at `path`, with the worker
    /// thread guard enabled.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Self::open_with_guard(path, true)
    }

    pub fn open_with_guard(path: &Path, guard_workers: bool) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS config (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )?;
        Ok(Store {
            conn: Mutex::new(conn),
            guard_workers,
        })
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS config (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )?;
        Ok(Store {
            conn: Mutex::new(conn),
            guard_workers: false,
        })
    }

    fn check_guard(&self) -> Result<(), StoreError> {
        if self.guard_workers && current_thread_is_worker() {
            return Err(StoreError::WorkerAccessDenied);
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_guard()?;
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        let mut stmt = conn.prepare("SELECT value FROM config WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_guard()?;
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn get_json<T: DeserializeOwned>(
        &self,
        key: &str,
        default: T,
    ) -> Result<T, StoreError> {
        match self.get(key)? {
            None => Ok(default),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(StoreError::Serialize)?;
        self.set(key, &raw)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
