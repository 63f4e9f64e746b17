// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory, process-wide progress status lines for operator visibility.
//!
//! No persistence; purely observable. The Controller publishes "pending"
//! and "running" state here, and the Worker Pool publishes per-worker
//! "Starting job …" lines.

use std::collections::HashMap;
use std::sync::Mutex;

/// Opaque key identifying a progress slot, e.g. `("tasks",)` or
/// `("running", "owner/repo")`.
pub type ProgressKey = Vec<String>;

/// Build a [`ProgressKey`] from string-like parts, e.g. `progress_key!["running", reponame]`.
#[macro_export]
macro_rules! progress_key {
    ($($part:expr),+ $(,)?) => {
        vec![$($part.to_string()),+]
    };
}

#[derive(Default)]
pub struct ProgressRegistry {
    entries: Mutex<HashMap<ProgressKey, String>>,
}

impl ProgressRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, key: impl Into<ProgressKey>, text: impl Into<String>) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.into(), text.into());
    }

    pub fn clear(&self, key: impl Into<ProgressKey>) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(&key.into());
    }

    /// Sorted snapshot of all current status lines.
    pub fn snapshot(&self) -> Vec<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let mut values: Vec<String> = entries.values().cloned().collect();
        values.sort();
        values
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
