// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The external spelling analyzer, invoked out-of-process. Kept as a
//! subprocess boundary rather than linked in, per the Design Notes.

use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpellCheckError {
    #[error("spelling analyzer tool not found: {0}")]
    ToolMissing(String),

    #[error("spelling analyzer exited with an error: {0}")]
    AnalyzerFailed(String),

    #[error("failed to read or parse spelling.json: {0}")]
    ReportFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WordOccurrence {
    pub category: String,
    pub file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WordDetails {
    pub files: Vec<WordOccurrence>,
    #[serde(default)]
    pub nonword: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<crate::Suggestion>,
}

/// `word -> details`, the shape of `spelling.json`.
pub type SpellCheckReport = BTreeMap<String, WordDetails>;

/// Runs the external spelling analyzer subprocess against a checked-out
/// repository and returns its structured report.
pub trait SpellChecker: Send + Sync {
    fn check(&self, repo_dir: &Path) -> Result<SpellCheckReport, SpellCheckError>;
}
