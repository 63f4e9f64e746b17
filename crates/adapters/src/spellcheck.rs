// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess-based [`SpellChecker`]: invokes an external spelling
//! analyzer executable against a checked-out repository and parses its
//! JSON report. Kept as an out-of-process boundary per the system's
//! design notes rather than linking a spell-checking library in.

use std::path::Path;
use std::process::Command;

use thiserror::Error;
use typofix_core::{SpellCheckError, SpellCheckReport, SpellChecker};

/// Minimum tolerated `--version` output, warned about (not enforced) at
/// startup. Grounded on `_process.py`'s `validate_versions`.
pub const MINIMUM_VERSION: &str = "0.8.1";

pub struct SubprocessSpellChecker {
    executable: String,
}

impl SubprocessSpellChecker {
    pub fn new(executable: impl Into<String>) -> Self {
        SubprocessSpellChecker {
            executable: executable.into(),
        }
    }

    /// Probe the executable's reported version, for the CLI's `test`
    /// subcommand. Returns the raw `--version` output; callers compare
    /// it against [`MINIMUM_VERSION`] themselves.
    pub fn probe_version(&self) -> Result<String, ProbeError> {
        let output = Command::new(&self.executable)
            .arg("--version")
            .output()
            .map_err(|e| ProbeError(self.executable.clone(), e.to_string()))?;
        if !output.status.success() {
            return Err(ProbeError(
                self.executable.clone(),
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[derive(Debug, Error)]
#[error("failed to probe spelling analyzer {0:?}: {1}")]
pub struct ProbeError(String, String);

impl SpellChecker for SubprocessSpellChecker {
    fn check(&self, repo_dir: &Path) -> Result<SpellCheckReport, SpellCheckError> {
        let output = Command::new(&self.executable)
            .arg("--json")
            .arg(repo_dir)
            .output()
            .map_err(|e| SpellCheckError::ToolMissing(format!("{}: {e}", self.executable)))?;
        if !output.status.success() {
            return Err(SpellCheckError::AnalyzerFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }
        serde_json::from_slice(&output.stdout)
            .map_err(|e| SpellCheckError::ReportFormat(e.to_string()))
    }
}

#[cfg(test)]
#[path = "spellcheck_tests.rs"]
mod tests;
