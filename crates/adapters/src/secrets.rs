// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loads the GitHub API token. Grounded on `_secrets.py`, which shells
//! out to GNU `pass`; generalized to also accept `GITHUB_API_TOKEN` from
//! the environment, since a CI/daemon deployment has no interactive
//! `pass` keyring to unlock. The environment variable wins when set.

use std::process::Command;

use thiserror::Error;
use which::which;

const ENV_VAR: &str = "GITHUB_API_TOKEN";
const PASS_ENTRY: &str = "github-api-token";

#[derive(Debug, Error)]
pub enum SecretsError {
    #[error("{ENV_VAR} is unset and the `pass` secret manager is not installed")]
    NoBackend,

    #[error("pass show {PASS_ENTRY} failed: {0}")]
    PassFailed(String),

    #[error("pass output for {PASS_ENTRY} is not valid UTF-8")]
    NotUtf8,
}

/// Load the GitHub API token, preferring the environment over `pass`.
pub fn load_api_key() -> Result<String, SecretsError> {
    if let Ok(token) = std::env::var(ENV_VAR) {
        if !token.is_empty() {
            return Ok(token);
        }
    }
    load_from_pass()
}

fn load_from_pass() -> Result<String, SecretsError> {
    let pass = which("pass").map_err(|_| SecretsError::NoBackend)?;
    let output = Command::new(pass)
        .args(["show", PASS_ENTRY])
        .output()
        .map_err(|e| SecretsError::PassFailed(e.to_string()))?;
    if !output.status.success() {
        return Err(SecretsError::PassFailed(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }
    String::from_utf8(output.stdout)
        .map(|s| s.trim().to_string())
        .map_err(|_| SecretsError::NotUtf8)
}

#[cfg(test)]
#[path = "secrets_tests.rs"]
mod tests;
