// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assembles a validated [`Config`] from CLI flags and the environment.
//! Grounded on `_util.py`'s `get_app`/`get_editor`/`get_browser` (fatal
//! if unresolvable) and `_process.py`'s `run_invocation` target handling.

use std::path::PathBuf;

use thiserror::Error;
use which::which;

use crate::cli::Cli;

const DEFAULT_SPELLCHECK_EXECUTABLE: &str = "codespell";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("target {0:?} is not a directory")]
    TargetNotADirectory(PathBuf),

    #[error("{0} not found, set {0} or METICULOUS_{0} to a valid command")]
    EnvToolMissing(&'static str),

    #[error("--slack was requested but no Slack front-end is built into this binary")]
    SlackUnsupported,
}

pub struct Config {
    pub target: PathBuf,
    pub store_path: PathBuf,
    pub editor: String,
    pub browser: String,
    pub spellcheck_executable: String,
    pub wants_start: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

        let target = cli.target.clone().unwrap_or_else(|| home.join("data"));
        if !target.is_dir() {
            return Err(ConfigError::TargetNotADirectory(target));
        }

        let store_path = cli
            .store_path
            .clone()
            .unwrap_or_else(|| home.join(".meticulous").join("sqlite.db"));

        if cli.wants_slack() {
            return Err(ConfigError::SlackUnsupported);
        }

        Ok(Config {
            target,
            store_path,
            editor: resolve_app("EDITOR", "vim")?,
            browser: resolve_app("BROWSER", "links")?,
            spellcheck_executable: std::env::var("METICULOUS_SPELLCHECK")
                .unwrap_or_else(|_| DEFAULT_SPELLCHECK_EXECUTABLE.to_string()),
            wants_start: cli.wants_start(),
        })
    }
}

/// Resolve `METICULOUS_<NAME>`, falling back to `<NAME>`, falling back to
/// `default_cmd`, then check it's actually on `PATH`.
fn resolve_app(name: &'static str, default_cmd: &str) -> Result<String, ConfigError> {
    let env_value = std::env::var(format!("METICULOUS_{name}"))
        .or_else(|_| std::env::var(name))
        .unwrap_or_else(|_| default_cmd.to_string());
    which(&env_value)
        .map(|path| path.display().to_string())
        .map_err(|_| ConfigError::EnvToolMissing(name))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
