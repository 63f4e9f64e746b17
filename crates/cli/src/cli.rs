// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `typofix` command-line surface. Mirrors `meticulous`'s `__main__.py`
//! click group (`invoke` as the default/explicit subcommand) plus the
//! startup self-check the distillation folded into a `test` subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "typofix",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")"),
    about = "Multi-worker spelling typo correction dispatch engine"
)]
pub struct Cli {
    /// Directory repositories are checked out under.
    #[arg(long, env = "METICULOUS_TARGET")]
    pub target: Option<PathBuf>,

    /// Path to the durable key/value store, overriding the default
    /// `$HOME/.meticulous/sqlite.db`.
    #[arg(long, env = "METICULOUS_STORE_PATH")]
    pub store_path: Option<PathBuf>,

    /// Start the worker pool and run a session immediately (default).
    #[arg(long)]
    pub start: bool,

    /// Parse the workload and exit without starting the worker pool.
    #[arg(long)]
    pub no_start: bool,

    /// Post session summaries to Slack (parsed, front-end out of scope).
    #[arg(long)]
    pub slack: bool,

    #[arg(long)]
    pub no_slack: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a dispatch session (the default when no subcommand is given).
    Invoke,
    /// Probe connectivity without processing any repositories: store
    /// reachable, GitHub token present, spelling analyzer resolvable.
    Test,
}

impl Cli {
    /// Whether to actually run the worker pool. `--no-start` always wins;
    /// otherwise the session starts by default, matching the automated
    /// processing `meticulous` ran unless the operator chose the manual
    /// menu.
    pub fn wants_start(&self) -> bool {
        !self.no_start
    }

    pub fn wants_slack(&self) -> bool {
        self.slack && !self.no_slack
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
