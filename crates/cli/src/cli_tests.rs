// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use super::*;

#[test]
fn starts_by_default() {
    let cli = Cli::parse_from(["typofix"]);
    assert!(cli.wants_start());
    assert!(!cli.wants_slack());
}

#[test]
fn no_start_wins() {
    let cli = Cli::parse_from(["typofix", "--start", "--no-start"]);
    assert!(!cli.wants_start());
}

#[test]
fn slack_requires_the_flag_without_no_slack() {
    let cli = Cli::parse_from(["typofix", "--slack"]);
    assert!(cli.wants_slack());
    let cli = Cli::parse_from(["typofix", "--slack", "--no-slack"]);
    assert!(!cli.wants_slack());
}

#[test]
fn test_subcommand_parses() {
    let cli = Cli::parse_from(["typofix", "test"]);
    assert!(matches!(cli.command, Some(Command::Test)));
}
