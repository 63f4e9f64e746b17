// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `typofix`: loads the saved workload, reconciles it against the
//! current repository count, and hands off to the Controller. Mirrors
//! `_multiworker.py main()`'s load/reconcile/run/persist cycle.

mod cli;
mod config;

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Context as _, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use typofix_adapters::{
    ChainedSuggester, DictionarySuggester, GithubHosting, MarkdownSourceFeed, SubprocessSpellChecker,
    TerminalInteraction, WebSearchSuggester,
};
use typofix_core::{ProgressRegistry, Store, Task};
use typofix_engine::{pipeline, reconcile, Controller, HandlerRegistry, Services};

use cli::{Cli, Command};
use config::Config;

const WORKLOAD_KEY: &str = "multiworker_workload";

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = Config::from_cli(&cli).context("invalid configuration")?;

    match cli.command {
        Some(Command::Test) => run_self_check(&config),
        Some(Command::Invoke) | None => run_session(&config),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// `typofix test`: probe every external collaborator without touching a
/// repository, the way `_process.py`'s `validate_versions` warns at
/// startup rather than mid-session.
fn run_self_check(config: &Config) -> Result<()> {
    open_store(config).context("store unreachable")?;
    println!("store: ok ({})", config.store_path.display());

    typofix_adapters::secrets::load_api_key().context("GitHub token unavailable")?;
    println!("github token: ok");

    let spellchecker = SubprocessSpellChecker::new(&config.spellcheck_executable);
    let version = spellchecker
        .probe_version()
        .context("spelling analyzer unreachable")?;
    println!(
        "spelling analyzer ({}): {} (minimum {})",
        config.spellcheck_executable,
        version,
        typofix_adapters::spellcheck::MINIMUM_VERSION
    );

    Ok(())
}

fn run_session(config: &Config) -> Result<()> {
    if !config.wants_start {
        println!("--no-start given, exiting without running a session");
        return Ok(());
    }

    let store = Arc::new(open_store(config)?);
    let token = typofix_adapters::secrets::load_api_key().context("loading GitHub token")?;

    let hosting = Arc::new(GithubHosting::new(token, Arc::clone(&store))?);
    let spellchecker = Arc::new(SubprocessSpellChecker::new(&config.spellcheck_executable));
    let dictionary = load_dictionary();
    let websearch = WebSearchSuggester::new(Arc::clone(&store))?;
    let suggester = Arc::new(ChainedSuggester::new(dictionary, websearch));
    let source_feed = Arc::new(MarkdownSourceFeed::new(Arc::clone(&store))?);
    let interaction = Arc::new(TerminalInteraction::new(Arc::clone(&store)));

    let services = Arc::new(Services {
        store: Arc::clone(&store),
        hosting,
        spellchecker,
        suggester,
        source_feed,
        max_candidates: 50,
        nonword_pr_threshold: 5,
        nonword_dataset_orgrepo: "oddjobs-fyi/spelling-dataset".to_string(),
    });

    let mut registry = HandlerRegistry::new();
    pipeline::register(&mut registry);
    let registry = Arc::new(registry);

    let repository_map: HashMap<String, String> = store.get_json("repository_map", HashMap::new())?;
    let workload: Vec<Task> = store.get_json(WORKLOAD_KEY, Vec::new())?;
    let workload = reconcile(workload, repository_map.len());

    let progress = Arc::new(ProgressRegistry::new());
    let controller = Controller::new(registry, services, config.target.clone(), progress);
    for task in workload {
        controller.add(task);
    }

    let (saved, result) = controller.run(interaction);
    store.set_json(WORKLOAD_KEY, &saved)?;

    if let Err(e) = result {
        bail!("session ended with an error: {e}");
    }
    Ok(())
}

fn open_store(config: &Config) -> Result<Store> {
    if let Some(parent) = config.store_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating store directory {}", parent.display()))?;
    }
    Store::open(&config.store_path).context("opening store")
}

/// Loads misspelling entries from `METICULOUS_DICTIONARY` if set (a
/// `word->repl1,repl2` text file). Absent a configured dictionary the
/// suggester falls straight through to the web-search backend.
fn load_dictionary() -> DictionarySuggester {
    let Ok(path) = std::env::var("METICULOUS_DICTIONARY") else {
        return DictionarySuggester::new(HashMap::new());
    };
    match std::fs::read_to_string(&path) {
        Ok(contents) => DictionarySuggester::from_lines(&contents),
        Err(e) => {
            tracing::warn!(path, error = %e, "could not read METICULOUS_DICTIONARY, continuing without one");
            DictionarySuggester::new(HashMap::new())
        }
    }
}
