// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `collect_nonwords`: rank candidate words from `spelling.json`, show
//! each to the operator, and record a non-word or a typo fix. Grounded
//! on `_processrepo.py`'s `get_sorted_words` and the
//! `check_websearch`/`is_nonword`/`is_typo`/`what_now` decision chain,
//! collapsed here into a single `make_choice` menu per word since this
//! crate has no workflow-engine dependency to model the halt-chain with.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use typofix_core::{rank_words, replace_whole_word, Choice, SpellCheckReport, Task, WordDetails};

use super::nonwords_dataset;
use crate::error::EngineError;
use crate::handlers::Context;

const SKIP: &str = "skip";
const STOP: &str = "stop";
const NONWORD: &str = "nonword";
const TYPO_SUGGESTED: &str = "typo_suggested";
const TYPO_MANUAL: &str = "typo_manual";

pub fn handle(ctx: Context, task: Task) -> Result<(), EngineError> {
    let reponame = task
        .reponame()
        .expect("collect_nonwords task carries a reponame")
        .to_string();

    let repository_map: HashMap<String, String> =
        ctx.services.store.get_json("repository_map", HashMap::new())?;

    if let Some(repodir_str) = repository_map.get(&reponame) {
        let repodir = PathBuf::from(repodir_str);
        collect(&ctx, &reponame, &repodir)?;
    }

    ctx.controller.add(Task::Submit { reponame });
    Ok(())
}

fn collect(ctx: &Context, reponame: &str, repodir: &Path) -> Result<(), EngineError> {
    let spelling_path = repodir.join("spelling.json");
    let raw = match fs::read_to_string(&spelling_path) {
        Ok(raw) => raw,
        Err(_) => {
            ctx.interaction()
                .send(&format!("Unable to locate spelling at {}", spelling_path.display()));
            return Ok(());
        }
    };
    let report: SpellCheckReport = serde_json::from_str(&raw)
        .map_err(|e| super::pipeline_err(SpellingParseError(spelling_path, e)))?;

    let ranked = rank_words(&report);
    let max = ctx.services.max_candidates;
    if ranked.len() > max {
        ctx.interaction()
            .send(&format!("Skipping {} candidates.", ranked.len() - max));
    }

    for word in ranked.into_iter().take(max) {
        let details = &report[&word];
        show_word(ctx, &word, details);

        let choice = ctx.interaction().make_choice(choices_for(details)).map_err(super::pipeline_err)?;
        match choice.as_deref() {
            Some(NONWORD) => {
                handle_nonword(ctx, &word)?;
            }
            Some(TYPO_SUGGESTED) => {
                let replacement = details.suggestion.as_ref().and_then(|s| s.replacement()).unwrap_or(&word).to_string();
                fix_word(ctx, &word, &replacement, details, repodir)?;
                break;
            }
            Some(TYPO_MANUAL) => {
                let replacement = ctx
                    .interaction()
                    .get_input(&format!("How do you spell {word}?"))
                    .map_err(super::pipeline_err)?;
                if !replacement.is_empty() {
                    fix_word(ctx, &word, &replacement, details, repodir)?;
                    break;
                }
            }
            Some(STOP) | None => break,
            _ => continue,
        }
    }

    ctx.interaction().send("Completed checking all words!");
    Ok(())
}

fn choices_for(details: &WordDetails) -> Vec<Choice<String>> {
    let mut choices = Vec::new();
    if let Some(suggestion) = &details.suggestion {
        if let Some(replacement) = suggestion.replacement() {
            choices.push(Choice::new(format!("Use suggested replacement: {replacement}"), TYPO_SUGGESTED.to_string()));
        }
    }
    choices.push(Choice::new("It's a non-word", NONWORD.to_string()));
    choices.push(Choice::new("It's a typo (enter correction)", TYPO_MANUAL.to_string()));
    choices.push(Choice::new("Skip this word", SKIP.to_string()));
    choices.push(Choice::new("Stop collecting", STOP.to_string()));
    choices
}

fn show_word(ctx: &Context, word: &str, details: &WordDetails) {
    ctx.interaction().send(&format!("Checking word {word}"));
    let mut files: BTreeSet<&str> = BTreeSet::new();
    for occurrence in &details.files {
        files.insert(&occurrence.file);
    }
    for file in files {
        ctx.interaction().send(&format!("{file}:"));
        if let Ok(content) = fs::read_to_string(file) {
            for line in content.lines() {
                if replace_whole_word(line.as_bytes(), word, word).is_some() {
                    ctx.interaction().send(line);
                }
            }
        }
    }
}

fn handle_nonword(ctx: &Context, word: &str) -> Result<(), EngineError> {
    nonwords_dataset::add_non_word(
        ctx.services.hosting.as_ref(),
        &ctx.controller.target,
        &ctx.services.nonword_dataset_orgrepo,
        word,
    )?;
    if nonwords_dataset::over_threshold(
        &ctx.controller.target,
        &ctx.services.nonword_dataset_orgrepo,
        ctx.services.nonword_pr_threshold,
    )? {
        ctx.controller.add(Task::NonwordUpdate);
    }
    Ok(())
}

fn fix_word(
    ctx: &Context,
    word: &str,
    replacement: &str,
    details: &WordDetails,
    repodir: &Path,
) -> Result<(), EngineError> {
    ctx.interaction().send(&format!("Changing {word} to {replacement}"));
    let mut files: BTreeSet<&str> = BTreeSet::new();
    for occurrence in &details.files {
        files.insert(&occurrence.file);
    }

    let mut file_paths = Vec::new();
    for file in files {
        let bytes = fs::read(file).map_err(|e| super::pipeline_err(FileIoError(file.to_string(), e)))?;
        let mut out = Vec::with_capacity(bytes.len());
        for (i, line) in bytes.split(|&b| b == b'\n').enumerate() {
            if i > 0 {
                out.push(b'\n');
            }
            match replace_whole_word(line, word, replacement) {
                Some(replaced) => out.extend_from_slice(&replaced),
                None => out.extend_from_slice(line),
            }
        }
        fs::write(file, out).map_err(|e| super::pipeline_err(FileIoError(file.to_string(), e)))?;

        let filepath = Path::new(file);
        let relpath = filepath
            .strip_prefix(repodir)
            .unwrap_or(filepath)
            .display()
            .to_string();
        super::git::add(repodir, &relpath).map_err(super::pipeline_err)?;
        file_paths.push(relpath);
    }

    ctx.interaction()
        .add_repo_save(&repodir.display().to_string(), replacement, word, &file_paths)
        .map_err(super::pipeline_err)
}

#[derive(Debug, thiserror::Error)]
#[error("failed to parse {0:?}: {1}")]
struct SpellingParseError(PathBuf, #[source] serde_json::Error);

#[derive(Debug, thiserror::Error)]
#[error("failed to read/write {0}: {1}")]
struct FileIoError(String, #[source] std::io::Error);

#[cfg(test)]
#[path = "collect_nonwords_tests.rs"]
mod tests;
