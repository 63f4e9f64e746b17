// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal-driven [`Interaction`]: the only front-end this crate ships.
//! Grounded on `_input.py`'s `make_choice`/`get_confirmation`/`get_input`,
//! reimplemented on `dialoguer` instead of `PyInquirer`. `println!` here
//! is the one place in the codebase allowed direct stdout, matching how
//! `meticulous` used bare `print()` for operator-facing text.

use std::collections::HashMap;
use std::sync::Arc;

use dialoguer::{Confirm, Input, Select};
use typofix_core::{Choice, Interaction, InteractionError, RepoSave, Store};

const QUIT_LABEL: &str = "- quit -";

pub struct TerminalInteraction {
    store: Arc<Store>,
}

impl TerminalInteraction {
    pub fn new(store: Arc<Store>) -> Self {
        TerminalInteraction { store }
    }
}

impl Interaction for TerminalInteraction {
    fn send(&self, message: &str) {
        println!("{message}");
    }

    fn get_input(&self, prompt: &str) -> Result<String, InteractionError> {
        Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| InteractionError::Backend(e.to_string()))
    }

    fn get_confirmation(&self, prompt: &str, default: bool) -> Result<bool, InteractionError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| InteractionError::Backend(e.to_string()))
    }

    fn make_choice(&self, choices: Vec<Choice<String>>) -> Result<Option<String>, InteractionError> {
        let mut labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        labels.push(QUIT_LABEL);

        let selection = Select::new()
            .with_prompt("What do you want to do?")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|e| InteractionError::Backend(e.to_string()))?;

        match selection {
            Some(index) if index < choices.len() => Ok(Some(choices[index].value.clone())),
            _ => Ok(None),
        }
    }

    fn check_quit(&self, tasks_empty: bool) -> bool {
        if tasks_empty {
            return true;
        }
        Confirm::new()
            .with_prompt("Do you want to quit?")
            .default(false)
            .interact()
            .unwrap_or(true)
    }

    fn add_repo_save(
        &self,
        repodir: &str,
        add_word: &str,
        del_word: &str,
        file_paths: &[String],
    ) -> Result<(), InteractionError> {
        let mut saves: HashMap<String, RepoSave> = self
            .store
            .get_json("repository_saves", HashMap::new())
            .map_err(|e| InteractionError::Backend(e.to_string()))?;

        let reponame = std::path::Path::new(repodir)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| repodir.to_string());

        saves.insert(
            reponame,
            RepoSave {
                add_word: add_word.to_string(),
                del_word: del_word.to_string(),
                file_paths: file_paths.to_vec(),
                repodir: repodir.to_string(),
            },
        );

        self.store
            .set_json("repository_saves", &saves)
            .map_err(|e| InteractionError::Backend(e.to_string()))
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
