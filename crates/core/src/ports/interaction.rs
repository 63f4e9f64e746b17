// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Interaction Port (C8): the capability set the core consumes to
//! solicit human input. Any type implementing [`Interaction`] can drive
//! the engine — terminal, HTTP form, or chat front-ends are all equally
//! valid.

use thiserror::Error;

/// A single offered option: a human-readable label plus an opaque value
/// returned to the caller on selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Choice {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// The operator declined to answer (e.g. Ctrl-C on a prompt, or chose
    /// "- quit -" from a menu). Caught at the session boundary, never by
    /// the Controller.
    #[error("operator cancelled the prompt")]
    Cancelled,

    #[error("interaction front-end failure: {0}")]
    Backend(String),
}

/// Capability set through which the dispatch engine solicits human
/// input and reports informational text.
pub trait Interaction: Send + Sync {
    /// Display an informational line.
    fn send(&self, message: &str);

    /// Read a free-form line.
    fn get_input(&self, prompt: &str) -> Result<String, InteractionError>;

    /// Yes/No, with a default used by front-ends that support one.
    fn get_confirmation(&self, prompt: &str, default: bool) -> Result<bool, InteractionError>;

    /// Offer a menu of choices (plus an implicit "quit" option) and
    /// return the chosen value, or `None` if the operator chose to quit.
    fn make_choice(&self, choices: Vec<Choice<String>>) -> Result<Option<String>, InteractionError>;

    /// Policy hook: should the session stop now? Terminal front-ends
    /// prompt the operator; web/chat front-ends typically answer from
    /// `tasks_empty()` instead.
    fn check_quit(&self, tasks_empty: bool) -> bool;

    /// Signal that the current repository's work is finished. Optional
    /// hook; the default implementation does nothing.
    fn complete_repo(&self) {}

    /// Persist a correction about to be submitted. Terminal front-ends
    /// map this straight to the Store's `repository_saves` entry; other
    /// front-ends may additionally mirror it to their own UI.
    fn add_repo_save(
        &self,
        repodir: &str,
        add_word: &str,
        del_word: &str,
        file_paths: &[String],
    ) -> Result<(), InteractionError>;
}
