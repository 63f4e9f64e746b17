// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake adapters for engine-crate tests, gated behind `cfg(test)`.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

use typofix_core::{
    Choice, HostingApi, HostingError, Interaction, InteractionError, RepoHandle, SourceFeed,
    SourceFeedError, SpellCheckError, SpellCheckReport, SpellChecker, Store, SuggestError,
    Suggestion, WordSuggester,
};

use crate::services::Services;

pub struct NoHosting;

impl HostingApi for NoHosting {
    fn resolve_true_orgrepo(&self, orgrepo: &str) -> Result<String, HostingError> {
        Ok(orgrepo.to_string())
    }
    fn check_forked(&self, _orgrepo: &str) -> Result<bool, HostingError> {
        Ok(false)
    }
    fn is_archived(&self, _orgrepo: &str) -> Result<bool, HostingError> {
        Ok(false)
    }
    fn fork(&self, _orgrepo: &str) -> Result<(), HostingError> {
        Ok(())
    }
    fn checkout(&self, _repo: &str, _target: &Path) -> Result<(), HostingError> {
        Ok(())
    }
    fn issues_allowed(&self, _reponame: &str) -> Result<bool, HostingError> {
        Ok(true)
    }
    fn create_pr(
        &self,
        _reponame: &str,
        _title: &str,
        _body: &str,
        _from_branch: &str,
        _to_branch: &str,
    ) -> Result<RepoHandle, HostingError> {
        Ok(RepoHandle {
            number: 1,
            html_url: "https://example.invalid/pr/1".into(),
        })
    }
    fn create_issue(
        &self,
        _reponame: &str,
        _title: &str,
        _body: &str,
    ) -> Result<RepoHandle, HostingError> {
        Ok(RepoHandle {
            number: 1,
            html_url: "https://example.invalid/issues/1".into(),
        })
    }
}

pub struct NoSpellCheck;

impl SpellChecker for NoSpellCheck {
    fn check(&self, _repo_dir: &Path) -> Result<SpellCheckReport, SpellCheckError> {
        Ok(SpellCheckReport::new())
    }
}

pub struct NoSuggestions;

impl WordSuggester for NoSuggestions {
    fn suggest(&self, _word: &str) -> Result<Option<Suggestion>, SuggestError> {
        Ok(None)
    }
}

pub struct NoSources;

impl SourceFeed for NoSources {
    fn candidates(&self) -> Result<Vec<String>, SourceFeedError> {
        Ok(Vec::new())
    }
}

/// An [`Interaction`] that never solicits anything and never quits on
/// its own — purely a stand-in for background-task tests.
pub struct NullInteraction;

impl Interaction for NullInteraction {
    fn send(&self, _message: &str) {}
    fn get_input(&self, _prompt: &str) -> Result<String, InteractionError> {
        Ok(String::new())
    }
    fn get_confirmation(&self, _prompt: &str, default: bool) -> Result<bool, InteractionError> {
        Ok(default)
    }
    fn make_choice(&self, _choices: Vec<Choice<String>>) -> Result<Option<String>, InteractionError> {
        Ok(None)
    }
    fn check_quit(&self, tasks_empty: bool) -> bool {
        tasks_empty
    }
    fn add_repo_save(
        &self,
        _repodir: &str,
        _add_word: &str,
        _del_word: &str,
        _file_paths: &[String],
    ) -> Result<(), InteractionError> {
        Ok(())
    }
}

/// An [`Interaction`] driven by a pre-loaded script of responses, for
/// tests that exercise a specific operator decision sequence. Each
/// queue is drained front-to-back; an exhausted queue falls back to a
/// neutral default rather than panicking.
#[derive(Default)]
pub struct ScriptedInteraction {
    pub confirmations: Mutex<VecDeque<bool>>,
    pub inputs: Mutex<VecDeque<String>>,
    pub choices: Mutex<VecDeque<Option<String>>>,
    pub messages: Mutex<Vec<String>>,
    pub repo_saves: Mutex<Vec<(String, String, String, Vec<String>)>>,
}

impl Interaction for ScriptedInteraction {
    fn send(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
    fn get_input(&self, _prompt: &str) -> Result<String, InteractionError> {
        Ok(self.inputs.lock().unwrap().pop_front().unwrap_or_default())
    }
    fn get_confirmation(&self, _prompt: &str, default: bool) -> Result<bool, InteractionError> {
        Ok(self.confirmations.lock().unwrap().pop_front().unwrap_or(default))
    }
    fn make_choice(&self, _choices: Vec<Choice<String>>) -> Result<Option<String>, InteractionError> {
        Ok(self.choices.lock().unwrap().pop_front().flatten())
    }
    fn check_quit(&self, tasks_empty: bool) -> bool {
        tasks_empty
    }
    fn add_repo_save(
        &self,
        repodir: &str,
        add_word: &str,
        del_word: &str,
        file_paths: &[String],
    ) -> Result<(), InteractionError> {
        self.repo_saves.lock().unwrap().push((
            repodir.to_string(),
            add_word.to_string(),
            del_word.to_string(),
            file_paths.to_vec(),
        ));
        Ok(())
    }
}

pub fn fake_services() -> Arc<Services> {
    Arc::new(Services {
        store: Arc::new(Store::open_in_memory().unwrap()),
        hosting: Arc::new(NoHosting),
        spellchecker: Arc::new(NoSpellCheck),
        suggester: Arc::new(NoSuggestions),
        source_feed: Arc::new(NoSources),
        max_candidates: 50,
        nonword_pr_threshold: 5,
        nonword_dataset_orgrepo: "typofix-data/nonwords".to_string(),
    })
}
