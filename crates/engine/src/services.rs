// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bundles the Store and every external-collaborator port the
//! per-repository pipeline needs, wired once by the Session Driver and
//! shared (via `Arc`) across the driver thread and worker pool.

use std::sync::Arc;

use typofix_core::{HostingApi, SourceFeed, SpellChecker, Store, WordSuggester};

pub struct Services {
    pub store: Arc<Store>,
    pub hosting: Arc<dyn HostingApi>,
    pub spellchecker: Arc<dyn SpellChecker>,
    pub suggester: Arc<dyn WordSuggester>,
    pub source_feed: Arc<dyn SourceFeed>,
    /// Candidate count shown per repository before "skipping N" kicks in.
    pub max_candidates: usize,
    /// Added-line threshold (via `git diff`) that triggers a non-word PR.
    pub nonword_pr_threshold: usize,
    /// `org/repo` of the checked-out companion repository that
    /// accumulates non-words between upstream pushes.
    pub nonword_dataset_orgrepo: String,
}
