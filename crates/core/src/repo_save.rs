// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The wire shape persisted under the Store's `repository_saves` key:
//! one pending correction per repository, written by an
//! [`Interaction::add_repo_save`](crate::Interaction::add_repo_save)
//! implementation and consumed by the `submit` pipeline handler.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSave {
    pub add_word: String,
    pub del_word: String,
    pub file_paths: Vec<String>,
    pub repodir: String,
}
