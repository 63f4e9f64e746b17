// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The word-suggestion service boundary: local dictionary lookup plus an
//! optional cached web search.

use crate::Suggestion;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("suggestion backend failure: {0}")]
    Backend(String),
}

/// Checks a single word and, if it recognizes it as a nonword or typo,
/// returns a [`Suggestion`].
pub trait WordSuggester: Send + Sync {
    fn suggest(&self, word: &str) -> Result<Option<Suggestion>, SuggestError>;
}
