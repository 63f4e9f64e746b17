// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-word spelling suggestions, cached in the Store under
//! `suggestion.<word>`.
//!
//! Unifies the two suggestion shapes a word-suggestion service may
//! produce: a local-dictionary lookup (an ordered `replacement_list`) and
//! a web-search confirmation (at most one `replacement`). Both serialize
//! to the same `{is_nonword, is_typo, replacement_list}` wire shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub is_nonword: bool,
    #[serde(default)]
    pub is_typo: bool,
    #[serde(default)]
    pub replacement_list: Vec<String>,
}

impl Suggestion {
    pub fn nonword() -> Self {
        Suggestion {
            is_nonword: true,
            ..Default::default()
        }
    }

    pub fn typo(replacement_list: Vec<String>) -> Self {
        Suggestion {
            is_typo: true,
            replacement_list,
            ..Default::default()
        }
    }

    pub fn typo_unconfirmed() -> Self {
        Suggestion {
            is_typo: true,
            ..Default::default()
        }
    }

    /// First (best) replacement, if any.
    pub fn replacement(&self) -> Option<&str> {
        self.replacement_list.first().map(String::as_str)
    }

    /// Ranking priority used to sort candidate words: a confirmed
    /// replacement outranks a bare typo flag, which outranks a bare
    /// nonword flag, which outranks nothing at all.
    pub fn priority(&self) -> u8 {
        if self.replacement().is_some() {
            3
        } else if self.is_typo {
            2
        } else if self.is_nonword {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod tests;
