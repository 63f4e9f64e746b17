// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! typofix-adapters: real implementations of the engine's external-
//! collaborator ports — GitHub hosting, subprocess spell-checking,
//! word-suggestion, source feeds, terminal interaction, and credential
//! loading.

pub mod hosting;
pub mod secrets;
pub mod sources;
pub mod spellcheck;
pub mod suggestion_service;
pub mod terminal;

pub use hosting::GithubHosting;
pub use sources::MarkdownSourceFeed;
pub use spellcheck::SubprocessSpellChecker;
pub use suggestion_service::{ChainedSuggester, DictionarySuggester, WebSearchSuggester};
pub use terminal::TerminalInteraction;
