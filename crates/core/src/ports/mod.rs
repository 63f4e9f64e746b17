// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trait seams ("ports") between the dispatch engine and its external
//! collaborators: a human operator, the hosting API, the spelling
//! analyzer, and the word-suggestion service. Concrete implementations
//! live in `typofix-adapters`; the engine crate depends only on these
//! traits so that adapters can depend on the engine's task/store types
//! without a dependency cycle.

mod hosting;
mod interaction;
mod sources;
mod spellcheck;
mod suggester;

pub use hosting::{HostingApi, HostingError, RepoHandle};
pub use interaction::{Choice, Interaction, InteractionError};
pub use sources::{SourceFeed, SourceFeedError};
pub use spellcheck::{SpellCheckError, SpellChecker, SpellCheckReport, WordDetails, WordOccurrence};
pub use suggester::{SuggestError, WordSuggester};
