// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source feeds: external documents listing candidate repositories.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceFeedError {
    #[error("failed to fetch source feed {url}: {message}")]
    Fetch { url: String, message: String },
}

/// Scans configured source feeds and yields `org/repo` candidates, most
/// recently configured feed first, in file order within each feed.
pub trait SourceFeed: Send + Sync {
    fn candidates(&self) -> Result<Vec<String>, SourceFeedError>;
}
