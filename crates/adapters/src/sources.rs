// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scans configured "awesome list" markdown documents for GitHub links.
//! Grounded on `_sources.py`'s `obtain_sources`/`check_url`/
//! `get_all_markdown_github_links`. Adds a 7-day TTL on top of the
//! original's unconditional cache, under `github_links|<url>` (the
//! cached link list) and `github_links_datetxt|<url>` (the fetch
//! timestamp), since an unconditional cache would never see new
//! repositories added to an upstream list again.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use regex::Regex;
use tokio::runtime::Runtime;
use typofix_core::{SourceFeed, SourceFeedError, Store};

const CACHE_TTL_DAYS: i64 = 7;

const SOURCE_MARKDOWN_URLS: &[&str] = &[
    "https://raw.githubusercontent.com/vinta/awesome-python/master/README.md",
    "https://raw.githubusercontent.com/shahraizali/awesome-django/master/README.md",
    "https://raw.githubusercontent.com/humiaozuzu/awesome-flask/master/README.md",
    "https://raw.githubusercontent.com/uralbash/awesome-pyramid/master/README.md",
    "https://raw.githubusercontent.com/sorrycc/awesome-javascript/master/README.md",
    "https://raw.githubusercontent.com/kozross/awesome-c/master/README.md",
    "https://raw.githubusercontent.com/sindresorhus/awesome/master/README.md",
];

pub struct MarkdownSourceFeed {
    urls: Vec<String>,
    store: Arc<Store>,
    http: reqwest::Client,
    runtime: Runtime,
}

impl MarkdownSourceFeed {
    pub fn new(store: Arc<Store>) -> Result<Self, SourceFeedError> {
        Self::with_urls(
            SOURCE_MARKDOWN_URLS.iter().map(|s| s.to_string()).collect(),
            store,
        )
    }

    pub fn with_urls(urls: Vec<String>, store: Arc<Store>) -> Result<Self, SourceFeedError> {
        let runtime = Runtime::new().map_err(|e| SourceFeedError::Fetch {
            url: "<runtime init>".to_string(),
            message: e.to_string(),
        })?;
        Ok(MarkdownSourceFeed {
            urls,
            store,
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            runtime,
        })
    }

    fn links_for(&self, url: &str) -> Result<Vec<String>, SourceFeedError> {
        let links_key = format!("github_links|{url}");
        let datetxt_key = format!("github_links_datetxt|{url}");

        if let (Ok(Some(cached)), Ok(Some(fetched_at))) =
            (self.store.get(&links_key), self.store.get(&datetxt_key))
        {
            if !is_stale(&fetched_at) {
                return Ok(cached.lines().map(str::to_string).collect());
            }
        }

        let body = self.runtime.block_on(async {
            self.http
                .get(url)
                .send()
                .await
                .map_err(|e| fetch_err(url, e))?
                .text()
                .await
                .map_err(|e| fetch_err(url, e))
        })?;
        let links = extract_github_links(&body);

        let _ = self.store.set(&links_key, &links.join("\n"));
        let _ = self.store.set(&datetxt_key, &Utc::now().to_rfc3339());
        Ok(links)
    }
}

fn fetch_err(url: &str, e: reqwest::Error) -> SourceFeedError {
    SourceFeedError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    }
}

fn is_stale(fetched_at: &str) -> bool {
    match DateTime::parse_from_rfc3339(fetched_at) {
        Ok(ts) => Utc::now().signed_duration_since(ts) > chrono::Duration::days(CACHE_TTL_DAYS),
        Err(_) => true,
    }
}

/// Extract `org/repo` pairs from every `(https://github.com/...)`
/// markdown link in `body`, in document order.
fn extract_github_links(body: &str) -> Vec<String> {
    let paren_re = Regex::new(r"\(([^)]+)\)").unwrap();
    let github_re =
        Regex::new(r"^https://github\.com/([A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+)(?:/|$)").unwrap();
    paren_re
        .captures_iter(body)
        .filter_map(|cap| {
            let link = cap.get(1)?.as_str();
            github_re
                .captures(link)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}

impl SourceFeed for MarkdownSourceFeed {
    fn candidates(&self) -> Result<Vec<String>, SourceFeedError> {
        let mut all = Vec::new();
        for url in &self.urls {
            all.extend(self.links_for(url)?);
        }
        Ok(all)
    }
}

#[cfg(test)]
#[path = "sources_tests.rs"]
mod tests;
