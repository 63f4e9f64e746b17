// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word-suggestion services: a local misspelling dictionary, and an
//! optional cached web-search confirmation. Grounded on `_suggestion.py`
//! (`MISSPELLINGS`/`get_suggestion`) and `_websearch.py` (`get_suggestion`).

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use tokio::runtime::Runtime;
use typofix_core::{Store, SuggestError, Suggestion, WordSuggester};

/// Looks a word up in a preloaded `word -> comma-separated replacements`
/// misspelling dictionary, the shape `codespell`'s data files use.
pub struct DictionarySuggester {
    misspellings: HashMap<String, Vec<String>>,
}

impl DictionarySuggester {
    pub fn new(misspellings: HashMap<String, Vec<String>>) -> Self {
        DictionarySuggester { misspellings }
    }

    /// Parse `word->repl1,repl2` lines, the on-disk format of the
    /// dictionaries this adapter loads at startup.
    pub fn from_lines(lines: &str) -> Self {
        let mut misspellings = HashMap::new();
        for line in lines.lines() {
            let Some((word, replacements)) = line.split_once("->") else {
                continue;
            };
            let list: Vec<String> = replacements
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !list.is_empty() {
                misspellings.insert(word.trim().to_string(), list);
            }
        }
        DictionarySuggester { misspellings }
    }
}

impl WordSuggester for DictionarySuggester {
    fn suggest(&self, word: &str) -> Result<Option<Suggestion>, SuggestError> {
        Ok(self
            .misspellings
            .get(word)
            .map(|list| Suggestion::typo(list.clone())))
    }
}

/// Confirms a candidate word against a search engine's "did you mean"
/// and dictionary-site results. Cached in the [`Store`] under
/// `suggestion.<word>` since each lookup is an external network call.
pub struct WebSearchSuggester {
    store: Arc<Store>,
    http: reqwest::Client,
    runtime: Runtime,
}

const DICTIONARY_HOSTS: &[&str] = &[
    "www.merriam-webster.com/dictionary/",
    "en.wikipedia.org/wiki/",
    "www.dictionary.com/browse/",
    "en.wiktionary.org/wiki/",
    "www.collinsdictionary.com/dictionary/english/",
    "www.vocabulary.com/dictionary/",
    "www.thefreedictionary.com/",
    "www.thesaurus.com/browse/",
    "www.yourdictionary.com/",
];

const MISSPELLING_HOSTS: &[&str] = &[
    "www.spellchecker.net/misspellings/",
    "www.spellcheck.net/misspelled-words/",
];

impl WebSearchSuggester {
    pub fn new(store: Arc<Store>) -> Result<Self, SuggestError> {
        let runtime = Runtime::new().map_err(|e| SuggestError::Backend(e.to_string()))?;
        Ok(WebSearchSuggester {
            store,
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            runtime,
        })
    }

    fn cache_key(word: &str) -> String {
        format!("suggestion.{word}")
    }
}

impl WordSuggester for WebSearchSuggester {
    fn suggest(&self, word: &str) -> Result<Option<Suggestion>, SuggestError> {
        let key = Self::cache_key(word);
        if let Ok(Some(raw)) = self.store.get(&key) {
            return Ok(serde_json::from_str(&raw).ok());
        }

        let search_url = format!("https://www.google.com.au/search?q={}", urlencode(word));
        let page = self.runtime.block_on(async {
            self.http
                .get(&search_url)
                .send()
                .await
                .map_err(|e| SuggestError::Backend(e.to_string()))?
                .text()
                .await
                .map_err(|e| SuggestError::Backend(e.to_string()))
        })?;

        let suggestion = classify_search_result(&page, word);
        if let Some(suggestion) = &suggestion {
            let _ = self
                .store
                .set(&key, &serde_json::to_string(suggestion).unwrap_or_default());
        }
        Ok(suggestion)
    }
}

fn urlencode(word: &str) -> String {
    word.bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() {
                (b as char).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect()
}

/// Scan `/url?q=...` redirect links in a search results page for a match
/// against a known misspelling-confirmation or dictionary site.
fn classify_search_result(page: &str, word: &str) -> Option<Suggestion> {
    let search_re = Regex::new(r#"/url\?q=([^&"]+)[&"]"#).unwrap();
    let urls: Vec<String> = search_re
        .captures_iter(page)
        .filter_map(|cap| cap.get(1))
        .map(|m| url_decode(m.as_str()).to_lowercase())
        .collect();

    for url in &urls {
        for host in MISSPELLING_HOSTS {
            if *url == format!("https://{host}{word}") {
                return Some(Suggestion::typo_unconfirmed());
            }
        }
    }
    for url in &urls {
        for host in DICTIONARY_HOSTS {
            if *url == format!("https://{host}{word}") {
                return Some(Suggestion::nonword());
            }
        }
    }
    None
}

/// Tries the local dictionary first, falling back to a web-search
/// confirmation only when the dictionary has nothing to say. Mirrors
/// `update_json_results`'s single `get_suggestion` call per word, but
/// layers both backends behind the one [`WordSuggester`] the checkout
/// handler calls.
pub struct ChainedSuggester {
    dictionary: DictionarySuggester,
    websearch: WebSearchSuggester,
}

impl ChainedSuggester {
    pub fn new(dictionary: DictionarySuggester, websearch: WebSearchSuggester) -> Self {
        ChainedSuggester {
            dictionary,
            websearch,
        }
    }
}

impl WordSuggester for ChainedSuggester {
    fn suggest(&self, word: &str) -> Result<Option<Suggestion>, SuggestError> {
        match self.dictionary.suggest(word)? {
            Some(suggestion) => Ok(Some(suggestion)),
            None => self.websearch.suggest(word),
        }
    }
}

fn url_decode(s: &str) -> String {
    let mut out = Vec::with_capacity(s.len());
    let mut bytes = s.bytes();
    while let Some(b) = bytes.next() {
        if b == b'%' {
            let hi = bytes.next();
            let lo = bytes.next();
            if let (Some(hi), Some(lo)) = (hi, lo) {
                if let Ok(byte) = u8::from_str_radix(&format!("{}{}", hi as char, lo as char), 16) {
                    out.push(byte);
                    continue;
                }
            }
        } else {
            out.push(b);
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
#[path = "suggestion_service_tests.rs"]
mod tests;
