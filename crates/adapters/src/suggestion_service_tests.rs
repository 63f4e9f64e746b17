// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn dictionary_suggester_parses_arrow_separated_lines() {
    let suggester = DictionarySuggester::from_lines("teh->the\nrecieve->receive, receive\n");
    let suggestion = suggester.suggest("teh").unwrap().unwrap();
    assert_eq!(suggestion.replacement(), Some("the"));
    assert!(suggester.suggest("unknown").unwrap().is_none());
}

#[test]
fn dictionary_suggester_ignores_malformed_lines() {
    let suggester = DictionarySuggester::from_lines("not-a-mapping\n");
    assert!(suggester.suggest("not-a-mapping").unwrap().is_none());
}

#[test]
fn url_decode_handles_percent_escapes() {
    assert_eq!(url_decode("a%20b%2Fc"), "a b/c");
}

#[test]
fn classify_search_result_recognizes_a_dictionary_hit() {
    let page = r#"<a href="/url?q=https://en.wikipedia.org/wiki/github&amp;sa=U">"#;
    let suggestion = classify_search_result(page, "github").unwrap();
    assert!(suggestion.is_nonword);
}

#[test]
fn classify_search_result_recognizes_a_misspelling_hit() {
    let page = r#"<a href="/url?q=https://www.spellchecker.net/misspellings/teh&amp;sa=U">"#;
    let suggestion = classify_search_result(page, "teh").unwrap();
    assert!(suggestion.is_typo);
}

#[test]
fn classify_search_result_returns_none_for_unrelated_pages() {
    assert!(classify_search_result("no links here", "teh").is_none());
}
