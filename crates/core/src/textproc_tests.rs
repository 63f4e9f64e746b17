// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::ports::{WordDetails, WordOccurrence};
use crate::Suggestion;

fn details(files: usize, suggestion: Option<Suggestion>) -> WordDetails {
    WordDetails {
        files: (0..files)
            .map(|i| WordOccurrence {
                category: "body".into(),
                file: format!("file{i}.txt:1"),
            })
            .collect(),
        nonword: false,
        suggestion,
    }
}

#[test]
fn rank_words_orders_by_priority_then_file_count() {
    let mut report = SpellCheckReport::new();
    report.insert("teh".into(), details(2, Some(Suggestion::typo(vec!["the".into()]))));
    report.insert("recieve".into(), details(5, Some(Suggestion::typo_unconfirmed())));
    report.insert("zzz".into(), details(1, None));
    let ranked = rank_words(&report);
    assert_eq!(ranked, vec!["teh", "recieve", "zzz"]);
}

#[test]
fn rank_words_skips_confirmed_nonwords() {
    let mut report = SpellCheckReport::new();
    let mut nonword = details(1, None);
    nonword.nonword = true;
    report.insert("github".into(), nonword);
    report.insert("definately".into(), details(1, Some(Suggestion::typo(vec!["definitely".into()]))));
    assert_eq!(rank_words(&report), vec!["definately"]);
}

#[test]
fn replace_whole_word_preserves_capitalization() {
    let out = replace_whole_word(b"Teh quick fox", "teh", "the").unwrap();
    assert_eq!(out, b"The quick fox");
}

#[test]
fn replace_whole_word_matches_all_occurrences() {
    let out = replace_whole_word(b"recieve a recieve", "recieve", "receive").unwrap();
    assert_eq!(out, b"receive a receive");
}

#[test]
fn replace_whole_word_respects_custom_boundary_not_unicode_boundary() {
    // "cat" inside "concatenate" is not a whole-word match: the boundary
    // condition is "not alphabetic", so the embedded "cat" is rejected.
    assert_eq!(replace_whole_word(b"concatenate", "cat", "dog"), None);
}

#[test]
fn replace_whole_word_treats_non_alpha_as_boundary() {
    let out = replace_whole_word(b"foo-teh-bar", "teh", "the").unwrap();
    assert_eq!(out, b"foo-the-bar");
}

#[test]
fn replace_whole_word_returns_none_when_absent() {
    assert_eq!(replace_whole_word(b"no match here", "teh", "the"), None);
}

#[test]
fn first_interesting_lines_skips_blank_and_punctuation_lines() {
    let text = "\n---\n# Title\nSecond line\n\nThird";
    let lines = first_interesting_lines(text, 2);
    assert_eq!(lines, vec!["Second line".to_string(), "Third".to_string()]);
}

#[test]
fn first_interesting_lines_respects_max() {
    let text = (0..20).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
    assert_eq!(first_interesting_lines(&text, 15).len(), 15);
}
