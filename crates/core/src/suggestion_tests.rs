// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn priority_ranks_confirmed_replacement_highest() {
    assert_eq!(Suggestion::typo(vec!["their".into()]).priority(), 3);
    assert_eq!(Suggestion::typo_unconfirmed().priority(), 2);
    assert_eq!(Suggestion::nonword().priority(), 1);
    assert_eq!(Suggestion::default().priority(), 0);
}

#[test]
fn replacement_is_first_of_list() {
    let s = Suggestion::typo(vec!["their".into(), "there".into()]);
    assert_eq!(s.replacement(), Some("their"));
}

#[test]
fn round_trips_through_json() {
    let s = Suggestion::typo(vec!["their".into()]);
    let json = serde_json::to_string(&s).unwrap();
    let back: Suggestion = serde_json::from_str(&json).unwrap();
    assert_eq!(s, back);
}

#[test]
fn missing_fields_default_to_false_and_empty() {
    let back: Suggestion = serde_json::from_str("{}").unwrap();
    assert_eq!(back, Suggestion::default());
}
