// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use super::*;

#[test]
fn split_orgrepo_rejects_a_bare_name() {
    assert!(split_orgrepo("no-slash-here").is_err());
    assert_eq!(split_orgrepo("owner/repo").unwrap(), ("owner", "repo"));
}

#[test]
fn check_forked_short_circuits_on_a_cached_hit() {
    let store = Arc::new(Store::open_in_memory().unwrap());
    store.set(&GithubHosting::forked_cache_key("repo"), "Y").unwrap();
    let hosting = GithubHosting::new("test-token".to_string(), store).unwrap();
    // A cache hit never reaches the network, so this succeeds offline.
    assert!(hosting.check_forked("owner/repo").unwrap());
}
