// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn extracts_only_github_repo_links() {
    let body = "- [pylint](https://github.com/pylint-dev/pylint) tool\n\
                - [not a repo](https://example.com/pylint-dev/pylint)\n\
                - [subpath](https://github.com/psf/black/blob/main/README.md)\n";
    assert_eq!(
        extract_github_links(body),
        vec!["pylint-dev/pylint".to_string(), "psf/black".to_string()]
    );
}

#[test]
fn a_fresh_timestamp_is_not_stale() {
    let now = Utc::now().to_rfc3339();
    assert!(!is_stale(&now));
}

#[test]
fn a_timestamp_older_than_seven_days_is_stale() {
    let old = (Utc::now() - chrono::Duration::days(8)).to_rfc3339();
    assert!(is_stale(&old));
}

#[test]
fn garbage_is_treated_as_stale() {
    assert!(is_stale("not-a-timestamp"));
}
