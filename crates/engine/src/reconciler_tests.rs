// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn empty_load_produces_exactly_twelve_tasks() {
    let result = reconcile(Vec::new(), 0);
    assert_eq!(result.len(), 12);
    let loads = result
        .iter()
        .filter(|t| matches!(t, Task::RepositoryLoad))
        .count();
    assert_eq!(loads, 10);
    assert_eq!(
        result.iter().filter(|t| matches!(t, Task::WaitThreadpool)).count(),
        1
    );
    assert_eq!(
        result.iter().filter(|t| matches!(t, Task::ForceQuit)).count(),
        1
    );
}

#[test]
fn does_not_duplicate_existing_anchors() {
    let workload = vec![Task::WaitThreadpool, Task::ForceQuit];
    let result = reconcile(workload, 10);
    assert_eq!(
        result.iter().filter(|t| matches!(t, Task::WaitThreadpool)).count(),
        1
    );
    assert_eq!(
        result.iter().filter(|t| matches!(t, Task::ForceQuit)).count(),
        1
    );
}

#[test]
fn active_pipeline_actions_count_toward_the_buffer() {
    let workload = vec![Task::Cleanup {
        reponame: "a/b".into(),
    }];
    let result = reconcile(workload, 0);
    let loads = result
        .iter()
        .filter(|t| matches!(t, Task::RepositoryLoad))
        .count();
    // One active task plus nine loads reaches the buffer of ten.
    assert_eq!(loads, 9);
}

#[test]
fn full_repository_map_adds_no_loads() {
    let result = reconcile(Vec::new(), MAX_BUFFER_REPOS);
    let loads = result
        .iter()
        .filter(|t| matches!(t, Task::RepositoryLoad))
        .count();
    assert_eq!(loads, 0);
}
