// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

#[test]
fn priority_ordering_scenario() {
    let mut q = InputQueue::new();
    q.add(Task::Cleanup {
        reponame: "later".into(),
    });
    q.add(Task::RepositoryLoad);
    // RepositoryLoad has priority 5, Cleanup has priority 10.
    assert_eq!(q.pop().unwrap(), Task::RepositoryLoad);
    assert_eq!(
        q.pop().unwrap(),
        Task::Cleanup {
            reponame: "later".into()
        }
    );
}

#[test]
fn pop_on_empty_queue_errors() {
    let mut q = InputQueue::new();
    assert!(matches!(q.pop(), Err(QueueError::Empty)));
}

#[test]
fn peek_does_not_remove() {
    let mut q = InputQueue::new();
    q.add(Task::PromptQuit);
    assert_eq!(q.peek().unwrap(), &Task::PromptQuit);
    assert_eq!(q.len(), 1);
}

#[test]
fn save_drains_in_priority_order() {
    let mut q = InputQueue::new();
    q.add(Task::ForceQuit);
    q.add(Task::RepositoryLoad);
    q.add(Task::WaitThreadpool);
    let saved = q.save();
    assert_eq!(
        saved,
        vec![Task::RepositoryLoad, Task::WaitThreadpool, Task::ForceQuit]
    );
    assert!(q.is_empty());
}

fn arbitrary_priority_task() -> impl Strategy<Value = Task> {
    prop_oneof![
        Just(Task::RepositoryLoad),
        Just(Task::PromptQuit),
        Just(Task::WaitThreadpool),
        Just(Task::ForceQuit),
        "[a-z]{1,6}/[a-z]{1,6}".prop_map(|reponame| Task::Cleanup { reponame }),
    ]
}

proptest! {
    #[test]
    fn pops_are_always_non_decreasing(tasks in proptest::collection::vec(arbitrary_priority_task(), 0..30)) {
        let mut q = InputQueue::new();
        for t in tasks {
            q.add(t);
        }
        let mut last = i64::MIN;
        while let Ok(t) = q.pop() {
            let p = t.priority().unwrap_or(i64::MAX);
            prop_assert!(p >= last);
            last = p;
        }
    }
}
