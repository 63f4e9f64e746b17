// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn wire_shape_is_tagged_on_name() {
    let task = Task::RepositoryCheckout {
        reponame: "foo/bar".into(),
    };
    let value = serde_json::to_value(&task).unwrap();
    assert_eq!(value["name"], "repository_checkout");
    assert_eq!(value["reponame"], "foo/bar");
}

#[test]
fn round_trips_through_json() {
    for task in [
        Task::RepositoryLoad,
        Task::RepositoryEnd,
        Task::CollectNonwords {
            reponame: "a/b".into(),
        },
        Task::WaitThreadpool,
        Task::ForceQuit,
    ] {
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }
}

#[test]
fn anchors_carry_fixed_priority() {
    assert_eq!(Task::WaitThreadpool.priority(), Some(999));
    assert_eq!(Task::ForceQuit.priority(), Some(1000));
    assert!(Task::WaitThreadpool.interactive());
    assert!(Task::ForceQuit.interactive());
}

#[test]
fn background_tasks_are_not_interactive() {
    let checkout = Task::RepositoryCheckout {
        reponame: "a/b".into(),
    };
    let summary = Task::RepositorySummary {
        reponame: "a/b".into(),
    };
    assert!(!checkout.interactive());
    assert!(!summary.interactive());
    assert!(!Task::NonwordUpdate.interactive());
    assert_eq!(checkout.priority(), None);
}

#[test]
fn reponame_extracted_for_payload_carrying_variants() {
    let task = Task::Submit {
        reponame: "owner/repo".into(),
    };
    assert_eq!(task.reponame(), Some("owner/repo"));
    assert_eq!(Task::PromptQuit.reponame(), None);
}

#[test]
fn unknown_name_tag_fails_to_deserialize() {
    let err = serde_json::from_str::<Task>(r#"{"name":"not_a_real_task"}"#);
    assert!(err.is_err());
}
