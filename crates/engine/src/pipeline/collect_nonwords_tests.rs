// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;
use std::sync::Arc;

use typofix_core::{ProgressRegistry, SpellCheckReport, Task, WordDetails, WordOccurrence};

use super::*;
use crate::controller::Controller;
use crate::handlers::HandlerRegistry;
use crate::test_support::{fake_services, ScriptedInteraction};

fn context(controller: &Arc<Controller>, services: Arc<crate::services::Services>, interaction: Arc<ScriptedInteraction>) -> Context {
    Context::new(Arc::clone(controller), Some(interaction), services)
}

#[test]
fn missing_spelling_json_still_enqueues_submit() {
    let tmp = tempfile::tempdir().unwrap();
    let repodir = tmp.path().join("owner-repo");
    std::fs::create_dir_all(&repodir).unwrap();

    let handlers = Arc::new(HandlerRegistry::new());
    let services = fake_services();
    services
        .store
        .set_json("repository_map", &HashMap::from([("owner-repo".to_string(), repodir.display().to_string())]))
        .unwrap();
    let controller = Controller::new(handlers, Arc::clone(&services), tmp.path().to_path_buf(), Arc::new(ProgressRegistry::new()));
    let interaction = Arc::new(ScriptedInteraction::default());
    let ctx = context(&controller, Arc::clone(&services), Arc::clone(&interaction));

    handle(
        ctx,
        Task::CollectNonwords {
            reponame: "owner-repo".to_string(),
        },
    )
    .unwrap();

    assert_eq!(
        controller.peek_input(),
        Some(Task::Submit {
            reponame: "owner-repo".to_string()
        })
    );
    assert!(interaction
        .messages
        .lock()
        .unwrap()
        .iter()
        .any(|m| m.contains("Unable to locate")));
}

#[test]
fn manual_correction_rewrites_the_file_and_records_a_repo_save() {
    let tmp = tempfile::tempdir().unwrap();
    let repodir = tmp.path().join("owner-repo");
    std::fs::create_dir_all(&repodir).unwrap();
    let doc_path = repodir.join("README.md");
    std::fs::write(&doc_path, "This is teh body.\n").unwrap();

    let mut report = SpellCheckReport::new();
    report.insert(
        "teh".to_string(),
        WordDetails {
            files: vec![WordOccurrence {
                category: "body".to_string(),
                file: doc_path.display().to_string(),
            }],
            nonword: false,
            suggestion: None,
        },
    );
    std::fs::write(repodir.join("spelling.json"), serde_json::to_vec(&report).unwrap()).unwrap();

    let handlers = Arc::new(HandlerRegistry::new());
    let services = fake_services();
    services
        .store
        .set_json("repository_map", &HashMap::from([("owner-repo".to_string(), repodir.display().to_string())]))
        .unwrap();
    let controller = Controller::new(handlers, Arc::clone(&services), tmp.path().to_path_buf(), Arc::new(ProgressRegistry::new()));

    let interaction = Arc::new(ScriptedInteraction::default());
    interaction.choices.lock().unwrap().push_back(Some("typo_manual".to_string()));
    interaction.inputs.lock().unwrap().push_back("the".to_string());

    let ctx = context(&controller, Arc::clone(&services), Arc::clone(&interaction));

    handle(
        ctx,
        Task::CollectNonwords {
            reponame: "owner-repo".to_string(),
        },
    )
    .unwrap();

    let rewritten = std::fs::read_to_string(&doc_path).unwrap();
    assert_eq!(rewritten, "This is the body.\n");

    let saves = interaction.repo_saves.lock().unwrap();
    assert_eq!(saves.len(), 1);
    assert_eq!(saves[0].1, "the");
    assert_eq!(saves[0].2, "teh");
}
