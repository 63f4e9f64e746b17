// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::handlers::HandlerRegistry;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;
use typofix_core::{Choice, InteractionError};

struct NullInteraction;

impl Interaction for NullInteraction {
    fn send(&self, _message: &str) {}
    fn get_input(&self, _prompt: &str) -> Result<String, InteractionError> {
        Ok(String::new())
    }
    fn get_confirmation(&self, _prompt: &str, default: bool) -> Result<bool, InteractionError> {
        Ok(default)
    }
    fn make_choice(&self, _choices: Vec<Choice<String>>) -> Result<Option<String>, InteractionError> {
        Ok(None)
    }
    fn check_quit(&self, tasks_empty: bool) -> bool {
        tasks_empty
    }
    fn add_repo_save(
        &self,
        _repodir: &str,
        _add_word: &str,
        _del_word: &str,
        _file_paths: &[String],
    ) -> Result<(), InteractionError> {
        Ok(())
    }
}

fn progress() -> Arc<ProgressRegistry> {
    Arc::new(ProgressRegistry::new())
}

fn new_controller(handlers: Arc<HandlerRegistry>) -> Arc<Controller> {
    Controller::new(
        handlers,
        crate::test_support::fake_services(),
        PathBuf::from("/tmp"),
        progress(),
    )
}

#[test]
fn user_shutdown_saves_remaining_higher_priority_task() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut registry = HandlerRegistry::new();
    {
        let calls = Arc::clone(&calls);
        registry.register("repository_load", move |ctx, _task| {
            calls.fetch_add(1, AtomicOrdering::SeqCst);
            ctx.controller.quit();
            Ok(())
        });
    }
    registry.register("cleanup", |_ctx, _task| Ok(()));
    let handlers = Arc::new(registry);

    let controller = new_controller(handlers);
    controller.add(Task::RepositoryLoad);
    controller.add(Task::Cleanup {
        reponame: "keep/me".into(),
    });

    let interaction: Arc<dyn Interaction> = Arc::new(NullInteraction);
    let (saved, result) = controller.run_with_workers(interaction, 1);
    result.unwrap();

    assert_eq!(calls.load(AtomicOrdering::SeqCst), 1);
    assert_eq!(
        saved,
        vec![Task::Cleanup {
            reponame: "keep/me".into()
        }]
    );
}

#[test]
fn force_quit_terminates_the_loop() {
    let mut registry = HandlerRegistry::new();
    registry.register("force_quit", |ctx, _task| {
        ctx.controller.quit();
        Ok(())
    });
    let handlers = Arc::new(registry);
    let controller = new_controller(handlers);
    controller.add(Task::ForceQuit);
    let interaction: Arc<dyn Interaction> = Arc::new(NullInteraction);
    let (saved, result) = controller.run_with_workers(interaction, 1);
    result.unwrap();
    assert!(saved.is_empty());
}

#[test]
fn missing_handler_propagates_as_error() {
    let handlers = Arc::new(HandlerRegistry::new());
    let controller = new_controller(handlers);
    controller.add(Task::PromptQuit);
    let interaction: Arc<dyn Interaction> = Arc::new(NullInteraction);
    let (_saved, result) = controller.run_with_workers(interaction, 1);
    assert!(result.is_err());
}
