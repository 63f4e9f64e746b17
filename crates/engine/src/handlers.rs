// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Handler Registry (C6): `name -> (Context -> Runner)`.
//!
//! The source expresses this as a factory returning a zero-argument
//! closure; in Rust a plain function of `(Context, Task) -> Result<(),
//! EngineError>` is the same decoupling without needing closures (see
//! the Handler-factory Design Note).

use std::collections::HashMap;
use std::sync::Arc;

use typofix_core::{Interaction, Task};

use crate::controller::Controller;
use crate::error::EngineError;
use crate::services::Services;

/// Passed to every handler invocation. `interaction` is `Some` only for
/// interactive (Input Queue) tasks; background (Worker Pool) tasks never
/// solicit human input directly.
#[derive(Clone)]
pub struct Context {
    pub controller: Arc<Controller>,
    pub interaction: Option<Arc<dyn Interaction>>,
    pub services: Arc<Services>,
}

impl Context {
    pub fn new(
        controller: Arc<Controller>,
        interaction: Option<Arc<dyn Interaction>>,
        services: Arc<Services>,
    ) -> Self {
        Context {
            controller,
            interaction,
            services,
        }
    }

    /// The interaction port, expected to be present (panics with a clear
    /// message otherwise — a programmer error, since only interactive
    /// handlers should call this).
    pub fn interaction(&self) -> &Arc<dyn Interaction> {
        self.interaction
            .as_ref()
            .expect("handler registered as interactive has no Interaction port")
    }
}

pub type Runner = dyn Fn(Context, Task) -> Result<(), EngineError> + Send + Sync;

#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<&'static str, Box<Runner>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under `name`. Panics on a duplicate
    /// registration — handler setup happens once at session start and a
    /// collision is a programmer error, not a runtime condition.
    pub fn register(
        &mut self,
        name: &'static str,
        handler: impl Fn(Context, Task) -> Result<(), EngineError> + Send + Sync + 'static,
    ) {
        if self.handlers.insert(name, Box::new(handler)).is_some() {
            panic!("duplicate handler registration for {name:?}");
        }
    }

    pub fn lookup(&self, task: &Task) -> Option<&Runner> {
        self.handlers.get(task.name()).map(|b| b.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }
}
