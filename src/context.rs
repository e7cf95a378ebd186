//! Application Context
//!
//! Shared session handle provided via Leptos Context API.

use leptos::prelude::*;

use crate::list;
use crate::models::{Theme, Todo, TodoId, TodoStats};
use crate::session::TodoSession;
use crate::storage::LocalStorage;

/// Reactive handle to the page's todo session
#[derive(Clone, Copy)]
pub struct AppContext {
    session: RwSignal<TodoSession<LocalStorage>>,
}

impl AppContext {
    /// Load the session from `localStorage`
    pub fn load() -> Self {
        Self {
            session: RwSignal::new(TodoSession::load(LocalStorage)),
        }
    }

    // ========================
    // Reads (tracked)
    // ========================

    pub fn todo_ids(&self) -> Vec<TodoId> {
        self.session.with(|s| list::ids(s.todos()))
    }

    pub fn todo(&self, id: TodoId) -> Option<Todo> {
        self.session.with(|s| s.todo(id).cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.session.with(|s| s.todos().is_empty())
    }

    pub fn stats(&self) -> TodoStats {
        self.session.with(|s| s.stats())
    }

    pub fn theme(&self) -> Theme {
        self.session.with(|s| s.theme())
    }

    // ========================
    // Mutations
    // ========================

    /// Returns whether the task was accepted
    pub fn add_todo(&self, text: &str) -> bool {
        let now_ms = js_sys::Date::now() as u64;
        self.session
            .try_update(|s| match s.add_todo(text, now_ms) {
                Ok(_) => true,
                Err(error) => {
                    tracing::debug!(%error, "add refused");
                    false
                }
            })
            .unwrap_or(false)
    }

    pub fn toggle_todo(&self, id: TodoId) {
        self.session.update(|s| {
            s.toggle_todo(id);
        });
    }

    pub fn delete_todo(&self, id: TodoId) {
        self.session.update(|s| {
            s.delete_todo(id);
        });
    }

    /// Returns whether a task's text was replaced
    pub fn edit_todo(&self, id: TodoId, text: &str) -> bool {
        self.session
            .try_update(|s| match s.edit_todo(id, text) {
                Ok(found) => found,
                Err(error) => {
                    tracing::debug!(%error, id, "edit refused");
                    false
                }
            })
            .unwrap_or(false)
    }

    pub fn toggle_theme(&self) {
        self.session.update(|s| {
            s.toggle_theme();
        });
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
