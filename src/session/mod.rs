//! Todo Session
//!
//! Owns the task list and theme flag for one page load. Each mutation
//! replaces the list with a new value and then writes it through to storage.

use thiserror::Error;

use crate::list;
use crate::models::{Theme, Todo, TodoId, TodoStats};
use crate::storage::{self, KeyValueStore};


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("task text must not be empty")]
    EmptyText,
    #[error("no free task id")]
    IdExhausted,
}

pub type TodoResult<T> = Result<T, TodoError>;

/// Trim `text`, refusing whitespace-only input
fn normalize(text: &str) -> TodoResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(TodoError::EmptyText)
    } else {
        Ok(trimmed)
    }
}

pub struct TodoSession<S: KeyValueStore> {
    store: S,
    todos: Vec<Todo>,
    theme: Theme,
}

impl<S: KeyValueStore> TodoSession<S> {
    /// Restore state from `store`, falling back to an empty list and light theme
    pub fn load(store: S) -> Self {
        let todos = storage::load_todos(&store);
        let theme = storage::load_theme(&store);
        tracing::info!(count = todos.len(), theme = theme.as_str(), "session loaded");
        Self { store, todos, theme }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        list::find(&self.todos, id)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn stats(&self) -> TodoStats {
        list::stats(&self.todos)
    }

    /// Append a task created at `now_ms` and return its id
    pub fn add_todo(&mut self, text: &str, now_ms: u64) -> TodoResult<TodoId> {
        let text = normalize(text)?;
        let id = list::next_id(&self.todos, now_ms).ok_or(TodoError::IdExhausted)?;
        tracing::debug!(id, "adding todo");
        self.replace_todos(list::added(&self.todos, id, text));
        Ok(id)
    }

    /// Flip completion; returns `false` if no task has `id`
    pub fn toggle_todo(&mut self, id: TodoId) -> bool {
        if !list::contains(&self.todos, id) {
            return false;
        }
        tracing::debug!(id, "toggling todo");
        self.replace_todos(list::toggled(&self.todos, id));
        true
    }

    /// Remove a task; returns `false` if no task has `id`
    pub fn delete_todo(&mut self, id: TodoId) -> bool {
        if !list::contains(&self.todos, id) {
            return false;
        }
        tracing::debug!(id, "deleting todo");
        self.replace_todos(list::deleted(&self.todos, id));
        true
    }

    /// Replace a task's text; `Ok(false)` if no task has `id`
    pub fn edit_todo(&mut self, id: TodoId, text: &str) -> TodoResult<bool> {
        let text = normalize(text)?;
        if !list::contains(&self.todos, id) {
            return Ok(false);
        }
        tracing::debug!(id, "editing todo");
        self.replace_todos(list::edited(&self.todos, id, text));
        Ok(true)
    }

    /// Flip light/dark, persist it and return the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(error) = storage::save_theme(&self.store, self.theme) {
            tracing::warn!(%error, "failed persisting theme");
        }
        self.theme
    }

    fn replace_todos(&mut self, next: Vec<Todo>) {
        self.todos = next;
        // In-memory state stays authoritative if the write fails
        if let Err(error) = storage::save_todos(&self.store, &self.todos) {
            tracing::warn!(%error, "failed persisting todos");
        }
    }
}
