//! Task List Operations
//!
//! Pure functions over the task list. Every mutation returns a fresh `Vec`
//! and leaves its input untouched.

use crate::models::{Todo, TodoId, TodoStats};

/// Pick an id for a task created at `now_ms`.
///
/// Ids follow the clock but never repeat: a second task in the same
/// millisecond (or after the clock stepped back) gets `last + 1`.
/// Returns `None` when `last` is `u64::MAX` and `now_ms` is already taken.
pub fn next_id(todos: &[Todo], now_ms: u64) -> Option<TodoId> {
    match todos.iter().map(|t| t.id).max() {
        Some(last) if last >= now_ms => last
            .checked_add(1)
            .or_else(|| (!contains(todos, now_ms)).then_some(now_ms)),
        _ => Some(now_ms),
    }
}

/// Append a new, uncompleted task
pub fn added(todos: &[Todo], id: TodoId, text: &str) -> Vec<Todo> {
    let mut next = todos.to_vec();
    next.push(Todo::new(id, text));
    next
}

/// Flip `completed` on the task with `id`
pub fn toggled(todos: &[Todo], id: TodoId) -> Vec<Todo> {
    todos
        .iter()
        .map(|t| {
            if t.id == id {
                Todo { completed: !t.completed, ..t.clone() }
            } else {
                t.clone()
            }
        })
        .collect()
}

/// Drop the task with `id`
pub fn deleted(todos: &[Todo], id: TodoId) -> Vec<Todo> {
    todos.iter().filter(|t| t.id != id).cloned().collect()
}

/// Replace the text of the task with `id`
pub fn edited(todos: &[Todo], id: TodoId, text: &str) -> Vec<Todo> {
    todos
        .iter()
        .map(|t| {
            if t.id == id {
                Todo { text: text.to_string(), ..t.clone() }
            } else {
                t.clone()
            }
        })
        .collect()
}

pub fn find(todos: &[Todo], id: TodoId) -> Option<&Todo> {
    todos.iter().find(|t| t.id == id)
}

/// Row identities in display order
pub fn ids(todos: &[Todo]) -> Vec<TodoId> {
    todos.iter().map(|t| t.id).collect()
}

pub fn contains(todos: &[Todo], id: TodoId) -> bool {
    todos.iter().any(|t| t.id == id)
}

/// Derive total/completed/pending counts
pub fn stats(todos: &[Todo]) -> TodoStats {
    let total = todos.len();
    let completed = todos.iter().filter(|t| t.completed).count();
    TodoStats {
        total,
        completed,
        pending: total - completed,
    }
}
