//! Storage Adapter
//!
//! Persists the task list and theme flag as two string entries in the
//! browser's per-origin `localStorage`.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::models::{Theme, Todo};

/// Key holding the JSON-serialized task list
pub const TODOS_KEY: &str = "todos";
/// Key holding the literal `"dark"` or `"light"`
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read {key}: {message}")]
    Read { key: String, message: String },
    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },
    #[error("malformed stored data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Minimal string key-value store
pub trait KeyValueStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

fn js_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl KeyValueStore for LocalStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: js_message(e),
        })
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: js_message(e),
        })
    }
}

/// In-process store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ========================
// Typed Accessors
// ========================

fn try_load_todos(store: &impl KeyValueStore) -> StorageResult<Vec<Todo>> {
    match store.read(TODOS_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Load the task list; absent, unreadable or malformed data yields an empty list.
pub fn load_todos(store: &impl KeyValueStore) -> Vec<Todo> {
    try_load_todos(store).unwrap_or_else(|error| {
        tracing::warn!(%error, "discarding stored todos");
        Vec::new()
    })
}

pub fn save_todos(store: &impl KeyValueStore, todos: &[Todo]) -> StorageResult<()> {
    let json = serde_json::to_string(todos)?;
    store.write(TODOS_KEY, &json)
}

/// Load the theme flag; absent or unreadable means light.
pub fn load_theme(store: &impl KeyValueStore) -> Theme {
    match store.read(THEME_KEY) {
        Ok(stored) => stored.as_deref().map(Theme::from_storage).unwrap_or_default(),
        Err(error) => {
            tracing::warn!(%error, "failed reading theme, using light");
            Theme::Light
        }
    }
}

pub fn save_theme(store: &impl KeyValueStore, theme: Theme) -> StorageResult<()> {
    store.write(THEME_KEY, theme.as_str())
}
