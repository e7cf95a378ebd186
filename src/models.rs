//! Frontend Models
//!
//! Task records and display preferences persisted in browser storage.

use serde::{Deserialize, Serialize};

/// Millisecond-timestamp based task identifier
pub type TodoId = u64;

/// A single task (serialized as `{ "id", "text", "completed" }`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Light/dark display preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than the literal `"dark"` reads as light.
    pub fn from_storage(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Label for the button that switches *away* from this theme
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "☾⋆ Dark",
            Theme::Dark => "☀︎ Light",
        }
    }
}

/// Summary counts shown in the stats tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(42, "Buy milk");
        assert_eq!(todo.id, 42);
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_todo_json_shape() {
        let json = serde_json::to_string(&Todo::new(7, "Walk dog")).unwrap();
        assert_eq!(json, r#"{"id":7,"text":"Walk dog","completed":false}"#);
    }

    #[test]
    fn test_theme_storage_values() {
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::from_storage("dark"), Theme::Dark);
        assert_eq!(Theme::from_storage("light"), Theme::Light);
        assert_eq!(Theme::from_storage("DARK"), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_theme_toggle_label() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggle_label(), "☾⋆ Dark");
        assert_eq!(Theme::Dark.toggle_label(), "☀︎ Light");
    }
}
