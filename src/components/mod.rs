//! UI Components
//!
//! Leptos components composed by `App`.

mod todo_header;
mod stats_panel;
mod new_todo_form;
mod todo_list;
mod todo_item;

pub use todo_header::TodoHeader;
pub use stats_panel::StatsPanel;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_item::TodoItem;
