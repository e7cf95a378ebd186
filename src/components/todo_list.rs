//! Todo List Component
//!
//! Renders every task in insertion order, or a placeholder when empty.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::components::TodoItem;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="todo-list">
            <Show
                when=move || !ctx.is_empty()
                fallback=|| view! { <p class="empty-placeholder">"No tasks yet. Add one above!"</p> }
            >
                <For
                    each=move || ctx.todo_ids()
                    // Keyed by id only: rows update in place and keep their edit state
                    key=|id| *id
                    children=move |id| view! { <TodoItem id=id /> }
                />
            </Show>
        </div>
    }
}
