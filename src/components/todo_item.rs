//! Todo Item Component
//!
//! One task row: completion checkbox, text or inline editor, and
//! edit / save / cancel / delete controls.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::editing::{EditOutcome, EditState};
use crate::models::TodoId;

#[component]
pub fn TodoItem(id: TodoId) -> impl IntoView {
    let ctx = use_app_context();

    // Live view of this row's record
    let todo = Memo::new(move |_| ctx.todo(id));
    let completed = move || todo.with(|t| t.as_ref().is_some_and(|t| t.completed));
    let text = move || todo.with(|t| t.as_ref().map(|t| t.text.clone()).unwrap_or_default());

    // Row-local edit mode and draft
    let edit = RwSignal::new(EditState::default());
    let input_ref = NodeRef::<html::Input>::new();

    // The row may already be disposed when a late blur arrives
    let apply = move |step: fn(&mut EditState) -> EditOutcome| {
        if let Some(EditOutcome::Commit(new_text)) = edit.try_update(step) {
            ctx.edit_todo(id, &new_text);
        }
    };
    let save = move || apply(EditState::save);

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if let Some(EditOutcome::Commit(new_text)) = edit.try_update(|s| s.key(&key)) {
            ctx.edit_todo(id, &new_text);
        }
    };

    // Focus the editor as soon as it is mounted
    Effect::new(move |_| {
        if edit.with(|s| s.is_editing()) {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let is_editing = move || edit.with(|s| s.is_editing());

    view! {
        <div class=move || if completed() { "todo-row completed" } else { "todo-row" }>
            <div class="todo-main">
                <input
                    type="checkbox"
                    class="todo-check"
                    prop:checked=completed
                    on:change=move |_| ctx.toggle_todo(id)
                />

                <Show
                    when=is_editing
                    fallback=move || view! {
                        <span class=move || if completed() { "todo-text done" } else { "todo-text" }>
                            {text}
                        </span>
                    }
                >
                    <input
                        type="text"
                        class="todo-edit-input"
                        node_ref=input_ref
                        prop:value=move || edit.with(|s| s.draft().unwrap_or_default().to_string())
                        on:input=move |ev| edit.update(|s| s.set_draft(event_target_value(&ev)))
                        on:keydown=on_keydown
                        on:blur=move |_| apply(EditState::blur)
                    />
                </Show>
            </div>

            <div class="todo-actions">
                <Show
                    when=is_editing
                    fallback=move || view! {
                        <button
                            class="todo-btn edit"
                            aria-label="Edit task"
                            on:click=move |_| {
                                let current = text();
                                edit.update(|s| s.begin(&current));
                            }
                        >
                            "✎"
                        </button>
                    }
                >
                    // mousedown would blur the editor and save before cancel runs
                    <button
                        class="todo-btn save"
                        aria-label="Save"
                        on:mousedown=|ev| ev.prevent_default()
                        on:click=move |_| save()
                    >
                        "✓"
                    </button>
                    <button
                        class="todo-btn cancel"
                        aria-label="Cancel"
                        on:mousedown=|ev| ev.prevent_default()
                        on:click=move |_| edit.update(|s| s.cancel())
                    >
                        "✕"
                    </button>
                </Show>

                <button
                    class="todo-btn delete"
                    aria-label="Delete task"
                    on:click=move |_| ctx.delete_todo(id)
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}
