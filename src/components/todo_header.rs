//! Header Component
//!
//! Application title with the light/dark toggle.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn TodoHeader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="todo-header">
            <h4 class="todo-title">"Daily To-Do List"</h4>
            <button
                class="theme-toggle"
                aria-label="Toggle dark mode"
                on:click=move |_| ctx.toggle_theme()
            >
                {move || ctx.theme().toggle_label()}
            </button>
        </header>
    }
}
