//! Daily To-Do App
//!
//! Root component: owns the session, provides it as context and keeps the
//! document theme in sync with it.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::components::{NewTodoForm, StatsPanel, TodoHeader, TodoList};
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::load();
    provide_context(ctx);

    theme::set_page_title();

    // Re-apply document classes whenever the theme flips
    Effect::new(move |_| theme::apply(ctx.theme()));

    view! {
        <div class="app-container">
            <TodoHeader />
            <StatsPanel />
            <NewTodoForm />
            <TodoList />
        </div>
    }
}
