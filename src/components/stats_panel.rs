//! Stats Panel Component
//!
//! Total / Done / Pending tiles derived from the current list.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn StatsPanel() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="stats-grid">
            <StatTile label="Total" tone="total" value=Signal::derive(move || ctx.stats().total) />
            <StatTile label="Done" tone="done" value=Signal::derive(move || ctx.stats().completed) />
            <StatTile label="Pending" tone="pending" value=Signal::derive(move || ctx.stats().pending) />
        </div>
    }
}

#[component]
fn StatTile(
    label: &'static str,
    tone: &'static str,
    value: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class=format!("stat-tile {}", tone)>
            <p class="stat-label">{label}</p>
            <p class="stat-value">{move || value.get()}</p>
        </div>
    }
}
