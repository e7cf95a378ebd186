//! Daily To-Do Frontend Entry Point

mod models;
mod list;
mod storage;
mod session;
mod editing;
mod theme;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting Daily To-Do frontend");

    mount_to_body(App);
}
