//! Admin Console Entry Point

mod api;
mod app;
mod audio;
mod components;
mod context;
mod markup;
mod models;
mod pagination;
mod reconcile;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
