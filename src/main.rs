//! Taskboard Frontend Entry Point

mod models;
mod error;
mod config;
mod position;
mod cache;
mod debounce;
mod api;
mod auth;
mod context;
mod store;
mod actions;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    if let Err(e) = rolling_logger::init_logger(rolling_logger::DEFAULT_CAPACITY, level) {
        web_sys::console::warn_1(&format!("[APP] logger: {}", e).into());
    }

    mount_to_body(App);
}
