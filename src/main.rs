//! Pokedex Frontend Entry Point

mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod detail;
mod error;
mod models;
mod route;
mod type_colors;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(log::LevelFilter::Debug, 200) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }
    mount_to_body(App);
}
