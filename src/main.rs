//! Hipsters Café Frontend Entry Point

mod models;
mod catalog;
mod menu_state;
mod store;
mod config;
mod context;
mod content;
mod forms;
mod nav;
mod route;
mod scene;
mod components;
mod pages;
mod app;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = SiteConfig::load();
    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    if let Err(err) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", err).into());
    }
    if let Some(err) = config_error {
        log::error!("[CONFIG] {}, using defaults", err);
    }
    log::info!("[APP] Starting {} ({} menu items)", config.brand, catalog::builtin().len());

    mount_to_body(move || view! { <App config=config /> });
}
