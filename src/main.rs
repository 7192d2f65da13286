//! Todo List Frontend Entry Point

mod app;
mod board;
mod browser;
mod client;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod listing;
mod markup;
mod models;
mod removal;
mod route;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    if let Err(e) = console_logger::init_logger(config.log_level) {
        web_sys::console::warn_1(&format!("logger already initialised: {}", e).into());
    }
    log::info!("starting todo-ui against {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
