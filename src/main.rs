//! Kanban Board Frontend Entry Point

mod app;
mod bindings;
mod components;
mod config;
mod containers;
mod dnd;
mod error;
mod forms;
mod items;
mod logging;
mod models;
mod session;
mod store;
mod tree;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = match BoardConfig::bundled() {
        Ok(config) => {
            logging::init(&config.log_level);
            config
        }
        Err(err) => {
            logging::init("info");
            tracing::error!(%err, "bundled board config rejected, starting empty");
            BoardConfig::default()
        }
    };
    tracing::info!(columns = config.columns.len(), "mounting board");

    mount_to_body(move || view! { <App config=config /> });
}
