#![allow(warnings)]
//! Shop Cart Frontend Entry Point

mod app;
mod components;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

const LOG_LEVEL: log::LevelFilter = if cfg!(debug_assertions) {
    log::LevelFilter::Debug
} else {
    log::LevelFilter::Info
};

fn main() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        rolling_logger::dump_recent("[APP] Panicked");
    }));
    if let Err(err) = rolling_logger::init(LOG_LEVEL) {
        rolling_logger::emit(log::Level::Warn, &format!("[APP] Logger not installed: {err}"));
    }
    log::info!("[APP] Mounting shop screen");
    mount_to_body(App);
}
